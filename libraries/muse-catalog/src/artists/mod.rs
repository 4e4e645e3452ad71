use crate::Catalog;
use muse_core::types::*;
use tracing::debug;

/// Create an artist; names are not required to be unique
pub fn create(catalog: &mut Catalog, name: &str) -> Artist {
    let id = catalog.next_artist_id();
    let artist = Artist::new(id, name);
    catalog.artists.push(artist.clone());
    debug!(artist_id = id, name, "Created artist");
    artist
}

/// Get all artists in creation order
pub fn get_all(catalog: &Catalog) -> &[Artist] {
    &catalog.artists
}

/// Find an artist by name (first match when names collide)
pub fn find_by_name<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Artist> {
    catalog.artists.iter().find(|artist| artist.name == name)
}
