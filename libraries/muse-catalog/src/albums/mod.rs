use crate::{artists, Catalog};
use muse_core::types::*;
use tracing::debug;

/// Create an album under the named artist
///
/// The artist is looked up by name (first match); a missing artist is
/// created implicitly, so this never fails.
pub fn create(catalog: &mut Catalog, title: &str, artist_name: &str) -> Album {
    let artist_id = match artists::find_by_name(catalog, artist_name).map(|artist| artist.id) {
        Some(id) => id,
        None => artists::create(catalog, artist_name).id,
    };

    let id = catalog.next_album_id();
    let album = Album::new(id, title, artist_id);
    catalog.albums.push(album.clone());
    catalog.artist_albums.entry(artist_id).or_default().push(id);
    debug!(album_id = id, artist_id, title, "Created album");
    album
}

/// Get all albums in creation order
pub fn get_all(catalog: &Catalog) -> &[Album] {
    &catalog.albums
}

/// Albums of one artist, in the order they were added
pub fn get_by_artist(catalog: &Catalog, artist_id: ArtistId) -> Vec<Album> {
    catalog.artist_albums.get(&artist_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.albums.iter().find(|album| album.id == *id))
            .cloned()
            .collect()
    })
}

/// Find an album by title (first match when titles collide)
pub fn find_by_title<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a Album> {
    catalog.albums.iter().find(|album| album.title == title)
}
