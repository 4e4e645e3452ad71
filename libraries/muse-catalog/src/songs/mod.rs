//! Song creation, lookup, and like tracking

use crate::{albums, users, Catalog};
use muse_core::{error::Result, types::*, MuseError};
use tracing::debug;

/// Create a song on an existing album
///
/// Fails with `NotFound` when no album matches `album_title`; nothing is
/// created in that case.
pub fn create(
    catalog: &mut Catalog,
    title: &str,
    album_title: &str,
    duration_secs: u32,
) -> Result<Song> {
    let album_id = albums::find_by_title(catalog, album_title)
        .map(|album| album.id)
        .ok_or_else(|| MuseError::not_found("Album", album_title))?;

    let id = catalog.next_song_id();
    let song = Song::new(id, title, album_id, duration_secs);
    catalog.songs.push(song.clone());
    catalog.album_songs.entry(album_id).or_default().push(id);
    debug!(song_id = id, album_id, title, "Created song");
    Ok(song)
}

/// Record that a user likes a song
///
/// Idempotent: a second like by the same user changes nothing. Fails with
/// `NotFound` when the user or the song is missing.
pub fn like(catalog: &mut Catalog, mobile: &str, song_title: &str) -> Result<Song> {
    let user_id = users::require_by_mobile(catalog, mobile)?;
    let song = find_by_title(catalog, song_title)
        .cloned()
        .ok_or_else(|| MuseError::not_found("Song", song_title))?;

    let likers = catalog.song_likes.entry(song.id).or_default();
    if !likers.contains(&user_id) {
        likers.push(user_id);
        debug!(song_id = song.id, user_id, "Recorded like");
    }

    Ok(song)
}

/// Get all songs in creation order
pub fn get_all(catalog: &Catalog) -> &[Song] {
    &catalog.songs
}

/// Songs of one album, in the order they were added
pub fn get_by_album(catalog: &Catalog, album_id: AlbumId) -> Vec<Song> {
    catalog.album_songs.get(&album_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.songs.iter().find(|song| song.id == *id))
            .cloned()
            .collect()
    })
}

/// Find a song by title (first match when titles collide)
pub fn find_by_title<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a Song> {
    catalog.songs.iter().find(|song| song.title == title)
}

/// Users who liked the song, in like order
pub fn likers(catalog: &Catalog, song_id: SongId) -> Vec<User> {
    catalog.song_likes.get(&song_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.users.iter().find(|user| user.id == *id))
            .cloned()
            .collect()
    })
}
