//! Playlist creation, lookup, and membership

use crate::{users, Catalog};
use muse_core::{error::Result, types::*, MuseError};
use tracing::debug;

/// Build a playlist for songs up to a length cap
///
/// Length-based song selection is not implemented: the returned playlist is
/// not registered in the catalog and has no songs and no listeners. The
/// parameters stay in the signature so finishing the feature is not a
/// breaking change.
pub fn create_by_length(
    catalog: &mut Catalog,
    _mobile: &str,
    title: &str,
    _max_duration_secs: u32,
) -> Playlist {
    let id = catalog.next_playlist_id();
    Playlist::new(id, title)
}

/// Create a playlist from a set of song titles
///
/// The playlist contains every catalog song whose title appears in
/// `song_titles`, in catalog order (not request order). The requesting user
/// becomes the sole listener, the playlist is added to their playlist list,
/// and it overwrites their most-recently-created slot.
///
/// Fails with `NotFound` when the user is missing or when none of the
/// requested titles match any song.
pub fn create_by_names(
    catalog: &mut Catalog,
    mobile: &str,
    title: &str,
    song_titles: &[String],
) -> Result<Playlist> {
    let user_id = users::require_by_mobile(catalog, mobile)?;

    let selected: Vec<SongId> = catalog
        .songs
        .iter()
        .filter(|song| song_titles.iter().any(|requested| *requested == song.title))
        .map(|song| song.id)
        .collect();

    if selected.is_empty() {
        return Err(MuseError::not_found("Song", song_titles.join(", ")));
    }

    let id = catalog.next_playlist_id();
    let playlist = Playlist::new(id, title);
    catalog.playlists.push(playlist.clone());

    catalog.playlist_songs.insert(id, selected);
    catalog.playlist_listeners.insert(id, vec![user_id]);
    catalog.user_playlists.entry(user_id).or_default().push(id);
    catalog.creator_playlist.insert(user_id, id);

    debug!(playlist_id = id, user_id, title, "Created playlist");
    Ok(playlist)
}

/// Look up a playlist by title on behalf of a user
///
/// Side effect: the playlist's listener list is replaced with the requesting
/// user alone; prior listeners are discarded on every call. Callers depend
/// on this reset, so change it only together with them.
///
/// Fails with `NotFound` when the user or the playlist is missing.
pub fn find(catalog: &mut Catalog, mobile: &str, title: &str) -> Result<Playlist> {
    let user_id = users::require_by_mobile(catalog, mobile)?;
    let playlist = catalog
        .playlists
        .iter()
        .find(|playlist| playlist.title == title)
        .cloned()
        .ok_or_else(|| MuseError::not_found("Playlist", title))?;

    // Listener list starts over with the requesting user.
    let listeners = catalog.playlist_listeners.entry(playlist.id).or_default();
    listeners.clear();
    listeners.push(user_id);

    debug!(playlist_id = playlist.id, user_id, "Playlist accessed");
    Ok(playlist)
}

/// Get all registered playlists in creation order
pub fn get_all(catalog: &Catalog) -> &[Playlist] {
    &catalog.playlists
}

/// Songs of one playlist, in membership order
pub fn songs_of(catalog: &Catalog, playlist_id: PlaylistId) -> Vec<Song> {
    catalog.playlist_songs.get(&playlist_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.songs.iter().find(|song| song.id == *id))
            .cloned()
            .collect()
    })
}

/// Listeners of one playlist, in listen order
pub fn listeners_of(catalog: &Catalog, playlist_id: PlaylistId) -> Vec<User> {
    catalog.playlist_listeners.get(&playlist_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.users.iter().find(|user| user.id == *id))
            .cloned()
            .collect()
    })
}

/// Playlists a user created or follows
pub fn of_user(catalog: &Catalog, user_id: UserId) -> Vec<Playlist> {
    catalog.user_playlists.get(&user_id).map_or_else(Vec::new, |ids| {
        ids.iter()
            .filter_map(|id| catalog.playlists.iter().find(|playlist| playlist.id == *id))
            .cloned()
            .collect()
    })
}

/// The playlist a user created most recently, if any
pub fn last_created_by(catalog: &Catalog, user_id: UserId) -> Option<&Playlist> {
    catalog
        .creator_playlist
        .get(&user_id)
        .and_then(|id| catalog.playlists.iter().find(|playlist| playlist.id == *id))
}
