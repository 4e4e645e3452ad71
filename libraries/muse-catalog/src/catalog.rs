use crate::{albums, artists, playlists, rankings, songs, users};
use muse_core::{error::Result, types::*};
use std::collections::HashMap;

/// In-memory catalog store
///
/// Owns every entity list and relationship map. All operations go through
/// the vertical-slice modules; this type is the single handle callers pass
/// around. `&mut self` on mutating operations gives exclusive access at
/// compile time.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) users: Vec<User>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) albums: Vec<Album>,
    pub(crate) songs: Vec<Song>,
    pub(crate) playlists: Vec<Playlist>,

    // Relationship maps; values keep insertion order.
    pub(crate) artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
    pub(crate) album_songs: HashMap<AlbumId, Vec<SongId>>,
    pub(crate) playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
    pub(crate) playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
    pub(crate) user_playlists: HashMap<UserId, Vec<PlaylistId>>,
    pub(crate) creator_playlist: HashMap<UserId, PlaylistId>,
    pub(crate) song_likes: HashMap<SongId, Vec<UserId>>,

    user_seq: i64,
    artist_seq: i64,
    album_seq: i64,
    song_seq: i64,
    playlist_seq: i64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_user_id(&mut self) -> UserId {
        self.user_seq += 1;
        self.user_seq
    }

    pub(crate) fn next_artist_id(&mut self) -> ArtistId {
        self.artist_seq += 1;
        self.artist_seq
    }

    pub(crate) fn next_album_id(&mut self) -> AlbumId {
        self.album_seq += 1;
        self.album_seq
    }

    pub(crate) fn next_song_id(&mut self) -> SongId {
        self.song_seq += 1;
        self.song_seq
    }

    pub(crate) fn next_playlist_id(&mut self) -> PlaylistId {
        self.playlist_seq += 1;
        self.playlist_seq
    }
}

impl Catalog {
    // Users
    pub fn create_user(&mut self, name: &str, mobile: &str) -> User {
        users::create(self, name, mobile)
    }

    pub fn users(&self) -> &[User] {
        users::get_all(self)
    }

    pub fn find_user_by_mobile(&self, mobile: &str) -> Option<&User> {
        users::find_by_mobile(self, mobile)
    }

    // Artists
    pub fn create_artist(&mut self, name: &str) -> Artist {
        artists::create(self, name)
    }

    pub fn artists(&self) -> &[Artist] {
        artists::get_all(self)
    }

    pub fn find_artist_by_name(&self, name: &str) -> Option<&Artist> {
        artists::find_by_name(self, name)
    }

    // Albums
    pub fn create_album(&mut self, title: &str, artist_name: &str) -> Album {
        albums::create(self, title, artist_name)
    }

    pub fn albums(&self) -> &[Album] {
        albums::get_all(self)
    }

    pub fn albums_by_artist(&self, artist_id: ArtistId) -> Vec<Album> {
        albums::get_by_artist(self, artist_id)
    }

    // Songs
    pub fn create_song(
        &mut self,
        title: &str,
        album_title: &str,
        duration_secs: u32,
    ) -> Result<Song> {
        songs::create(self, title, album_title, duration_secs)
    }

    pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song> {
        songs::like(self, mobile, song_title)
    }

    pub fn songs(&self) -> &[Song] {
        songs::get_all(self)
    }

    pub fn songs_by_album(&self, album_id: AlbumId) -> Vec<Song> {
        songs::get_by_album(self, album_id)
    }

    pub fn song_likers(&self, song_id: SongId) -> Vec<User> {
        songs::likers(self, song_id)
    }

    // Playlists
    pub fn create_playlist_by_length(
        &mut self,
        mobile: &str,
        title: &str,
        max_duration_secs: u32,
    ) -> Playlist {
        playlists::create_by_length(self, mobile, title, max_duration_secs)
    }

    pub fn create_playlist_by_names(
        &mut self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> Result<Playlist> {
        playlists::create_by_names(self, mobile, title, song_titles)
    }

    pub fn find_playlist(&mut self, mobile: &str, title: &str) -> Result<Playlist> {
        playlists::find(self, mobile, title)
    }

    pub fn playlists(&self) -> &[Playlist] {
        playlists::get_all(self)
    }

    pub fn playlist_songs(&self, playlist_id: PlaylistId) -> Vec<Song> {
        playlists::songs_of(self, playlist_id)
    }

    pub fn playlist_listeners(&self, playlist_id: PlaylistId) -> Vec<User> {
        playlists::listeners_of(self, playlist_id)
    }

    pub fn playlists_of_user(&self, user_id: UserId) -> Vec<Playlist> {
        playlists::of_user(self, user_id)
    }

    pub fn last_created_playlist(&self, user_id: UserId) -> Option<&Playlist> {
        playlists::last_created_by(self, user_id)
    }

    // Rankings
    pub fn most_popular_artist(&self) -> Option<String> {
        rankings::most_popular_artist(self)
    }

    pub fn most_popular_song(&self) -> Option<String> {
        rankings::most_popular_song(self)
    }
}
