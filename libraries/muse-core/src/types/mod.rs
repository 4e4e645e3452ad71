mod album;
mod artist;
mod playlist;
mod song;
mod user;

pub use album::{Album, AlbumId};
pub use artist::{Artist, ArtistId};
pub use playlist::{Playlist, PlaylistId};
pub use song::{Song, SongId};
pub use user::{User, UserId};
