//! Muse Core
//!
//! Domain types and error handling for the Muse music catalog.
//!
//! This crate defines the entities the catalog manages (`User`, `Artist`,
//! `Album`, `Song`, `Playlist`), their i64 identifier aliases, and the
//! unified [`MuseError`] / [`Result`] types shared by every layer above it.
//!
//! # Example
//!
//! ```rust
//! use muse_core::types::{Song, User};
//!
//! let user = User::new(1, "Alice", "555-0101");
//! let song = Song::new(1, "Opening Theme", 1, 200);
//!
//! assert_eq!(song.duration().as_secs(), 200);
//! assert_eq!(user.mobile, "555-0101");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{MuseError, Result};
pub use types::{
    Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId, User, UserId,
};
