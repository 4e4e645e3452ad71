//! Muse Catalog
//!
//! In-memory catalog store for the Muse music domain: users, artists,
//! albums, songs, and playlists, with the relationships between them
//! (ownership, membership, listening, likes) and two aggregate rankings.
//!
//! # Architecture
//!
//! - **Single Owner**: all entities and relationship maps live in one
//!   [`Catalog`] value; there is no ambient global state.
//! - **Vertical Slicing**: each entity owns its own module of operations
//!   (`users`, `artists`, `albums`, `songs`, `playlists`, `rankings`).
//! - **Synchronous**: every operation runs to completion; a concurrent host
//!   must wrap the whole store in its own mutual exclusion.
//!
//! Entities are never deleted; the catalog lives as long as the process.
//!
//! # Example
//!
//! ```rust
//! use muse_catalog::Catalog;
//!
//! # fn main() -> muse_core::Result<()> {
//! let mut catalog = Catalog::new();
//!
//! catalog.create_user("Alice", "555-0101");
//! catalog.create_album("Debut", "The Band");
//! catalog.create_song("Opening Theme", "Debut", 200)?;
//! catalog.like_song("555-0101", "Opening Theme")?;
//!
//! assert_eq!(catalog.most_popular_song().as_deref(), Some("Opening Theme"));
//! # Ok(())
//! # }
//! ```

mod catalog;

// Vertical slices
pub mod albums;
pub mod artists;
pub mod playlists;
pub mod rankings;
pub mod songs;
pub mod users;

pub use catalog::Catalog;
