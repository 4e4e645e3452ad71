//! Album types

use super::ArtistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album, always attached to exactly one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist_id: ArtistId,
    pub created_at: DateTime<Utc>,
}

impl Album {
    /// Create a new album under `artist_id`
    pub fn new(id: AlbumId, title: impl Into<String>, artist_id: ArtistId) -> Self {
        Self {
            id,
            title: title.into(),
            artist_id,
            created_at: Utc::now(),
        }
    }
}
