/// Playlist domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PlaylistId = i64;

/// Playlist
///
/// Song membership and listener sets are relationship state owned by the
/// catalog store, not by this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(id: PlaylistId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}
