/// Song domain type
use super::AlbumId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type SongId = i64;

/// A song, always attached to exactly one album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Owning album
    pub album_id: AlbumId,

    /// Song length in seconds
    pub duration_secs: u32,

    /// When the song entered the catalog
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song
    pub fn new(
        id: SongId,
        title: impl Into<String>,
        album_id: AlbumId,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            album_id,
            duration_secs,
            created_at: Utc::now(),
        }
    }

    /// Get the song length as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_creation() {
        let song = Song::new(7, "Opening Theme", 3, 200);
        assert_eq!(song.title, "Opening Theme");
        assert_eq!(song.album_id, 3);
        assert_eq!(song.duration_secs, 200);
    }

    #[test]
    fn song_duration_conversion() {
        let song = Song::new(1, "Song", 1, 180);
        assert_eq!(song.duration(), Duration::from_secs(180));
    }
}
