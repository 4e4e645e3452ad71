//! Aggregate popularity rankings
//!
//! Both rankings are deterministic: entities are scanned in creation order
//! and only a strictly higher score displaces the current leader, so ties
//! go to the first-created entity.

use crate::Catalog;
use muse_core::types::*;

/// Artist whose albums' songs collected the most likes in total
///
/// Only artists with at least one album participate; returns `None` when no
/// albums exist.
pub fn most_popular_artist(catalog: &Catalog) -> Option<String> {
    let mut best: Option<(&Artist, usize)> = None;

    for artist in &catalog.artists {
        let Some(album_ids) = catalog.artist_albums.get(&artist.id) else {
            continue;
        };

        let total: usize = album_ids
            .iter()
            .flat_map(|album_id| catalog.album_songs.get(album_id))
            .flatten()
            .map(|song_id| catalog.song_likes.get(song_id).map_or(0, Vec::len))
            .sum();

        match best {
            Some((_, leader)) if total <= leader => {}
            _ => best = Some((artist, total)),
        }
    }

    best.map(|(artist, _)| artist.name.clone())
}

/// Song with the most recorded likes
///
/// Only songs with at least one like entry participate; returns `None` when
/// no likes exist anywhere.
pub fn most_popular_song(catalog: &Catalog) -> Option<String> {
    let mut best: Option<(&Song, usize)> = None;

    for song in &catalog.songs {
        let Some(likers) = catalog.song_likes.get(&song.id) else {
            continue;
        };

        match best {
            Some((_, leader)) if likers.len() <= leader => {}
            _ => best = Some((song, likers.len())),
        }
    }

    best.map(|(song, _)| song.title.clone())
}
