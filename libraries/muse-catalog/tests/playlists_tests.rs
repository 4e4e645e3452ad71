//! Integration tests for the playlists vertical slice
//!
//! Tests name-based playlist creation (membership, listener registration,
//! most-recent-created tracking), the inert length-based constructor, and
//! the documented listener-reset behavior of `find`.


use muse_catalog::Catalog;
use muse_core::MuseError;
use test_helpers::*;

#[test]
fn test_create_by_names_registers_everything() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200), ("S2", 180)]);
    let user = seed_user(&mut catalog, "Alice", "111");

    let playlist = catalog
        .create_playlist_by_names("111", "Mix", &["S1".into(), "S2".into()])
        .expect("user and songs exist");

    assert_eq!(playlist.title, "Mix");
    assert_eq!(titles(&catalog.playlist_songs(playlist.id)), ["S1", "S2"]);

    // Creator is the sole listener, registered exactly once.
    assert_eq!(mobiles(&catalog.playlist_listeners(playlist.id)), ["111"]);

    // Registered under the user's playlists and as their latest creation.
    let owned = catalog.playlists_of_user(user.id);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, playlist.id);
    assert_eq!(catalog.last_created_playlist(user.id).unwrap().id, playlist.id);
}

#[test]
fn test_create_by_names_includes_only_matching_songs() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(
        &mut catalog,
        "Al1",
        "A",
        &[("S1", 200), ("S2", 180), ("S3", 240)],
    );
    seed_user(&mut catalog, "Alice", "111");

    let playlist = catalog
        .create_playlist_by_names("111", "Mix", &["S1".into(), "S3".into(), "Ghost".into()])
        .unwrap();

    assert_eq!(titles(&catalog.playlist_songs(playlist.id)), ["S1", "S3"]);
}

#[test]
fn test_create_by_names_uses_catalog_order_not_request_order() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200), ("S2", 180)]);
    seed_user(&mut catalog, "Alice", "111");

    let playlist = catalog
        .create_playlist_by_names("111", "Mix", &["S2".into(), "S1".into()])
        .unwrap();

    assert_eq!(titles(&catalog.playlist_songs(playlist.id)), ["S1", "S2"]);
}

#[test]
fn test_create_by_names_missing_user_fails() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);

    let err = catalog
        .create_playlist_by_names("999", "Mix", &["S1".into()])
        .unwrap_err();

    assert!(matches!(err, MuseError::NotFound { .. }));
    assert!(catalog.playlists().is_empty());
}

#[test]
fn test_create_by_names_no_matching_songs_fails() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    seed_user(&mut catalog, "Alice", "111");

    let err = catalog
        .create_playlist_by_names("111", "Mix", &["Ghost".into(), "Phantom".into()])
        .unwrap_err();

    assert!(matches!(err, MuseError::NotFound { .. }));
    assert!(catalog.playlists().is_empty());
}

#[test]
fn test_create_by_names_duplicate_titles_include_every_match() {
    // Two songs sharing a title both belong to a playlist requesting it.
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    seed_album_with_songs(&mut catalog, "Al2", "B", &[("S1", 180)]);
    seed_user(&mut catalog, "Alice", "111");

    let playlist = catalog
        .create_playlist_by_names("111", "Mix", &["S1".into()])
        .unwrap();

    assert_eq!(catalog.playlist_songs(playlist.id).len(), 2);
}

#[test]
fn test_latest_created_playlist_is_overwritten() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    let user = seed_user(&mut catalog, "Alice", "111");

    catalog
        .create_playlist_by_names("111", "First", &["S1".into()])
        .unwrap();
    let second = catalog
        .create_playlist_by_names("111", "Second", &["S1".into()])
        .unwrap();

    assert_eq!(catalog.last_created_playlist(user.id).unwrap().id, second.id);
    // Both playlists stay in the user's list.
    assert_eq!(catalog.playlists_of_user(user.id).len(), 2);
}

#[test]
fn test_find_playlist_returns_match() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    seed_user(&mut catalog, "Alice", "111");

    let created = catalog
        .create_playlist_by_names("111", "Mix", &["S1".into()])
        .unwrap();
    let found = catalog.find_playlist("111", "Mix").unwrap();

    assert_eq!(found.id, created.id);
}

#[test]
fn test_find_playlist_missing_user_or_playlist_fails() {
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    seed_user(&mut catalog, "Alice", "111");
    catalog
        .create_playlist_by_names("111", "Mix", &["S1".into()])
        .unwrap();

    assert!(matches!(
        catalog.find_playlist("999", "Mix").unwrap_err(),
        MuseError::NotFound { .. }
    ));
    assert!(matches!(
        catalog.find_playlist("111", "Ghost").unwrap_err(),
        MuseError::NotFound { .. }
    ));
}

#[test]
fn test_find_resets_listener_list() {
    // Documented quirk: every find replaces the listener list with the
    // requesting user alone, dropping prior listeners.
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    seed_user(&mut catalog, "Alice", "111");
    seed_user(&mut catalog, "Bob", "222");

    let playlist = catalog
        .create_playlist_by_names("111", "Mix", &["S1".into()])
        .unwrap();
    assert_eq!(mobiles(&catalog.playlist_listeners(playlist.id)), ["111"]);

    catalog.find_playlist("222", "Mix").unwrap();
    assert_eq!(mobiles(&catalog.playlist_listeners(playlist.id)), ["222"]);

    catalog.find_playlist("111", "Mix").unwrap();
    assert_eq!(mobiles(&catalog.playlist_listeners(playlist.id)), ["111"]);
}

#[test]
fn test_create_by_length_is_inert() {
    // The length-based constructor builds and returns a playlist without
    // registering it anywhere.
    let mut catalog = Catalog::new();
    seed_album_with_songs(&mut catalog, "Al1", "A", &[("S1", 200)]);
    let user = seed_user(&mut catalog, "Alice", "111");

    let playlist = catalog.create_playlist_by_length("111", "ByLength", 600);

    assert_eq!(playlist.title, "ByLength");
    assert!(catalog.playlists().is_empty());
    assert!(catalog.playlist_songs(playlist.id).is_empty());
    assert!(catalog.playlist_listeners(playlist.id).is_empty());
    assert!(catalog.playlists_of_user(user.id).is_empty());
    assert!(catalog.last_created_playlist(user.id).is_none());
}
