//! User management queries

use crate::Catalog;
use muse_core::{error::Result, types::*, MuseError};
use tracing::debug;

/// Create a user; always succeeds and appends to the catalog
pub fn create(catalog: &mut Catalog, name: &str, mobile: &str) -> User {
    let id = catalog.next_user_id();
    let user = User::new(id, name, mobile);
    catalog.users.push(user.clone());
    debug!(user_id = id, name, "Created user");
    user
}

/// Get all users in creation order
pub fn get_all(catalog: &Catalog) -> &[User] {
    &catalog.users
}

/// Find a user by contact key (first match)
pub fn find_by_mobile<'a>(catalog: &'a Catalog, mobile: &str) -> Option<&'a User> {
    catalog.users.iter().find(|user| user.mobile == mobile)
}

// Helper functions

/// Resolve a contact key to a user id, failing with `NotFound`
pub(crate) fn require_by_mobile(catalog: &Catalog, mobile: &str) -> Result<UserId> {
    find_by_mobile(catalog, mobile)
        .map(|user| user.id)
        .ok_or_else(|| MuseError::not_found("User", mobile))
}
