/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact key; unique in practice, not enforced
    pub mobile: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mobile: mobile.into(),
            created_at: Utc::now(),
        }
    }
}
