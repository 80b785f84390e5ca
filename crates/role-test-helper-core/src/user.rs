//! User records as seen through the host boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user record owned by the host's user store.
///
/// The stored credential stays inside the host store; this type only carries
/// the fields the helper reads or mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Host-assigned identifier.
    pub id: Uuid,

    /// Login name, unique within the store.
    pub login: String,

    /// Email address, unique within the store.
    pub email: String,

    /// Assigned role names.
    pub roles: Vec<String>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Check whether exactly one role is assigned and it matches `role`.
    pub fn has_only_role(&self, role: &str) -> bool {
        self.roles.len() == 1 && self.roles[0] == role
    }
}

/// Request to create a user in the host store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    pub email: String,
}

impl NewUser {
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}
