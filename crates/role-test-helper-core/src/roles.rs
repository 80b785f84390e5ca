//! Stock role-name constants.
//!
//! Hosts define their own role registry; these are the names a stock
//! installation ships with, used as defaults by the in-memory host and the
//! CLI. Using the constants instead of string literals keeps fixtures and
//! tests consistent.

/// Full administrative access.
pub const ADMINISTRATOR: &str = "administrator";
/// Can publish and manage posts of all users.
pub const EDITOR: &str = "editor";
/// Can publish and manage their own posts.
pub const AUTHOR: &str = "author";
/// Can write but not publish.
pub const CONTRIBUTOR: &str = "contributor";
/// Can only manage their own profile.
pub const SUBSCRIBER: &str = "subscriber";

/// The stock role set, in privilege order.
pub fn default_role_names() -> Vec<String> {
    [ADMINISTRATOR, EDITOR, AUTHOR, CONTRIBUTOR, SUBSCRIBER]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The role assigned to newly created users when no other role is set.
pub const DEFAULT_ROLE: &str = SUBSCRIBER;
