//! # Role Test Helper Core
//!
//! Core types and capability traits for the role test helper.
//!
//! This crate defines the boundary between the helper logic and the host
//! platform that owns the actual role registry and user store:
//!
//! - [`host`]: the [`Host`] and [`CredentialStore`] capability traits
//! - [`user`]: user records as seen through the host boundary
//! - [`resolution`]: the authentication chain's evolving result value
//! - [`roles`]: stock role-name constants
//! - [`credentials`]: random password and placeholder email generation
//! - [`errors`]: host operation errors
//!
//! # Example
//!
//! ```ignore
//! use role_test_helper_core::{Host, Resolution};
//!
//! fn attempt(host: &impl Host, username: &str) -> Resolution {
//!     match host.find_user_by_login(username) {
//!         Some(user) => Resolution::Authenticated(user),
//!         None => Resolution::Unresolved,
//!     }
//! }
//! ```

pub mod credentials;
pub mod errors;
pub mod host;
pub mod resolution;
pub mod roles;
pub mod user;

// Re-export commonly used types at crate root
pub use errors::{AuthFailure, HostError};
pub use host::{CredentialStore, Host};
pub use resolution::Resolution;
pub use user::{NewUser, UserRecord};
