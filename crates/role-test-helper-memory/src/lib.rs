//! # Role Test Helper Memory Host
//!
//! Complete in-memory [`Host`] implementation, used by the CLI and the test
//! suite. It owns a role registry, a user store with bcrypt-hashed
//! credentials, and a notice log, and lets fixtures flip the environment
//! classification, site URL, and a read-only switch at runtime.
//!
//! # Example
//!
//! ```
//! use role_test_helper_memory::MemoryHost;
//! use role_test_helper_core::Host;
//!
//! let host = MemoryHost::new("development", "http://dev.example.com");
//! assert!(host.role_names().iter().any(|r| r == "editor"));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use role_test_helper_core::errors::HostError;
use role_test_helper_core::host::{CredentialStore, Host};
use role_test_helper_core::roles;
use role_test_helper_core::user::{NewUser, UserRecord};

/// Low bcrypt cost for throwaway test credentials.
const BCRYPT_COST: u32 = 4;

#[derive(Debug, Clone)]
struct StoredUser {
    record: UserRecord,
    password_hash: String,
}

/// In-memory host: role registry, user store, notice log.
///
/// Interior mutability lets a single `Arc<MemoryHost>` handle serve the
/// gate, the handler chain, and test assertions within one logical request.
#[derive(Debug)]
pub struct MemoryHost {
    environment_type: Mutex<String>,
    site_url: Mutex<String>,
    roles: Mutex<Vec<String>>,
    default_role: String,
    users: Mutex<Vec<StoredUser>>,
    notices: Mutex<Vec<String>>,
    read_only: AtomicBool,
}

// Recover the guard even if a panicking test poisoned the lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryHost {
    /// Create a host with the stock role set and default role.
    pub fn new(environment_type: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            environment_type: Mutex::new(environment_type.into()),
            site_url: Mutex::new(site_url.into()),
            roles: Mutex::new(roles::default_role_names()),
            default_role: roles::DEFAULT_ROLE.to_string(),
            users: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
            read_only: AtomicBool::new(false),
        }
    }

    /// Replace the registered role set.
    pub fn with_roles<I, S>(self, role_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *lock(&self.roles) = role_names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the role assigned to newly created users.
    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    /// Register an additional role name.
    pub fn add_role(&self, name: impl Into<String>) {
        lock(&self.roles).push(name.into());
    }

    /// Change the environment classification reported to the gate.
    pub fn set_environment_type(&self, environment_type: impl Into<String>) {
        *lock(&self.environment_type) = environment_type.into();
    }

    /// Change the site URL reported to the gate.
    pub fn set_site_url(&self, site_url: impl Into<String>) {
        *lock(&self.site_url) = site_url.into();
    }

    /// Refuse all user creation while set. Lets tests exercise the
    /// provisioning-failure path.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Insert a user directly, bypassing creation validation.
    pub fn seed_user(&self, login: &str, password: &str, role_names: &[&str]) -> UserRecord {
        let record = UserRecord {
            id: Uuid::new_v4(),
            login: login.to_string(),
            email: format!("{login}@example.com"),
            roles: role_names.iter().map(|r| r.to_string()).collect(),
            created_at: Utc::now(),
        };
        let password_hash = bcrypt::hash(password, BCRYPT_COST).unwrap_or_default();
        lock(&self.users).push(StoredUser {
            record: record.clone(),
            password_hash,
        });
        record
    }

    /// Notices emitted so far, oldest first.
    pub fn notices(&self) -> Vec<String> {
        lock(&self.notices).clone()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        lock(&self.users).len()
    }
}

impl Host for MemoryHost {
    fn environment_type(&self) -> String {
        lock(&self.environment_type).clone()
    }

    fn site_url(&self) -> String {
        lock(&self.site_url).clone()
    }

    fn role_names(&self) -> Vec<String> {
        lock(&self.roles).clone()
    }

    fn find_user_by_login(&self, login: &str) -> Option<UserRecord> {
        lock(&self.users)
            .iter()
            .find(|u| u.record.login == login)
            .map(|u| u.record.clone())
    }

    fn create_user(&self, new_user: NewUser) -> Result<UserRecord, HostError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(HostError::storage("user store is read-only"));
        }
        if new_user.login.is_empty() {
            return Err(HostError::InvalidLogin(new_user.login));
        }

        let mut users = lock(&self.users);
        if users.iter().any(|u| u.record.login == new_user.login) {
            return Err(HostError::DuplicateLogin(new_user.login));
        }
        if users.iter().any(|u| u.record.email == new_user.email) {
            return Err(HostError::DuplicateEmail(new_user.email));
        }

        let password_hash = bcrypt::hash(&new_user.password, BCRYPT_COST)
            .map_err(HostError::storage)?;
        let record = UserRecord {
            id: Uuid::new_v4(),
            login: new_user.login,
            email: new_user.email,
            roles: vec![self.default_role.clone()],
            created_at: Utc::now(),
        };
        users.push(StoredUser {
            record: record.clone(),
            password_hash,
        });
        debug!(login = %record.login, "created user");
        Ok(record)
    }

    fn set_user_role(&self, user: &mut UserRecord, role: &str) {
        let mut users = lock(&self.users);
        if let Some(stored) = users.iter_mut().find(|u| u.record.id == user.id) {
            stored.record.roles = vec![role.to_string()];
        }
        user.roles = vec![role.to_string()];
        debug!(login = %user.login, %role, "assigned role");
    }

    fn emit_notice(&self, message: &str) {
        info!(%message, "admin notice");
        lock(&self.notices).push(message.to_string());
    }
}

impl CredentialStore for MemoryHost {
    fn verify_credentials(&self, login: &str, password: &str) -> bool {
        let users = lock(&self.users);
        let Some(stored) = users.iter().find(|u| u.record.login == login) else {
            return false;
        };
        bcrypt::verify(password, &stored.password_hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> MemoryHost {
        MemoryHost::new("development", "http://dev.example.com")
    }

    #[test]
    fn test_create_and_find_user() {
        let host = host();
        let created = host
            .create_user(NewUser::new("alice", "secret", "alice@example.com"))
            .unwrap();
        assert_eq!(created.roles, vec!["subscriber".to_string()]);

        let found = host.find_user_by_login("alice").unwrap();
        assert_eq!(found, created);
        assert!(host.find_user_by_login("bob").is_none());
    }

    #[test]
    fn test_duplicate_login_rejected() {
        let host = host();
        host.create_user(NewUser::new("alice", "secret", "alice@example.com"))
            .unwrap();
        let err = host
            .create_user(NewUser::new("alice", "other", "alice2@example.com"))
            .unwrap_err();
        assert!(matches!(err, HostError::DuplicateLogin(_)));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let host = host();
        host.create_user(NewUser::new("alice", "secret", "alice@example.com"))
            .unwrap();
        let err = host
            .create_user(NewUser::new("bob", "other", "alice@example.com"))
            .unwrap_err();
        assert!(matches!(err, HostError::DuplicateEmail(_)));
    }

    #[test]
    fn test_empty_login_rejected() {
        let host = host();
        let err = host
            .create_user(NewUser::new("", "secret", "x@example.com"))
            .unwrap_err();
        assert!(matches!(err, HostError::InvalidLogin(_)));
    }

    #[test]
    fn test_read_only_rejects_creation() {
        let host = host();
        host.set_read_only(true);
        let err = host
            .create_user(NewUser::new("alice", "secret", "alice@example.com"))
            .unwrap_err();
        assert!(matches!(err, HostError::Storage(_)));
        assert_eq!(host.user_count(), 0);
    }

    #[test]
    fn test_set_user_role_replaces_roles() {
        let host = host();
        let mut user = host
            .create_user(NewUser::new("alice", "secret", "alice@example.com"))
            .unwrap();
        host.set_user_role(&mut user, "editor");

        assert_eq!(user.roles, vec!["editor".to_string()]);
        let stored = host.find_user_by_login("alice").unwrap();
        assert_eq!(stored.roles, vec!["editor".to_string()]);
    }

    #[test]
    fn test_verify_credentials() {
        let host = host();
        host.seed_user("alice", "secret", &["editor"]);

        assert!(host.verify_credentials("alice", "secret"));
        assert!(!host.verify_credentials("alice", "wrong"));
        assert!(!host.verify_credentials("nobody", "secret"));
    }

    #[test]
    fn test_notices_are_recorded_in_order() {
        let host = host();
        host.emit_notice("first");
        host.emit_notice("second");
        assert_eq!(host.notices(), vec!["first", "second"]);
    }

    #[test]
    fn test_mutable_environment_and_site_url() {
        let host = host();
        host.set_environment_type("production");
        host.set_site_url("https://example.com");
        assert_eq!(host.environment_type(), "production");
        assert_eq!(host.site_url(), "https://example.com");
    }
}
