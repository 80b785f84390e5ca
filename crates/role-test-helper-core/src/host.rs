//! Host capability traits.
//!
//! The helper never talks to the host platform directly; everything it needs
//! — environment classification, site URL, role registry, user store,
//! notices — comes through [`Host`]. The stock password check additionally
//! needs [`CredentialStore`].

use std::sync::Arc;

use crate::errors::HostError;
use crate::user::{NewUser, UserRecord};

/// Capabilities the helper requires from the host platform.
pub trait Host {
    /// Deployment classification, e.g. `production`, `staging`,
    /// `development`, `local`, or any custom string.
    fn environment_type(&self) -> String;

    /// The site URL, inspected as a plain string.
    fn site_url(&self) -> String;

    /// Names of all registered roles.
    fn role_names(&self) -> Vec<String>;

    /// Look up a user by exact login match.
    fn find_user_by_login(&self, login: &str) -> Option<UserRecord>;

    /// Create a user record in the host store.
    fn create_user(&self, new_user: NewUser) -> Result<UserRecord, HostError>;

    /// Replace the user's role set with the single given role, both in the
    /// store and on the passed record.
    fn set_user_role(&self, user: &mut UserRecord, role: &str);

    /// Emit an informational, admin-visible notice.
    fn emit_notice(&self, message: &str);
}

/// Credential verification seam for the stock password check.
pub trait CredentialStore {
    /// Whether `password` matches the stored credential for `login`.
    fn verify_credentials(&self, login: &str, password: &str) -> bool;
}

/// Blanket implementation for `&H`, so host handles can be borrowed into
/// gates and handlers without cloning.
impl<H: Host + ?Sized> Host for &H {
    fn environment_type(&self) -> String {
        (**self).environment_type()
    }

    fn site_url(&self) -> String {
        (**self).site_url()
    }

    fn role_names(&self) -> Vec<String> {
        (**self).role_names()
    }

    fn find_user_by_login(&self, login: &str) -> Option<UserRecord> {
        (**self).find_user_by_login(login)
    }

    fn create_user(&self, new_user: NewUser) -> Result<UserRecord, HostError> {
        (**self).create_user(new_user)
    }

    fn set_user_role(&self, user: &mut UserRecord, role: &str) {
        (**self).set_user_role(user, role)
    }

    fn emit_notice(&self, message: &str) {
        (**self).emit_notice(message)
    }
}

/// Blanket implementation for `Arc<H>`, so one host handle can be shared
/// between the gate, the stock check, and the interceptor.
impl<H: Host + ?Sized> Host for Arc<H> {
    fn environment_type(&self) -> String {
        (**self).environment_type()
    }

    fn site_url(&self) -> String {
        (**self).site_url()
    }

    fn role_names(&self) -> Vec<String> {
        (**self).role_names()
    }

    fn find_user_by_login(&self, login: &str) -> Option<UserRecord> {
        (**self).find_user_by_login(login)
    }

    fn create_user(&self, new_user: NewUser) -> Result<UserRecord, HostError> {
        (**self).create_user(new_user)
    }

    fn set_user_role(&self, user: &mut UserRecord, role: &str) {
        (**self).set_user_role(user, role)
    }

    fn emit_notice(&self, message: &str) {
        (**self).emit_notice(message)
    }
}

/// Blanket implementation for `Box<H>`.
impl<H: Host + ?Sized> Host for Box<H> {
    fn environment_type(&self) -> String {
        (**self).environment_type()
    }

    fn site_url(&self) -> String {
        (**self).site_url()
    }

    fn role_names(&self) -> Vec<String> {
        (**self).role_names()
    }

    fn find_user_by_login(&self, login: &str) -> Option<UserRecord> {
        (**self).find_user_by_login(login)
    }

    fn create_user(&self, new_user: NewUser) -> Result<UserRecord, HostError> {
        (**self).create_user(new_user)
    }

    fn set_user_role(&self, user: &mut UserRecord, role: &str) {
        (**self).set_user_role(user, role)
    }

    fn emit_notice(&self, message: &str) {
        (**self).emit_notice(message)
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn verify_credentials(&self, login: &str, password: &str) -> bool {
        (**self).verify_credentials(login, password)
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for Arc<S> {
    fn verify_credentials(&self, login: &str, password: &str) -> bool {
        (**self).verify_credentials(login, password)
    }
}
