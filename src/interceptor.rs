//! Role-login interceptor: logs in (or provisions) a user whose username
//! equals a registered role name, bypassing the password check.
//!
//! Hooked into the authentication chain after the stock credential check, so
//! a failed password result for a role-named login is overridden. An input
//! that already carries an authenticated user is never touched.

use tracing::{info, warn};

use crate::chain::AuthHandler;
use crate::gate::ActivationGate;
use role_test_helper_core::credentials;
use role_test_helper_core::host::Host;
use role_test_helper_core::resolution::Resolution;
use role_test_helper_core::user::NewUser;

/// Handler implementing the role-named-login bypass/provisioning workflow.
pub struct RoleLoginInterceptor<H> {
    host: H,
    gate: ActivationGate<H>,
}

impl<H: Host + Clone> RoleLoginInterceptor<H> {
    /// Build an interceptor with a plain gate over the same host.
    pub fn new(host: H) -> Self {
        let gate = ActivationGate::new(host.clone());
        Self { host, gate }
    }
}

impl<H: Host> RoleLoginInterceptor<H> {
    /// Build an interceptor around a pre-configured gate (filters installed,
    /// possibly already evaluated).
    pub fn with_gate(host: H, gate: ActivationGate<H>) -> Self {
        Self { host, gate }
    }

    /// The matched role name, when the username exactly equals one of the
    /// host's registered roles. No trimming, case-sensitive.
    fn role_from_username(&self, username: &str) -> Option<String> {
        if username.is_empty() {
            return None;
        }
        self.host.role_names().into_iter().find(|r| r == username)
    }

    fn provision(&self, current: Resolution, username: &str, role: &str) -> Resolution {
        let new_user = NewUser::new(
            username,
            credentials::generate_password(credentials::PASSWORD_LENGTH),
            credentials::placeholder_email(username),
        );

        let mut user = match self.host.create_user(new_user) {
            Ok(user) => user,
            Err(err) => {
                // Could not help; defer to whatever the chain decided so far.
                warn!(login = %username, error = %err, "role user provisioning failed");
                return current;
            }
        };

        self.host.set_user_role(&mut user, role);
        self.host
            .emit_notice(&format!("Created user '{username}' with role '{role}'."));
        info!(login = %username, %role, "provisioned role user");

        Resolution::Authenticated(user)
    }
}

impl<H: Host> AuthHandler for RoleLoginInterceptor<H> {
    fn attempt(&self, current: Resolution, username: &str, _password: &str) -> Resolution {
        if !self.gate.is_active() {
            return current;
        }
        if current.is_authenticated() {
            return current;
        }

        let Some(role) = self.role_from_username(username) else {
            return current;
        };

        if let Some(existing) = self.host.find_user_by_login(username) {
            // Full password bypass for local testing convenience.
            info!(login = %username, "role login bypass for existing user");
            return Resolution::Authenticated(existing);
        }

        self.provision(current, username, &role)
    }
}
