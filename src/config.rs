//! Helper configuration loaded from environment variables.
//!
//! - `ENVIRONMENT`: deployment classification (default: `development`)
//! - `SITE_URL`: site URL inspected by the gate (default: `http://localhost:8080`)
//! - `ROLE_HELPER_ROLES`: comma-separated registered role names
//!   (default: the stock five)
//! - `ROLE_HELPER_DEFAULT_ROLE`: role for newly created users
//!   (default: `subscriber`)

use std::env;

use role_test_helper_core::roles;
use role_test_helper_memory::MemoryHost;

/// Configuration for the CLI's simulated host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    pub environment_type: String,
    pub site_url: String,
    pub roles: Vec<String>,
    pub default_role: String,
}

impl HelperConfig {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        let environment_type =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let site_url =
            env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let role_names = env::var("ROLE_HELPER_ROLES")
            .map(|raw| parse_roles(&raw))
            .ok()
            .filter(|parsed| !parsed.is_empty())
            .unwrap_or_else(roles::default_role_names);
        let default_role = env::var("ROLE_HELPER_DEFAULT_ROLE")
            .unwrap_or_else(|_| roles::DEFAULT_ROLE.to_string());

        Self {
            environment_type,
            site_url,
            roles: role_names,
            default_role,
        }
    }

    /// Build the in-memory host matching this configuration.
    pub fn into_host(self) -> MemoryHost {
        MemoryHost::new(self.environment_type, self.site_url)
            .with_roles(self.roles)
            .with_default_role(self.default_role)
    }
}

fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
