//! Helper status report, the CLI counterpart of the plugin's admin page and
//! inactive notice.

use std::fmt;

use serde::Serialize;

use crate::gate::ActivationGate;
use role_test_helper_core::Host;

/// Snapshot of the helper's state for the current deployment.
#[derive(Debug, Clone, Serialize)]
pub struct HelperStatus {
    pub active: bool,
    pub environment_type: String,
    pub site_url: String,
    pub roles: Vec<String>,
}

impl HelperStatus {
    /// Collect the status through a gate (and its host handle).
    pub fn collect<H: Host>(gate: &ActivationGate<H>) -> Self {
        Self {
            active: gate.is_active(),
            environment_type: gate.environment_type(),
            site_url: gate.host().site_url(),
            roles: gate.host().role_names(),
        }
    }
}

impl fmt::Display for HelperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Role Test Helper")?;
        writeln!(f, "Environment: {}", self.environment_type)?;
        writeln!(f, "Site URL:    {}", self.site_url)?;

        if self.active {
            writeln!(
                f,
                "Active: you can log in using any registered role name as the username and any password."
            )?;
            write!(f, "Available roles: {}", self.roles.join(", "))
        } else {
            write!(
                f,
                "Inactive: this appears to be a production environment. The helper only works in \
                 non-production environments or when the site URL contains .local or localhost."
            )
        }
    }
}
