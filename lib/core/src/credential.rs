//! Credentials for the hosted remote services.
//!
//! Both remote engines authenticate with HTTP basic auth, so a single
//! username/password pair covers them. Credentials arrive from process
//! configuration and are never logged.

use serde::{Deserialize, Serialize};

/// Basic-auth credentials for one hosted service.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceCredentials {
    /// Username issued by the service.
    pub username: String,
    /// Password issued by the service.
    pub password: String,
}

impl ServiceCredentials {
    /// Creates credentials from a username/password pair.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Manual Debug keeps the password out of log output.
impl std::fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
