//! Configuration module

use serde::Deserialize;

/// Connection settings for one router's admin interface.
///
/// Supplied once at client construction and never mutated. The defaults
/// match a stock Xfinity router: gateway at `10.0.0.1`, port 80, admin
/// password `password`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterEndpoint {
    /// Router IP address or hostname.
    #[serde(default = "default_host")]
    pub host: String,
    /// Password for the fixed `admin` account on the login form.
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout applied to every HTTP round trip.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RouterEndpoint {
    fn default() -> Self {
        Self {
            host: default_host(),
            password: default_password(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RouterEndpoint {
    /// Endpoint for a router at `host`, keeping the stock port and timeout.
    pub fn new(host: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Validates the endpoint before any I/O is attempted.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Router host cannot be empty".to_string());
        }
        if self.host.contains(['/', ':', '@']) {
            return Err(format!(
                "Invalid router host '{}': expected a bare IP address or hostname",
                self.host
            ));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "10.0.0.1".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_timeout_secs() -> u64 {
    10
}
