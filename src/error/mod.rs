//! Error handling module

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the router client.
///
/// The client performs no local recovery and never retries; every failure
/// is reported to the caller as one of these variants.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Endpoint configuration was rejected before any I/O.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The login POST did not resolve to the landing page, regardless of
    /// status code.
    #[error("Login rejected: landed on {landed} (status {status})")]
    LoginRejected { landed: String, status: StatusCode },

    /// A fetched page lacked the expected hidden token input. The
    /// mutating request is never sent without a token.
    #[error("Hidden input '{field}' not found on {page}")]
    TokenNotFound { field: String, page: String },

    /// A page fetch or form post came back with a non-200 status.
    #[error("{page} returned status {status}")]
    UnexpectedStatus { page: String, status: StatusCode },

    /// The connected-devices page loaded without its data table. Distinct
    /// from a table with zero device rows.
    #[error("Device table missing from {page}")]
    DeviceTableMissing { page: String },

    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Convenient alias for Result with the router error.
pub type Result<T> = std::result::Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = RouterError::Config("empty host".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty host");
    }

    #[test]
    fn login_rejected_display_names_landing_url() {
        let err = RouterError::LoginRejected {
            landed: "http://10.0.0.1/goform/home_loggedout".to_string(),
            status: StatusCode::OK,
        };
        assert!(err.to_string().contains("/goform/home_loggedout"));
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn token_not_found_display_names_field_and_page() {
        let err = RouterError::TokenNotFound {
            field: "csrf_token".to_string(),
            page: "/port_forwarding.asp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Hidden input 'csrf_token' not found on /port_forwarding.asp"
        );
    }

    #[test]
    fn unexpected_status_display() {
        let err = RouterError::UnexpectedStatus {
            page: "/connected_devices_computers.asp".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.to_string().contains("500"));
    }
}
