//! Form payloads for the router's `goform` endpoints.
//!
//! Each POST body is a `Serialize` struct handed to
//! `RequestBuilder::form`, with field names renamed to exactly what the
//! backend expects. Struct field order is the order the fields appear in
//! the encoded body.

use std::net::Ipv4Addr;

use serde::Serialize;

use super::paths;

/// Credentials posted to the login form.
#[derive(Debug, Serialize)]
pub struct LoginForm<'a> {
    #[serde(rename = "loginUsername")]
    pub username: &'a str,
    #[serde(rename = "loginPassword")]
    pub password: &'a str,
}

impl<'a> LoginForm<'a> {
    /// Login payload for the fixed administrator account.
    pub fn admin(password: &'a str) -> Self {
        Self {
            username: paths::ADMIN_USERNAME,
            password,
        }
    }
}

/// Global port-forwarding switch states, spelled the way the backend's
/// form spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForwardingState {
    Enabled,
    Disabled,
}

impl From<bool> for ForwardingState {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Body for the port-forwarding toggle endpoint.
#[derive(Debug, Serialize)]
pub struct ForwardingToggleForm<'a> {
    pub forwarding: ForwardingState,
    pub csrf_token: &'a str,
}

/// Fixed-shape body for the add-forward endpoint: TCP+UDP, identical
/// start and end port, free-text service name under the `other`
/// classification.
#[derive(Debug, Serialize)]
pub struct AddForwardForm<'a> {
    pub storage_row: i32,
    pub csrf_token: &'a str,
    pub common_services: &'a str,
    pub other_service: &'a str,
    pub service_type: &'a str,
    pub server_ip_address_4: String,
    pub start_port: u16,
    pub end_port: u16,
}

impl<'a> AddForwardForm<'a> {
    /// Rule exposing `port` on `local_address`, labeled `service_name`.
    pub fn tcp_udp(
        service_name: &'a str,
        local_address: Ipv4Addr,
        port: u16,
        csrf_token: &'a str,
    ) -> Self {
        Self {
            storage_row: paths::STORAGE_ROW_NEW,
            csrf_token,
            common_services: paths::COMMON_SERVICES_OTHER,
            other_service: service_name,
            service_type: paths::SERVICE_TYPE_TCP_UDP,
            server_ip_address_4: local_address.to_string(),
            start_port: port,
            end_port: port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarding_state_spelling() {
        assert_eq!(ForwardingState::from(true), ForwardingState::Enabled);
        assert_eq!(ForwardingState::from(false), ForwardingState::Disabled);
    }

    #[test]
    fn login_form_uses_admin_account() {
        let form = LoginForm::admin("secret");
        assert_eq!(form.username, "admin");
        assert_eq!(form.password, "secret");
    }

    #[test]
    fn add_forward_mirrors_port_and_formats_address() {
        let form = AddForwardForm::tcp_udp("web", Ipv4Addr::new(192, 168, 1, 10), 8080, "tok");
        assert_eq!(form.storage_row, -1);
        assert_eq!(form.common_services, "other");
        assert_eq!(form.other_service, "web");
        assert_eq!(form.service_type, "tcp_udp");
        assert_eq!(form.server_ip_address_4, "192.168.1.10");
        assert_eq!(form.start_port, 8080);
        assert_eq!(form.end_port, 8080);
    }
}
