//! Session client for the router's admin interface.

use std::net::Ipv4Addr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::config::RouterEndpoint;
use crate::error::{Result, RouterError};

use super::extract;
use super::forms::{AddForwardForm, ForwardingState, ForwardingToggleForm, LoginForm};
use super::paths;
use super::types::DeviceRecord;

/// HTTP client for one router's admin interface.
///
/// Owns the cookie-bearing session for the whole conversation: construct,
/// [`login`](Self::login), then call the administrative operations. Every
/// mutating operation fetches a fresh CSRF token from its own page
/// immediately before posting; the backend ties tokens to forms, so a
/// token is never cached or reused across operations.
///
/// Calls are synchronous and block until the underlying round trips
/// complete; consecutive calls assume the cookie state is not being
/// mutated from another thread.
pub struct RouterClient {
    endpoint: RouterEndpoint,
    http: Client,
}

impl RouterClient {
    /// Builds a client around `endpoint` with an empty session. Performs
    /// no network I/O.
    pub fn new(endpoint: RouterEndpoint) -> Result<Self> {
        endpoint.validate().map_err(RouterError::Config)?;
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .build()?;
        Ok(Self { endpoint, http })
    }

    /// The endpoint this client was constructed with.
    pub fn endpoint(&self) -> &RouterEndpoint {
        &self.endpoint
    }

    fn url_for(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.endpoint.host, self.endpoint.port, path)
    }

    /// Logs in as the fixed administrator account.
    ///
    /// The initial GET of `/` exists only to pick up whatever cookies the
    /// backend sets. Success is judged by the final resolved URL of the
    /// login POST: the backend redirects to the at-a-glance page, and any
    /// other terminal URL is a rejection regardless of status code.
    pub fn login(&self) -> Result<()> {
        self.http.get(self.url_for(paths::ROOT_PAGE)).send()?;

        let response = self
            .http
            .post(self.url_for(paths::LOGIN_FORM))
            .form(&LoginForm::admin(&self.endpoint.password))
            .send()?;

        let landing = Url::parse(&self.url_for(paths::AT_A_GLANCE_PAGE))
            .map_err(|e| RouterError::Config(format!("invalid endpoint URL: {e}")))?;
        if response.url() == &landing {
            tracing::info!("[Router] Logged in to {}", self.endpoint.host);
            Ok(())
        } else {
            tracing::warn!(
                "[Router] Login rejected: landed on {} (status {})",
                response.url(),
                response.status()
            );
            Err(RouterError::LoginRejected {
                landed: response.url().to_string(),
                status: response.status(),
            })
        }
    }

    /// Snapshot of the clients currently connected to the router.
    ///
    /// An empty vector means the router reported zero devices. A non-200
    /// page or a page without the data table is an error, never an empty
    /// result.
    pub fn connected_devices(&self) -> Result<Vec<DeviceRecord>> {
        let page = paths::CONNECTED_DEVICES_PAGE;
        let html = self.fetch_page(page)?;
        let devices = extract::device_table(&html, page)?;
        tracing::debug!("[Router] {} connected devices reported", devices.len());
        Ok(devices)
    }

    /// Flips the global port-forwarding switch.
    pub fn set_port_forwarding(&self, enabled: bool) -> Result<()> {
        let token = self.fresh_token(paths::PORT_FORWARDING_PAGE)?;
        let form = ForwardingToggleForm {
            forwarding: ForwardingState::from(enabled),
            csrf_token: &token,
        };
        self.post_form(paths::PORT_FORWARDING_FORM, &form)
    }

    /// Adds a TCP+UDP forwarding rule exposing `port` on `local_address`.
    pub fn add_port_forward(
        &self,
        service_name: &str,
        local_address: Ipv4Addr,
        port: u16,
    ) -> Result<()> {
        let token = self.fresh_token(paths::ADD_FORWARD_PAGE)?;
        let form = AddForwardForm::tcp_udp(service_name, local_address, port, &token);
        self.post_form(paths::ADD_FORWARD_FORM, &form)
    }

    /// GETs `page` and returns its body; any non-200 status is an error.
    fn fetch_page(&self, page: &str) -> Result<String> {
        let response = self.http.get(self.url_for(page)).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(RouterError::UnexpectedStatus {
                page: page.to_string(),
                status,
            });
        }
        Ok(response.text()?)
    }

    /// Fetches the CSRF token the form served on `page` expects. Tokens
    /// are scoped to one form submission and must be re-fetched from the
    /// page that carries the form about to be posted.
    fn fresh_token(&self, page: &str) -> Result<String> {
        let html = self.fetch_page(page)?;
        let token = extract::hidden_input_value(&html, paths::CSRF_TOKEN_FIELD, page)?;
        tracing::debug!("[Router] Fresh CSRF token from {}", page);
        Ok(token)
    }

    /// Posts `form` to `path`; the backend signals success with 200.
    fn post_form<T: serde::Serialize>(&self, path: &str, form: &T) -> Result<()> {
        let response = self.http.post(self.url_for(path)).form(form).send()?;
        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            tracing::warn!("[Router] {} rejected with status {}", path, status);
            Err(RouterError::UnexpectedStatus {
                page: path.to_string(),
                status,
            })
        }
    }
}
