//! Xfinity admin-interface automation module
//!
//! - `client`: cookie-session HTTP client (login, device list, forwarding)
//! - `extract`: CSRF-token and device-table HTML extraction
//! - `forms`: typed form payloads for the `goform` endpoints
//! - `paths`: URL paths and fixed form values
//! - `types`: device records

pub mod client;
pub mod extract;
pub mod forms;
pub mod paths;
pub mod types;

pub use client::RouterClient;
pub use types::DeviceRecord;
