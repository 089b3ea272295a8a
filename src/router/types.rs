//! Device records observed on the router's LAN.

use serde::Serialize;

/// A single client machine reported by the connected-devices page.
///
/// A fresh snapshot is produced per query; any history keeping is the
/// caller's business. Each field is independently absent when the
/// backend's row text lacks the corresponding segment (see
/// [`extract`](super::extract)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub name: Option<String>,
    pub ipv4: Option<String>,
    pub mac: Option<String>,
}
