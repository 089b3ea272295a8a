//! # xfinity-router
//!
//! Blocking HTTP automation client for the admin interface of an Xfinity
//! consumer router. It does what a human with a browser would do: log in
//! through the session-based login form, pick up the anti-forgery token a
//! form requires, and submit the form. Three administrative operations are
//! exposed:
//!
//! - enumerate the clients currently connected to the network
//! - toggle the global port-forwarding switch
//! - add a port-forwarding rule
//!
//! ```no_run
//! use xfinity_router::{Result, RouterClient, RouterEndpoint};
//!
//! fn main() -> Result<()> {
//!     let router = RouterClient::new(RouterEndpoint::default())?;
//!     router.login()?;
//!     for device in router.connected_devices()? {
//!         println!("{device:?}");
//!     }
//!     router.set_port_forwarding(false)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod router;

pub use config::RouterEndpoint;
pub use error::{Result, RouterError};
pub use router::{DeviceRecord, RouterClient};
