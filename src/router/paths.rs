//! Router URL paths and fixed form values.
//!
//! Everything the request-building code would otherwise carry as scattered
//! string literals: the admin interface's paths, plus the constant field
//! values its forms expect.

/// Root page; fetched once before login to pick up session cookies.
pub const ROOT_PAGE: &str = "/";

/// Login form endpoint (POST).
pub const LOGIN_FORM: &str = "/goform/home_loggedout";

/// Page the backend redirects to after a successful login.
pub const AT_A_GLANCE_PAGE: &str = "/at_a_glance.asp";

/// Connected-devices listing page.
pub const CONNECTED_DEVICES_PAGE: &str = "/connected_devices_computers.asp";

/// Port-forwarding status page; serves the toggle form's CSRF token.
pub const PORT_FORWARDING_PAGE: &str = "/port_forwarding.asp";

/// Port-forwarding toggle endpoint (POST).
pub const PORT_FORWARDING_FORM: &str = "/goform/port_forwarding";

/// Add-forward page; serves the add form's CSRF token.
pub const ADD_FORWARD_PAGE: &str = "/port_forwarding_add.asp";

/// Add-forward endpoint (POST).
pub const ADD_FORWARD_FORM: &str = "/goform/port_forwarding_add";

/// Fixed administrator account name on the login form.
pub const ADMIN_USERNAME: &str = "admin";

/// Name of the hidden input carrying the anti-forgery token on mutating
/// forms.
pub const CSRF_TOKEN_FIELD: &str = "csrf_token";

/// `service_type` value selecting both TCP and UDP.
pub const SERVICE_TYPE_TCP_UDP: &str = "tcp_udp";

/// `common_services` value selecting a free-text service name.
pub const COMMON_SERVICES_OTHER: &str = "other";

/// `storage_row` sentinel for a rule that has no stored row yet.
pub const STORAGE_ROW_NEW: i32 = -1;
