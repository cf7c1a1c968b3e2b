//! Reservant client core
//!
//! Client-side session, permission, and date handling for the Reservant
//! reservation system, plus a typed wrapper over its REST API. Token claims
//! are decoded without signature verification, purely to decide what a UI
//! should render; the backend stays the authority on every request.

pub mod api;
pub mod claims;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod validation;

// Re-export for convenience
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use permissions::Permissions;
pub use roles::RoleSet;
pub use session::{SessionManager, SessionState};
