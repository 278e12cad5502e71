//! Credential store and cookie-based session handling

pub mod models;
pub mod session;
pub mod store;

pub use models::{Credential, LoginRequest, LoginResponse, Session, UserRole};
pub use session::{clear_session_cookie, session_cookie, session_from_jar};
pub use store::CredentialStore;
