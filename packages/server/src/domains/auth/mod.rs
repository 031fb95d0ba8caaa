//! Auth domain - coordinator registration, login, and member delegation
//!
//! Two-tier trust chain keyed by phone number:
//! - the server secret authorizes coordinator registration and login;
//! - a logged-in coordinator's session token authorizes member delegation.
//!
//! Responsibilities:
//! - Coordinator project bindings (create/replace/delete)
//! - Session token minting on login (each login invalidates the prior token)
//! - Scoped member tokens, delegated once per member phone number

pub mod actions;
pub mod errors;
pub mod models;
pub mod phone;
pub mod token;

pub use errors::AuthError;
pub use token::{bearer_token, verify_bearer, TokenGenerator};
