//! Credential issuance and delegation service for the Fieldwork
//! data-collection platform.
//!
//! A server-wide bearer secret authorizes coordinators to bind a phone number
//! to exactly one named project; a logged-in coordinator may then delegate
//! scoped access tokens to members of that project. All state lives behind
//! the credential-store and project-registry traits in [`kernel`].

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::Config;
