pub mod bearer_auth;

pub use bearer_auth::server_auth_middleware;
