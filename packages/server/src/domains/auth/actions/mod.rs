pub mod delegate;
pub mod login;
pub mod register;
pub mod unregister;

pub use delegate::{delegate_member, DelegatedMember};
pub use login::{login, LoginGrant};
pub use register::{register, RegisteredCoordinator};
pub use unregister::{unregister, UnregisterConfirmation};
