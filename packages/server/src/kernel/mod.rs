//! Infrastructure layer: collaborator traits, their implementations, and the
//! dependency container the composition root wires together.

pub mod deps;
pub mod locks;
pub mod memory_store;
pub mod pg_store;
pub mod registry_client;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use locks::KeyedLocks;
pub use memory_store::InMemoryCredentialStore;
pub use pg_store::PgCredentialStore;
pub use registry_client::HttpProjectRegistry;
pub use traits::{BaseCredentialStore, BaseProjectRegistry, ProjectInfo};
