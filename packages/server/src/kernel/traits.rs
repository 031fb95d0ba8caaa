// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (register/login/delegate flows) lives in domain actions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCredentialStore)

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::domains::auth::models::{Coordinator, Member};

// =============================================================================
// Credential Store Trait (Infrastructure - durable coordinator/member records)
// =============================================================================

/// Durable key-value storage of coordinator and member records.
///
/// Each method is keyed by the stated identity field. `save_coordinator` is
/// an upsert: login overwrites the record that registration created.
#[async_trait]
pub trait BaseCredentialStore: Send + Sync {
    async fn find_coordinator_by_phone(&self, phone_number: &str) -> Result<Option<Coordinator>>;

    async fn find_coordinator_by_project(&self, project_name: &str) -> Result<Option<Coordinator>>;

    /// Project name bound to a coordinator, if any
    async fn find_project_by_coordinator_phone(&self, phone_number: &str)
        -> Result<Option<String>>;

    async fn save_coordinator(&self, coordinator: &Coordinator) -> Result<()>;

    /// Returns true if a record was deleted
    async fn delete_coordinator_by_phone(&self, phone_number: &str) -> Result<bool>;

    async fn find_member_by_phone(&self, phone_number: &str) -> Result<Option<Member>>;

    async fn save_member(&self, member: &Member) -> Result<()>;

    /// Storage reachability check for the health endpoint
    async fn ping(&self) -> Result<()>;
}

// =============================================================================
// Project Registry Trait (Infrastructure - external source of truth for
// which project names exist)
// =============================================================================

/// Project as listed by the external registry
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
}

#[async_trait]
pub trait BaseProjectRegistry: Send + Sync {
    /// All currently registered projects (read-only)
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>>;

    /// Whether a project with this exact name currently exists
    async fn has_project(&self, name: &str) -> Result<bool> {
        let projects = self.list_projects().await?;
        Ok(projects.iter().any(|p| p.name == name))
    }
}
