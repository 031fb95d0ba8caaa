// Test dependencies - fake collaborators for tests
//
// Provides registry fakes that can be injected into ServerDeps, alongside
// the in-memory credential store from `memory_store`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseProjectRegistry, ProjectInfo};

// =============================================================================
// Static Project Registry
// =============================================================================

/// Registry fake backed by a mutable name list
#[derive(Default)]
pub struct StaticProjectRegistry {
    names: Arc<Mutex<Vec<String>>>,
}

impl StaticProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(names: &[&str]) -> Self {
        Self {
            names: Arc::new(Mutex::new(names.iter().map(|n| n.to_string()).collect())),
        }
    }

    /// Simulate a project appearing in the external registry
    pub fn add_project(&self, name: &str) {
        self.names.lock().unwrap().push(name.to_string());
    }

    /// Simulate a project vanishing from the external registry
    pub fn remove_project(&self, name: &str) {
        self.names.lock().unwrap().retain(|n| n != name);
    }
}

#[async_trait]
impl BaseProjectRegistry for StaticProjectRegistry {
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>> {
        let names = self.names.lock().unwrap();
        Ok(names
            .iter()
            .map(|name| ProjectInfo { name: name.clone() })
            .collect())
    }
}

// =============================================================================
// Failing Project Registry
// =============================================================================

/// Registry fake whose calls always fail, for internal-error paths
pub struct FailingProjectRegistry;

#[async_trait]
impl BaseProjectRegistry for FailingProjectRegistry {
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>> {
        Err(anyhow!("project registry unreachable"))
    }
}
