use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::BaseCredentialStore;
use crate::domains::auth::models::{Coordinator, Member};

/// In-memory credential store
///
/// Backs the test suites. Coordinators and members are both keyed by phone
/// number, matching the durable store's identity keys.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    coordinators: Arc<RwLock<HashMap<String, Coordinator>>>,
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseCredentialStore for InMemoryCredentialStore {
    async fn find_coordinator_by_phone(&self, phone_number: &str) -> Result<Option<Coordinator>> {
        let coordinators = self.coordinators.read().await;
        Ok(coordinators.get(phone_number).cloned())
    }

    async fn find_coordinator_by_project(&self, project_name: &str) -> Result<Option<Coordinator>> {
        let coordinators = self.coordinators.read().await;
        Ok(coordinators
            .values()
            .find(|c| c.project_name == project_name)
            .cloned())
    }

    async fn find_project_by_coordinator_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<String>> {
        let coordinators = self.coordinators.read().await;
        Ok(coordinators
            .get(phone_number)
            .map(|c| c.project_name.clone()))
    }

    async fn save_coordinator(&self, coordinator: &Coordinator) -> Result<()> {
        let mut coordinators = self.coordinators.write().await;
        coordinators.insert(coordinator.phone_number.clone(), coordinator.clone());
        Ok(())
    }

    async fn delete_coordinator_by_phone(&self, phone_number: &str) -> Result<bool> {
        let mut coordinators = self.coordinators.write().await;
        Ok(coordinators.remove(phone_number).is_some())
    }

    async fn find_member_by_phone(&self, phone_number: &str) -> Result<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(phone_number).cloned())
    }

    async fn save_member(&self, member: &Member) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(member.phone_number.clone(), member.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
