//! Server dependencies for the auth flows (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! handler. Both external collaborators (credential store, project registry)
//! sit behind trait abstractions so tests can inject in-memory fakes; the
//! container is built once by the composition root, never per request.

use std::sync::Arc;

use super::{BaseCredentialStore, BaseProjectRegistry, KeyedLocks};
use crate::domains::auth::TokenGenerator;

/// Server dependencies accessible to the auth flows
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseCredentialStore>,
    pub registry: Arc<dyn BaseProjectRegistry>,
    pub tokens: Arc<TokenGenerator>,
    /// Serializes coordinator register/login/unregister per phone number
    pub coordinator_locks: KeyedLocks,
    /// Serializes registration conflict checks per decoded project name
    pub project_locks: KeyedLocks,
    /// Serializes member creation per member phone number
    pub member_locks: KeyedLocks,
}

impl ServerDeps {
    /// Create new ServerDeps with the given collaborators
    pub fn new(store: Arc<dyn BaseCredentialStore>, registry: Arc<dyn BaseProjectRegistry>) -> Self {
        Self {
            store,
            registry,
            tokens: Arc::new(TokenGenerator::new()),
            coordinator_locks: KeyedLocks::new(),
            project_locks: KeyedLocks::new(),
            member_locks: KeyedLocks::new(),
        }
    }
}
