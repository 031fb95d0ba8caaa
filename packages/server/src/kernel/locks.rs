use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Per-key async mutexes.
///
/// The check-then-act sequences in registration and delegation are not atomic
/// across the store and the external registry; serializing them per contested
/// key (coordinator phone, project name, member phone) is what upholds the
/// uniqueness invariants under concurrent load. Entries are created on first
/// use and kept for the process lifetime; the key space is small (one entry
/// per phone number or project name seen).
#[derive(Clone, Default)]
pub struct KeyedLocks {
    locks: Arc<RwLock<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `key`, waiting if another task holds it.
    ///
    /// The guard is owned, so it can be held across await points for the
    /// duration of a check-then-act sequence.
    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut locks = self.locks.write().await;
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        entry.lock_owned().await
    }
}
