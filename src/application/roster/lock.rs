use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Exclusive-access guard scoped to the player set.
///
/// tokio's RwLock queues waiters fairly, so a steady stream of readers
/// cannot starve a mutation.
#[derive(Debug, Default)]
pub struct RosterLock {
    inner: RwLock<()>,
}

impl RosterLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire for a mutation
    pub async fn write(&self) -> RwLockWriteGuard<'_, ()> {
        self.inner.write().await
    }

    /// Acquire for a snapshot read
    pub async fn read(&self) -> RwLockReadGuard<'_, ()> {
        self.inner.read().await
    }
}
