//! State store collaborator seam and in-memory implementation (PRD-26).

use std::collections::HashMap;

use async_trait::async_trait;
use tipjar_core::evaluation::UserStateMap;
use tipjar_core::types::UserId;
use tokio::sync::RwLock;

use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// StateStore
// ---------------------------------------------------------------------------

/// Durable storage for per-user achievement state.
///
/// The whole state map for a user is loaded and saved as one batch: a
/// save replaces the user's previous map atomically, so a reader never
/// observes some achievements from the new pass and others from the
/// old one.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// The user's current state map; empty for a user never evaluated.
    async fn load(&self, user_id: UserId) -> Result<UserStateMap, PipelineError>;

    /// Replace the user's state map with the result of one pass.
    async fn save(&self, user_id: UserId, states: &UserStateMap) -> Result<(), PipelineError>;
}

// ---------------------------------------------------------------------------
// MemoryStateStore
// ---------------------------------------------------------------------------

/// In-memory [`StateStore`] used by tests and local development.
#[derive(Default)]
pub struct MemoryStateStore {
    states: RwLock<HashMap<UserId, UserStateMap>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self, user_id: UserId) -> Result<UserStateMap, PipelineError> {
        let states = self.states.read().await;
        Ok(states.get(&user_id).cloned().unwrap_or_default())
    }

    async fn save(&self, user_id: UserId, states: &UserStateMap) -> Result<(), PipelineError> {
        let mut guard = self.states.write().await;
        guard.insert(user_id, states.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
