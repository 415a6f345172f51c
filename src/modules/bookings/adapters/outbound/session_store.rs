use crate::modules::bookings::core::wizard::WizardSession;
use crate::shared::core::primitives::SessionId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("booking session {0} not found")]
    NotFound(SessionId),

    #[error("booking session {0} already exists")]
    AlreadyExists(SessionId),

    #[error("session store backend error: {0}")]
    Backend(String),
}

/// Live wizard sessions keyed by id. Creation and eviction are up to the caller.
///
/// Finished sessions (done or terminated) are kept until evicted; callers must evict them.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: WizardSession) -> Result<(), SessionStoreError>;
    async fn load(&self, session_id: SessionId) -> Result<WizardSession, SessionStoreError>;
    async fn save(&self, session: WizardSession) -> Result<(), SessionStoreError>;
    async fn evict(&self, session_id: SessionId) -> Result<Option<WizardSession>, SessionStoreError>;
}
