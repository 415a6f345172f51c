pub mod in_memory;

use crate::shared::core::primitives::ParticipantId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("'{0}' is not a registered participant")]
    NotRegistered(String),

    #[error("identity backend error: {0}")]
    Backend(String),
}

/// Resolves an external identity (chat account, e-mail, ...) to a participant.
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    async fn resolve_participant(
        &self,
        external_identity: &str,
    ) -> Result<ParticipantId, IdentityError>;
}
