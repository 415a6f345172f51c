use crate::shared::core::primitives::ParticipantId;
use crate::shared::infrastructure::identity::{IdentityError, ParticipantDirectory};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryParticipantDirectory {
    participants: RwLock<HashMap<String, ParticipantId>>,
    is_offline: bool,
}

impl InMemoryParticipantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn register(&self, external_identity: impl Into<String>, participant_id: ParticipantId) {
        self.participants
            .write()
            .await
            .insert(external_identity.into(), participant_id);
    }
}

#[async_trait::async_trait]
impl ParticipantDirectory for InMemoryParticipantDirectory {
    async fn resolve_participant(
        &self,
        external_identity: &str,
    ) -> Result<ParticipantId, IdentityError> {
        if self.is_offline {
            return Err(IdentityError::Backend("Participant directory offline".into()));
        }
        self.participants
            .read()
            .await
            .get(external_identity)
            .cloned()
            .ok_or_else(|| IdentityError::NotRegistered(external_identity.to_string()))
    }
}
