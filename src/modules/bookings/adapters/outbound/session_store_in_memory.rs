use crate::modules::bookings::adapters::outbound::session_store::{SessionStore, SessionStoreError};
use crate::modules::bookings::core::wizard::WizardSession;
use crate::shared::core::primitives::SessionId;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, WizardSession>>,
    is_offline: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), SessionStoreError> {
        if self.is_offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.sessions.write().await;
        if guard.contains_key(&session.id()) {
            return Err(SessionStoreError::AlreadyExists(session.id()));
        }
        guard.insert(session.id(), session);
        Ok(())
    }

    async fn load(&self, session_id: SessionId) -> Result<WizardSession, SessionStoreError> {
        self.ensure_online()?;
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(session_id))
    }

    async fn save(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.sessions.write().await;
        match guard.get_mut(&session.id()) {
            Some(slot) => {
                *slot = session;
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(session.id())),
        }
    }

    async fn evict(&self, session_id: SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        self.ensure_online()?;
        Ok(self.sessions.write().await.remove(&session_id))
    }
}
