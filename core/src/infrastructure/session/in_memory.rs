use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::ApiCredential,
    session::{
        entities::{SessionSettings, UserProfile},
        ports::SessionRepository,
    },
};

/// Process-local session settings.
///
/// Sessions without a stored credential fall back to `default_credential`.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    default_credential: Option<ApiCredential>,
    sessions: RwLock<HashMap<String, SessionSettings>>,
}

impl InMemorySessionRepository {
    pub fn new(default_credential: Option<ApiCredential>) -> Self {
        Self {
            default_credential,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    async fn update<F>(&self, session_id: String, apply: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut SessionSettings) + Send,
    {
        let mut sessions = self.sessions.write().await;
        apply(sessions.entry(session_id).or_default());
        Ok(())
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get_settings(&self, session_id: String) -> Result<SessionSettings, CoreError> {
        let sessions = self.sessions.read().await;
        let mut settings = sessions.get(&session_id).cloned().unwrap_or_default();

        if settings.credential.is_none() {
            settings.credential = self.default_credential.clone();
        }

        Ok(settings)
    }

    async fn save_profile(&self, session_id: String, profile: UserProfile) -> Result<(), CoreError> {
        self.update(session_id, |s| s.profile = Some(profile)).await
    }

    async fn save_credential(
        &self,
        session_id: String,
        credential: ApiCredential,
    ) -> Result<(), CoreError> {
        self.update(session_id, |s| {
            s.credential = Some(credential);
            s.credential_prompt_pending = false;
        })
        .await
    }

    async fn accept_disclaimer(&self, session_id: String) -> Result<(), CoreError> {
        self.update(session_id, |s| s.disclaimer_accepted = true).await
    }

    async fn request_credential(&self, session_id: String) -> Result<(), CoreError> {
        self.update(session_id, |s| s.credential_prompt_pending = true)
            .await
    }
}
