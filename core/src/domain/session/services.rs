use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{entities::Message, ports::ConversationRepository},
    llm::{ports::LLMClient, value_objects::ApiCredential},
    product::ports::ProductCatalog,
    session::{
        entities::{SessionSettings, UserProfile},
        ports::{SessionRepository, SessionService},
    },
};

impl<LLM, CAT, CV, SS> SessionService for Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    async fn get_settings(&self, session_id: String) -> Result<SessionSettings, CoreError> {
        self.session_repository.get_settings(session_id).await
    }

    #[instrument(skip(self, profile))]
    async fn save_profile(
        &self,
        session_id: String,
        profile: UserProfile,
    ) -> Result<Message, CoreError> {
        let confirmation = Message::agent(profile.confirmation_text());

        self.session_repository
            .save_profile(session_id.clone(), profile)
            .await?;

        self.conversation_repository
            .append_message(session_id, confirmation)
            .await
    }

    #[instrument(skip(self, key))]
    async fn save_credential(&self, session_id: String, key: String) -> Result<(), CoreError> {
        let credential = ApiCredential::new(key).ok_or(CoreError::Invalid)?;
        tracing::info!(fingerprint = %credential.fingerprint(), "Storing API credential");

        self.session_repository
            .save_credential(session_id, credential)
            .await
    }

    async fn accept_disclaimer(&self, session_id: String) -> Result<(), CoreError> {
        self.session_repository.accept_disclaimer(session_id).await
    }

    async fn list_messages(&self, session_id: String) -> Result<Vec<Message>, CoreError> {
        self.conversation_repository.list_messages(session_id).await
    }

    async fn get_message(&self, session_id: String, message_id: Uuid) -> Result<Message, CoreError> {
        self.conversation_repository
            .get_message(session_id, message_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::service_with,
        conversation::entities::MessageRole,
        llm::ports::MockLLMClient,
        product::ports::MockProductCatalog,
    };

    fn service() -> crate::domain::common::test_support::TestService {
        service_with(MockLLMClient::new(), MockProductCatalog::new())
    }

    #[tokio::test]
    async fn test_save_profile_appends_confirmation() {
        let service = service();
        let profile = UserProfile {
            conditions: "Celiac".into(),
            ..Default::default()
        };

        let message = service.save_profile("s1".into(), profile.clone()).await.unwrap();

        assert_eq!(message.role, MessageRole::Agent);
        assert!(message.text.contains("Celiac"));

        let settings = SessionService::get_settings(&service, "s1".into()).await.unwrap();
        assert_eq!(settings.profile, Some(profile));

        let messages = service.list_messages("s1".into()).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, message.id);
    }

    #[tokio::test]
    async fn test_blank_credential_is_invalid() {
        let service = service();
        let result = service.save_credential("s1".into(), "   ".into()).await;
        assert_eq!(result, Err(CoreError::Invalid));
    }

    #[tokio::test]
    async fn test_save_credential_clears_prompt_flag() {
        let service = service();
        service
            .session_repository
            .request_credential("s1".into())
            .await
            .unwrap();

        service
            .save_credential("s1".into(), "AIza-test".into())
            .await
            .unwrap();

        let settings = SessionService::get_settings(&service, "s1".into()).await.unwrap();
        assert!(!settings.credential_prompt_pending);
        assert_eq!(settings.credential.unwrap().expose(), "AIza-test");
    }

    #[tokio::test]
    async fn test_accept_disclaimer_is_per_session() {
        let service = service();
        service.accept_disclaimer("s1".into()).await.unwrap();

        let s1 = SessionService::get_settings(&service, "s1".into()).await.unwrap();
        let s2 = SessionService::get_settings(&service, "s2".into()).await.unwrap();
        assert!(s1.disclaimer_accepted);
        assert!(!s2.disclaimer_accepted);
    }

    #[tokio::test]
    async fn test_unknown_message_is_not_found() {
        let service = service();
        let result = service.get_message("s1".into(), Uuid::nil()).await;
        assert_eq!(result, Err(CoreError::NotFound));
    }
}
