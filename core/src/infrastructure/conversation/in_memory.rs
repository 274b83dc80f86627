use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{
        entities::{Message, TurnHandle},
        ports::ConversationRepository,
    },
};

#[derive(Debug, Default)]
struct SessionLog {
    messages: Vec<Message>,
    in_flight: Option<Uuid>,
}

impl SessionLog {
    fn message_mut(&mut self, id: Uuid) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}

/// Process-local message store; one lock guards every session so the
/// turn slot check and the appends happen together
#[derive(Debug, Default)]
pub struct InMemoryConversationRepository {
    sessions: Mutex<HashMap<String, SessionLog>>,
}

impl ConversationRepository for InMemoryConversationRepository {
    async fn begin_turn(
        &self,
        session_id: String,
        user_message: Message,
        placeholder: Message,
    ) -> Result<TurnHandle, CoreError> {
        let mut sessions = self.sessions.lock().await;
        let log = sessions.entry(session_id.clone()).or_default();

        if log.in_flight.is_some() {
            return Err(CoreError::TurnInFlight);
        }

        let message_id = placeholder.id;
        log.messages.push(user_message);
        log.messages.push(placeholder);
        log.in_flight = Some(message_id);

        Ok(TurnHandle {
            session_id,
            message_id,
        })
    }

    async fn update_thinking_step(&self, handle: TurnHandle, step: String) -> Result<(), CoreError> {
        let mut sessions = self.sessions.lock().await;
        let message = sessions
            .get_mut(&handle.session_id)
            .and_then(|log| log.message_mut(handle.message_id))
            .ok_or(CoreError::NotFound)?;

        if !message.is_thinking {
            tracing::warn!(message_id = %handle.message_id, "Step update on a completed message");
            return Err(CoreError::Invalid);
        }

        message.thinking_step = Some(step);
        Ok(())
    }

    async fn complete_turn(&self, handle: TurnHandle, message: Message) -> Result<Message, CoreError> {
        let mut sessions = self.sessions.lock().await;
        let log = sessions
            .get_mut(&handle.session_id)
            .ok_or(CoreError::NotFound)?;

        if log.in_flight != Some(handle.message_id) {
            return Err(CoreError::Invalid);
        }

        let slot = log
            .message_mut(handle.message_id)
            .ok_or(CoreError::NotFound)?;
        *slot = Message {
            id: handle.message_id,
            ..message
        };
        let completed = slot.clone();
        log.in_flight = None;

        Ok(completed)
    }

    async fn append_message(&self, session_id: String, message: Message) -> Result<Message, CoreError> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session_id)
            .or_default()
            .messages
            .push(message.clone());

        Ok(message)
    }

    async fn list_messages(&self, session_id: String) -> Result<Vec<Message>, CoreError> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(&session_id)
            .map(|log| log.messages.clone())
            .unwrap_or_default())
    }

    async fn get_message(
        &self,
        session_id: String,
        message_id: Uuid,
    ) -> Result<Option<Message>, CoreError> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(&session_id)
            .and_then(|log| log.messages.iter().find(|m| m.id == message_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn begin(repo: &InMemoryConversationRepository, session: &str) -> Result<TurnHandle, CoreError> {
        repo.begin_turn(
            session.into(),
            Message::user("coke"),
            Message::placeholder("Analyzing your request..."),
        )
        .await
    }

    #[tokio::test]
    async fn test_one_turn_per_session() {
        let repo = InMemoryConversationRepository::default();

        let handle = begin(&repo, "a").await.unwrap();
        assert_eq!(begin(&repo, "a").await, Err(CoreError::TurnInFlight));
        assert!(begin(&repo, "b").await.is_ok());
        assert_eq!(repo.list_messages("a".into()).await.unwrap().len(), 2);

        let placeholder = repo
            .get_message("a".into(), handle.message_id)
            .await
            .unwrap()
            .unwrap();
        repo.complete_turn(handle, placeholder.complete("done".into(), None, None))
            .await
            .unwrap();

        assert!(begin(&repo, "a").await.is_ok());
    }

    #[tokio::test]
    async fn test_completion_happens_once() {
        let repo = InMemoryConversationRepository::default();
        let handle = begin(&repo, "a").await.unwrap();

        repo.update_thinking_step(handle.clone(), "Detected barcode 1. Searching database...".into())
            .await
            .unwrap();
        let placeholder = repo
            .get_message("a".into(), handle.message_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            placeholder.thinking_step.as_deref(),
            Some("Detected barcode 1. Searching database...")
        );

        let done = placeholder.complete("done".into(), None, None);
        let completed = repo.complete_turn(handle.clone(), done.clone()).await.unwrap();
        assert!(!completed.is_thinking);

        assert_eq!(repo.complete_turn(handle.clone(), done).await, Err(CoreError::Invalid));
        assert_eq!(
            repo.update_thinking_step(handle, "late".into()).await,
            Err(CoreError::Invalid)
        );
    }
}
