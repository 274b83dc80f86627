use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::entities::{Message, TurnHandle},
};

/// Ordered message log per session plus its single in-flight turn slot
pub trait ConversationRepository: Send + Sync {
    /// Appends both messages and claims the session's turn slot in one
    /// step. Fails with `TurnInFlight` without appending anything when the
    /// slot is already taken.
    fn begin_turn(
        &self,
        session_id: String,
        user_message: Message,
        placeholder: Message,
    ) -> impl Future<Output = Result<TurnHandle, CoreError>> + Send;

    fn update_thinking_step(
        &self,
        handle: TurnHandle,
        step: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Replaces the placeholder and releases the turn slot
    fn complete_turn(
        &self,
        handle: TurnHandle,
        message: Message,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    fn append_message(
        &self,
        session_id: String,
        message: Message,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    fn list_messages(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;

    fn get_message(
        &self,
        session_id: String,
        message_id: Uuid,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;
}
