use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::entities::Message,
    llm::value_objects::ApiCredential,
    session::entities::{SessionSettings, UserProfile},
};

/// Per-session storage for the profile, consent flag and credential
pub trait SessionRepository: Send + Sync {
    /// Unknown sessions yield default settings
    fn get_settings(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<SessionSettings, CoreError>> + Send;

    fn save_profile(
        &self,
        session_id: String,
        profile: UserProfile,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Also clears `credential_prompt_pending`
    fn save_credential(
        &self,
        session_id: String,
        credential: ApiCredential,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn accept_disclaimer(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Raises the flag the client reads to open its credential dialog
    fn request_credential(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SessionService: Send + Sync {
    fn get_settings(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<SessionSettings, CoreError>> + Send;

    /// Stores the profile and returns the confirmation message appended
    /// to the conversation
    fn save_profile(
        &self,
        session_id: String,
        profile: UserProfile,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Blank keys fail with `CoreError::Invalid`
    fn save_credential(
        &self,
        session_id: String,
        key: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn accept_disclaimer(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list_messages(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;

    fn get_message(
        &self,
        session_id: String,
        message_id: Uuid,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;
}
