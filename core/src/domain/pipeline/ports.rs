use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::entities::Message,
    pipeline::{entities::PendingTurn, value_objects::TurnRequest},
};

pub trait PipelineService: Send + Sync {
    /// Entry guard. Checks, in order: a credential is available (otherwise
    /// the credential prompt is raised and nothing is appended), the
    /// request is not empty, no other turn is in flight. On success the
    /// user message and the placeholder are appended together.
    fn start_turn(
        &self,
        session_id: String,
        request: TurnRequest,
    ) -> impl Future<Output = Result<PendingTurn, CoreError>> + Send;

    /// Runs an admitted turn to its terminal message. Stage failures are
    /// folded into the message; only storage failures are returned.
    fn run_turn(&self, pending: PendingTurn)
    -> impl Future<Output = Result<Message, CoreError>> + Send;
}
