use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("API credential rejected by the generative backend")]
    CredentialRejected,

    #[error("A turn is already in progress for this session")]
    TurnInFlight,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Generative backend returned no payload")]
    EmptyBackendResponse,

    #[error("Response does not match the declared schema: {0}")]
    SchemaViolation(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Failures the orchestrator reports through the credential surface
    pub fn is_credential_related(&self) -> bool {
        matches!(self, CoreError::MissingCredential | CoreError::CredentialRejected)
    }
}
