use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intent::entities::{ImageIdentification, Intent},
    llm::value_objects::{ApiCredential, ImagePart},
};

pub trait IntentService: Send + Sync {
    /// Fails with `EmptyBackendResponse` or `SchemaViolation`; never recovers
    fn extract_intent(
        &self,
        credential: ApiCredential,
        text: String,
    ) -> impl Future<Output = Result<Intent, CoreError>> + Send;

    /// Missing or unparseable output degrades to an empty identification
    fn identify_image(
        &self,
        credential: ApiCredential,
        image: ImagePart,
    ) -> impl Future<Output = Result<ImageIdentification, CoreError>> + Send;
}
