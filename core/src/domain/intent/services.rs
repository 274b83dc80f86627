use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ConversationRepository,
    intent::{
        entities::{ImageIdentification, Intent},
        ports::IntentService,
        prompts::{IMAGE_IDENTIFICATION_PROMPT, INTENT_SYSTEM_INSTRUCTION},
        schema::{get_image_identification_schema, get_intent_schema},
    },
    llm::{
        payload::decode_payload,
        ports::LLMClient,
        value_objects::{ApiCredential, ImagePart},
    },
    product::ports::ProductCatalog,
    session::ports::SessionRepository,
};

impl<LLM, CAT, CV, SS> IntentService for Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    #[instrument(skip(self, credential, text))]
    async fn extract_intent(
        &self,
        credential: ApiCredential,
        text: String,
    ) -> Result<Intent, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_text(
                credential,
                Some(INTENT_SYSTEM_INSTRUCTION.to_string()),
                text,
                get_intent_schema(),
            )
            .await?;

        let intent = decode_payload::<Intent>(&raw_response)?.normalized();

        tracing::debug!(
            product_name = ?intent.product_name,
            health_condition = ?intent.health_condition,
            is_relevant = intent.is_relevant,
            "Intent extracted"
        );

        Ok(intent)
    }

    #[instrument(skip(self, credential, image), fields(mime_type = %image.mime_type, size = image.data.len()))]
    async fn identify_image(
        &self,
        credential: ApiCredential,
        image: ImagePart,
    ) -> Result<ImageIdentification, CoreError> {
        let raw_response = match self
            .llm_client
            .generate_with_image(
                credential,
                IMAGE_IDENTIFICATION_PROMPT.to_string(),
                image,
                get_image_identification_schema(),
            )
            .await
        {
            Ok(raw) => raw,
            Err(CoreError::EmptyBackendResponse) => {
                tracing::warn!("Vision backend returned no payload");
                return Ok(ImageIdentification::empty());
            }
            Err(e) => return Err(e),
        };

        match decode_payload::<ImageIdentification>(&raw_response) {
            Ok(identification) => Ok(identification.normalized()),
            Err(_) => Ok(ImageIdentification::empty()),
        }
    }
}
