use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consultation::{
        entities::HealthAnalysis,
        ports::ConsultationService,
        prompts::{CONSULTANT_SYSTEM_INSTRUCTION, build_consultation_prompt},
        schema::get_health_analysis_schema,
    },
    conversation::ports::ConversationRepository,
    llm::{payload::decode_payload, ports::LLMClient, value_objects::ApiCredential},
    product::{entities::ProductRecord, ports::ProductCatalog},
    session::{entities::UserProfile, ports::SessionRepository},
};

impl<LLM, CAT, CV, SS> ConsultationService for Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    #[instrument(
        skip(self, credential, product, profile),
        fields(product = %product.name, has_profile = profile.is_some())
    )]
    async fn consult(
        &self,
        credential: ApiCredential,
        product: ProductRecord,
        inquiry_condition: Option<String>,
        profile: Option<UserProfile>,
    ) -> Result<HealthAnalysis, CoreError> {
        let prompt =
            build_consultation_prompt(&product, inquiry_condition.as_deref(), profile.as_ref());

        let raw_response = self
            .llm_client
            .generate_with_text(
                credential,
                Some(CONSULTANT_SYSTEM_INSTRUCTION.to_string()),
                prompt,
                get_health_analysis_schema(),
            )
            .await?;

        let analysis = decode_payload::<HealthAnalysis>(&raw_response)?;

        tracing::info!(
            verdict = analysis.verdict.as_str(),
            concerns = analysis.key_concerns.len(),
            "Health analysis completed"
        );

        Ok(analysis)
    }
}
