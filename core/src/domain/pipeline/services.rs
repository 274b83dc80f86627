use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    consultation::ports::ConsultationService,
    conversation::{
        entities::{Message, TurnHandle},
        ports::ConversationRepository,
    },
    intent::ports::IntentService,
    llm::ports::LLMClient,
    pipeline::{
        entities::{FailureKind, NotFoundReason, PendingTurn, TurnOutcome},
        ports::PipelineService,
        value_objects::{PROFILE_CONDITION_LABEL, TurnRequest, TurnSnapshot},
    },
    product::{
        entities::ProductRecord,
        ports::{ProductCatalog, ProductResolverService},
        value_objects::looks_like_barcode,
    },
    session::ports::SessionRepository,
};

impl<LLM, CAT, CV, SS> Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    async fn set_step(&self, handle: &TurnHandle, step: String) -> Result<(), CoreError> {
        tracing::debug!(step = %step, "Thinking step");
        self.conversation_repository
            .update_thinking_step(handle.clone(), step)
            .await
    }

    /// Stage sequence of one turn. Any error returned here is classified
    /// once by `run_turn`.
    async fn execute_turn(&self, pending: &PendingTurn) -> Result<TurnOutcome, CoreError> {
        let handle = &pending.handle;
        let credential = &pending.credential;

        let mut product: Option<ProductRecord> = None;
        let mut candidate_name: Option<String> = None;
        let mut condition: Option<String> = None;

        if let Some(image) = &pending.image {
            let identification = self
                .identify_image(credential.clone(), image.clone())
                .await?;

            if let Some(barcode) = identification.barcode {
                self.set_step(
                    handle,
                    format!("Found barcode: {barcode}. Searching database..."),
                )
                .await?;
                product = self.resolve_by_barcode(barcode).await;
            }

            if product.is_none() {
                let Some(name) = identification.product_name else {
                    return Ok(TurnOutcome::NotFound(NotFoundReason::ImageUnclear));
                };

                self.set_step(
                    handle,
                    format!("Identified product: {name}. Searching database..."),
                )
                .await?;
                candidate_name = Some(name.clone());
                product = self.resolve_by_name(name).await;
            }
        }

        if let Some(text) = &pending.text {
            if looks_like_barcode(text) {
                self.set_step(
                    handle,
                    format!("Detected barcode {text}. Searching database..."),
                )
                .await?;

                if let Some(hit) = self.resolve_by_barcode(text.clone()).await {
                    candidate_name = Some(hit.name.clone());
                    product = Some(hit);
                }
            } else {
                let intent = self.extract_intent(credential.clone(), text.clone()).await?;
                tracing::info!(is_relevant = intent.is_relevant, "Intent relevance");

                if product.is_none()
                    && candidate_name.is_none()
                    && let Some(name) = intent.product_name
                {
                    self.set_step(handle, format!("Searching ingredients for {name}..."))
                        .await?;
                    candidate_name = Some(name.clone());
                    product = self.resolve_by_name(name).await;
                }

                condition = intent.health_condition;
            }
        }

        if product.is_none()
            && let Some(name) = &candidate_name
        {
            self.set_step(handle, format!("Checking web sources for {name}..."))
                .await?;
            product = Some(
                self.resolve_via_web_fallback(credential.clone(), name.clone())
                    .await?,
            );
        }

        let Some(product) = product else {
            return Ok(TurnOutcome::NotFound(NotFoundReason::NoProduct));
        };

        let condition_label = condition
            .clone()
            .unwrap_or_else(|| PROFILE_CONDITION_LABEL.to_string());
        self.set_step(handle, format!("Analyzing impact on {condition_label}..."))
            .await?;

        let analysis = self
            .consult(
                credential.clone(),
                product.clone(),
                condition,
                pending.profile.clone(),
            )
            .await?;

        Ok(TurnOutcome::Success {
            product,
            analysis,
            condition_label,
        })
    }
}

impl<LLM, CAT, CV, SS> PipelineService for Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    #[instrument(skip(self, request), fields(has_text = request.text.is_some(), has_image = request.image.is_some()))]
    async fn start_turn(
        &self,
        session_id: String,
        request: TurnRequest,
    ) -> Result<PendingTurn, CoreError> {
        let snapshot: TurnSnapshot = self
            .session_repository
            .get_settings(session_id.clone())
            .await?
            .into();

        let Some(credential) = snapshot.credential else {
            tracing::warn!("No credential available, prompting for one");
            self.session_repository
                .request_credential(session_id)
                .await?;
            return Err(CoreError::MissingCredential);
        };

        if request.is_empty() {
            return Err(CoreError::Invalid);
        }

        let user_message = Message::user(request.user_text());
        let placeholder = Message::placeholder(request.initial_step());

        let handle = self
            .conversation_repository
            .begin_turn(session_id, user_message, placeholder.clone())
            .await?;

        tracing::info!(
            message_id = %handle.message_id,
            credential = %credential.fingerprint(),
            "Turn admitted"
        );

        Ok(PendingTurn {
            handle,
            placeholder,
            text: request.text,
            image: request.image,
            credential,
            profile: snapshot.profile,
        })
    }

    #[instrument(skip(self, pending), fields(session_id = %pending.handle.session_id, message_id = %pending.handle.message_id))]
    async fn run_turn(&self, pending: PendingTurn) -> Result<Message, CoreError> {
        let outcome = match self.execute_turn(&pending).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let kind = FailureKind::from(&e);
                tracing::error!(error = %e, ?kind, "Turn failed");

                if kind == FailureKind::Credential
                    && let Err(flag_error) = self
                        .session_repository
                        .request_credential(pending.handle.session_id.clone())
                        .await
                {
                    tracing::warn!(error = %flag_error, "Could not raise credential prompt");
                }

                TurnOutcome::Failed(kind)
            }
        };

        let PendingTurn {
            handle,
            placeholder,
            ..
        } = pending;

        self.conversation_repository
            .complete_turn(handle, outcome.into_message(placeholder))
            .await
    }
}
