use std::sync::Arc;

/// Aggregate every domain service trait is implemented on.
///
/// Adapters are held behind `Arc` so a clone can be moved into a spawned
/// task that runs a turn to completion.
pub struct Service<LLM, CAT, CV, SS> {
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) product_catalog: Arc<CAT>,
    pub(crate) conversation_repository: Arc<CV>,
    pub(crate) session_repository: Arc<SS>,
}

impl<LLM, CAT, CV, SS> Service<LLM, CAT, CV, SS> {
    pub fn new(
        llm_client: LLM,
        product_catalog: CAT,
        conversation_repository: CV,
        session_repository: SS,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            product_catalog: Arc::new(product_catalog),
            conversation_repository: Arc::new(conversation_repository),
            session_repository: Arc::new(session_repository),
        }
    }
}

impl<LLM, CAT, CV, SS> Clone for Service<LLM, CAT, CV, SS> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            product_catalog: Arc::clone(&self.product_catalog),
            conversation_repository: Arc::clone(&self.conversation_repository),
            session_repository: Arc::clone(&self.session_repository),
        }
    }
}
