use crate::{
    domain::{
        common::{NutriAgentConfig, services::Service},
        llm::value_objects::ApiCredential,
    },
    infrastructure::{
        catalog::open_food_facts::OpenFoodFactsCatalog,
        conversation::in_memory::InMemoryConversationRepository,
        llm::gemini_client::GeminiLLMClient, session::in_memory::InMemorySessionRepository,
    },
};

pub type NutriAgentService = Service<
    GeminiLLMClient,
    OpenFoodFactsCatalog,
    InMemoryConversationRepository,
    InMemorySessionRepository,
>;

pub fn create_service(config: NutriAgentConfig) -> Result<NutriAgentService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(&config.llm, &config.http)?;
    let product_catalog = OpenFoodFactsCatalog::new(&config.catalog, &config.http)?;

    let default_credential = config
        .llm
        .gemini_api_key
        .and_then(ApiCredential::new);
    if let Some(credential) = &default_credential {
        tracing::info!(fingerprint = %credential.fingerprint(), "Using default API credential");
    }

    Ok(Service::new(
        llm_client,
        product_catalog,
        InMemoryConversationRepository::default(),
        InMemorySessionRepository::new(default_credential),
    ))
}
