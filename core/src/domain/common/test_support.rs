use crate::{
    domain::{
        common::services::Service, llm::ports::MockLLMClient, llm::value_objects::ApiCredential,
        product::ports::MockProductCatalog,
    },
    infrastructure::{
        conversation::in_memory::InMemoryConversationRepository,
        session::in_memory::InMemorySessionRepository,
    },
};

pub(crate) type TestService = Service<
    MockLLMClient,
    MockProductCatalog,
    InMemoryConversationRepository,
    InMemorySessionRepository,
>;

pub(crate) fn credential() -> ApiCredential {
    ApiCredential::new("test-api-key").expect("non-blank key")
}

/// Mocked backends over real in-memory stores, no default credential
pub(crate) fn service_with(llm: MockLLMClient, catalog: MockProductCatalog) -> TestService {
    Service::new(
        llm,
        catalog,
        InMemoryConversationRepository::default(),
        InMemorySessionRepository::new(None),
    )
}
