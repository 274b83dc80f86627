use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ConversationRepository,
    llm::{ports::LLMClient, value_objects::ApiCredential},
    product::{
        entities::ProductRecord,
        ports::{ProductCatalog, ProductResolverService},
    },
    session::ports::SessionRepository,
};

fn web_fallback_prompt(product_name: &str) -> String {
    format!(
        "Find the full ingredients list for the product: \"{}\". Return the ingredients text verbatim found on the web.",
        product_name
    )
}

impl<LLM, CAT, CV, SS> ProductResolverService for Service<LLM, CAT, CV, SS>
where
    LLM: LLMClient,
    CAT: ProductCatalog,
    CV: ConversationRepository,
    SS: SessionRepository,
{
    #[instrument(skip(self))]
    async fn resolve_by_barcode(&self, barcode: String) -> Option<ProductRecord> {
        match self.product_catalog.find_by_barcode(barcode).await {
            Ok(Some(product)) => {
                tracing::debug!(name = %product.name, "Barcode resolved in catalog");
                Some(product)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog barcode lookup failed, treating as not found");
                None
            }
        }
    }

    #[instrument(skip(self))]
    async fn resolve_by_name(&self, query: String) -> Option<ProductRecord> {
        match self.product_catalog.search_by_name(query).await {
            Ok(Some(product)) => {
                tracing::debug!(name = %product.name, "Name resolved in catalog");
                Some(product)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Catalog search failed, treating as not found");
                None
            }
        }
    }

    #[instrument(skip(self, credential))]
    async fn resolve_via_web_fallback(
        &self,
        credential: ApiCredential,
        query: String,
    ) -> Result<ProductRecord, CoreError> {
        let answer = match self
            .llm_client
            .generate_with_search(credential, web_fallback_prompt(&query))
            .await
        {
            Ok(text) => text,
            Err(CoreError::EmptyBackendResponse) => String::new(),
            Err(e) => return Err(e),
        };

        Ok(ProductRecord::from_web_search(query, answer))
    }
}
