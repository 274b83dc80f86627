use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::ApiCredential,
    product::entities::ProductRecord,
};

/// Port for the structured food product catalog
#[cfg_attr(test, mockall::automock)]
pub trait ProductCatalog: Send + Sync {
    /// Exact lookup by barcode; `Ok(None)` when the catalog has no entry
    fn find_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<ProductRecord>, CoreError>> + Send;

    /// Keyword search; only the catalog's first ranked hit is returned
    fn search_by_name(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<ProductRecord>, CoreError>> + Send;
}

/// Resolves user identifiers to a product record.
///
/// Catalog failures are absorbed into `None`; the caller owns every
/// fallback decision.
pub trait ProductResolverService: Send + Sync {
    fn resolve_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Option<ProductRecord>> + Send;

    fn resolve_by_name(&self, query: String) -> impl Future<Output = Option<ProductRecord>> + Send;

    /// Last resort lookup through a grounded web search. Always yields a
    /// record; backend failures propagate.
    fn resolve_via_web_fallback(
        &self,
        credential: ApiCredential,
        query: String,
    ) -> impl Future<Output = Result<ProductRecord, CoreError>> + Send;
}
