use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consultation::entities::HealthAnalysis,
    llm::value_objects::ApiCredential,
    product::entities::ProductRecord,
    session::entities::UserProfile,
};

pub trait ConsultationService: Send + Sync {
    /// Backend and decode failures propagate; no verdict is ever invented
    fn consult(
        &self,
        credential: ApiCredential,
        product: ProductRecord,
        inquiry_condition: Option<String>,
        profile: Option<UserProfile>,
    ) -> impl Future<Output = Result<HealthAnalysis, CoreError>> + Send;
}
