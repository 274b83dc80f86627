use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    domain::{
        common::{CatalogConfig, HttpClientConfig, entities::app_errors::CoreError},
        product::{entities::ProductRecord, ports::ProductCatalog},
    },
    infrastructure::catalog::{
        dto::{BarcodeResponse, SearchResponse},
        mappers::map_catalog_product,
    },
};

/// Open Food Facts product catalog
#[derive(Debug, Clone)]
pub struct OpenFoodFactsCatalog {
    base_url: String,
    language: String,
    client: Client,
}

impl OpenFoodFactsCatalog {
    pub fn new(catalog: &CatalogConfig, http: &HttpClientConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(http.timeout)
            .user_agent(catalog.user_agent.clone())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build catalog HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: catalog.base_url.trim_end_matches('/').to_string(),
            language: catalog.language.clone(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CoreError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Catalog request failed: {}", e);
            CoreError::ExternalServiceError(format!("Catalog API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Catalog API error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Catalog API returned error: {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse catalog response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse catalog response: {}", e))
        })
    }
}

impl ProductCatalog for OpenFoodFactsCatalog {
    async fn find_by_barcode(&self, barcode: String) -> Result<Option<ProductRecord>, CoreError> {
        let url = format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(&barcode)
        );
        let response: BarcodeResponse = self.get_json(&url).await?;

        Ok(match (response.status, response.product) {
            (Some(1), Some(product)) => Some(map_catalog_product(&product, &self.language)),
            _ => None,
        })
    }

    async fn search_by_name(&self, query: String) -> Result<Option<ProductRecord>, CoreError> {
        let url = format!(
            "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1&page_size=1",
            self.base_url,
            urlencoding::encode(&query)
        );
        let response: SearchResponse = self.get_json(&url).await?;

        Ok(response
            .products
            .first()
            .map(|product| map_catalog_product(product, &self.language)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn catalog_for(server: &MockServer) -> OpenFoodFactsCatalog {
        let catalog = CatalogConfig {
            base_url: server.uri(),
            language: "en".to_string(),
            user_agent: "NutriAgent/0.1 (test)".to_string(),
        };
        let http = HttpClientConfig {
            timeout: Duration::from_secs(5),
        };
        OpenFoodFactsCatalog::new(&catalog, &http).unwrap()
    }

    #[tokio::test]
    async fn test_barcode_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/product/5449000000996.json"))
            .and(header("user-agent", "NutriAgent/0.1 (test)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 1,
                "product": {
                    "product_name": "Coca-Cola",
                    "ingredients_text_en": "Carbonated water, sugar"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let product = catalog_for(&server)
            .find_by_barcode("5449000000996".into())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.name, "Coca-Cola");
        assert_eq!(product.ingredients, "Carbonated water, sugar");
    }

    #[tokio::test]
    async fn test_barcode_miss() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 0,
                "status_verbose": "product not found"
            })))
            .mount(&server)
            .await;

        let product = catalog_for(&server)
            .find_by_barcode("0000".into())
            .await
            .unwrap();

        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_search_takes_first_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .and(query_param("search_terms", "kit kat"))
            .and(query_param("page_size", "1"))
            .and(query_param("json", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "products": [
                    { "product_name": "Kit Kat" },
                    { "product_name": "Kit Kat Chunky" }
                ]
            })))
            .mount(&server)
            .await;

        let product = catalog_for(&server)
            .search_by_name("kit kat".into())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.name, "Kit Kat");
    }

    #[tokio::test]
    async fn test_search_without_products() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "products": [] })))
            .mount(&server)
            .await;

        let product = catalog_for(&server)
            .search_by_name("xyzzy".into())
            .await
            .unwrap();

        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_status_and_decode_failures_are_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v0/product/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);

        assert!(matches!(
            catalog.search_by_name("x".into()).await,
            Err(CoreError::ExternalServiceError(_))
        ));
        assert!(matches!(
            catalog.find_by_barcode("1".into()).await,
            Err(CoreError::ExternalServiceError(_))
        ));
    }
}
