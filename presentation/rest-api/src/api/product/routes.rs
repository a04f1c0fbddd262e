use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::product::repository::Pagination;
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl ProductApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Catalog listing API
///
/// The catalog surface is read-only; products enter the store out-of-band
/// through the seed binary.
#[OpenApi]
impl ProductApi {
    /// List catalog products
    ///
    /// Returns the product catalog ordered newest first. `limit` and `offset`
    /// window the listing; omitting both returns the full catalog.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            page: Pagination {
                limit: limit.0.map(i64::from),
                offset: offset.0.map(i64::from),
            },
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use chrono::Utc;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use uuid::Uuid;

    struct StubGetAll {
        products: Vec<Product>,
    }

    #[async_trait]
    impl GetAllProductsUseCase for StubGetAll {
        async fn execute(
            &self,
            _params: GetAllProductsParams,
        ) -> Result<Vec<Product>, ProductError> {
            Ok(self.products.clone())
        }
    }

    struct FailingGetAll;

    #[async_trait]
    impl GetAllProductsUseCase for FailingGetAll {
        async fn execute(
            &self,
            _params: GetAllProductsParams,
        ) -> Result<Vec<Product>, ProductError> {
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        }
    }

    fn sample_product(name: &str) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            "/d1.jpeg".to_string(),
            "₹1,450 / bag".to_string(),
            "50kg".to_string(),
            "Boosts nitrogen levels".to_string(),
            Utc::now(),
        )
    }

    fn test_app(use_case: Arc<dyn GetAllProductsUseCase>) -> Route {
        let api_service =
            OpenApiService::new(ProductApi::new(use_case), "Fertilizer Catalog API", "test");
        Route::new().nest("/api", api_service)
    }

    #[tokio::test]
    async fn should_list_every_stored_product_with_all_wire_fields() {
        let stub = StubGetAll {
            products: vec![sample_product("Urea 50kg"), sample_product("DAP Compound")],
        };
        let cli = TestClient::new(test_app(Arc::new(stub)));

        let resp = cli.get("/api/products").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let products = json.value().array();
        assert_eq!(products.len(), 2);
        let first = products.get(0).object();
        for field in ["id", "name", "image", "priceLabel", "size", "use"] {
            // every wire field is a string; this panics if one is missing
            let _ = first.get(field).string();
        }
        assert_eq!(first.get("name").string(), "Urea 50kg");
    }

    #[tokio::test]
    async fn should_return_empty_array_for_empty_catalog() {
        let stub = StubGetAll { products: vec![] };
        let cli = TestClient::new(test_app(Arc::new(stub)));

        let resp = cli.get("/api/products").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        assert_eq!(json.value().array().len(), 0);
    }

    #[tokio::test]
    async fn should_map_store_failure_to_internal_error() {
        let cli = TestClient::new(test_app(Arc::new(FailingGetAll)));

        let resp = cli.get("/api/products").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = resp.json().await;
        assert_eq!(json.value().object().get("name").string(), "InternalError");
    }

    #[tokio::test]
    async fn should_accept_page_window_query_parameters() {
        let stub = StubGetAll {
            products: vec![sample_product("Urea 50kg")],
        };
        let cli = TestClient::new(test_app(Arc::new(stub)));

        let resp = cli.get("/api/products?limit=1&offset=0").send().await;

        resp.assert_status_is_ok();
    }
}
