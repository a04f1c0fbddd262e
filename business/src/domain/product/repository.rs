use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Page window for catalog listings. Both fields unset means the full
/// catalog, which is what the plain listing endpoint requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, page: Pagination) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
}
