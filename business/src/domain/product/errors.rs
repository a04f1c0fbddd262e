#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
