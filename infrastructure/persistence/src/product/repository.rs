use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::{Pagination, ProductRepository};

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, page: Pagination) -> Result<Vec<Product>, RepositoryError> {
        // LIMIT NULL is Postgres for "no limit", so an unset window returns
        // the whole catalog.
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, image, price_label, size, usage, created_at FROM products ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, image, price_label, size, usage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                image = EXCLUDED.image,
                price_label = EXCLUDED.price_label,
                size = EXCLUDED.size,
                usage = EXCLUDED.usage"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.image)
        .bind(&product.price_label)
        .bind(&product.size)
        .bind(&product.usage)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
