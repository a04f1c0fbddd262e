//! Out-of-band catalog seeding.
//!
//! The listing endpoint is read-only, so this binary is how products enter
//! the store. Already-seeded names are skipped, so re-running is harmless.

use std::collections::HashSet;
use std::env;

use anyhow::Context;
use dotenvy::dotenv;

use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::repository::{Pagination, ProductRepository};
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::repository::ProductRepositoryPostgres;

fn entry(name: &str, image: &str, price_label: &str, size: &str, usage: &str) -> NewProductProps {
    NewProductProps {
        name: name.to_string(),
        image: image.to_string(),
        price_label: price_label.to_string(),
        size: size.to_string(),
        usage: usage.to_string(),
    }
}

fn default_catalog() -> Vec<NewProductProps> {
    vec![
        entry(
            "Urea 50kg",
            "/d1.jpeg",
            "₹1,450 / bag",
            "50kg",
            "Boosts nitrogen levels for leafy growth",
        ),
        entry(
            "DAP Compound",
            "/d2.jpeg",
            "₹1,900 / bag",
            "50kg",
            "Phosphorus-rich starter for root development",
        ),
        entry(
            "NPK 20-20-20",
            "/d3.jpeg",
            "₹1,650 / bag",
            "25kg",
            "Balanced feed for vegetables and cereals",
        ),
        entry(
            "Potash Granules",
            "/d4.jpeg",
            "₹1,200 / bag",
            "50kg",
            "Improves fruit quality and drought tolerance",
        ),
        entry(
            "Organic Compost",
            "/d5.jpeg",
            "₹550 / bag",
            "40kg",
            "Soil conditioner suitable for all crops",
        ),
        entry(
            "Zinc Sulphate",
            "/d6.jpeg",
            "₹380 / pack",
            "10kg",
            "Corrects zinc deficiency in paddy",
        ),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;

    let migrations_path = env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    let repository = ProductRepositoryPostgres::new(pool);

    let existing = repository.get_all(Pagination::default()).await?;
    let existing_names: HashSet<&str> = existing.iter().map(|p| p.name.as_str()).collect();

    let mut seeded = 0;
    for props in default_catalog() {
        if existing_names.contains(props.name.as_str()) {
            tracing::info!("Skipping already seeded product {}", props.name);
            continue;
        }
        let product = Product::new(props)?;
        repository.save(&product).await?;
        tracing::info!("Seeded {}", product.name);
        seeded += 1;
    }

    tracing::info!("Seeding complete, {} products inserted", seeded);
    Ok(())
}
