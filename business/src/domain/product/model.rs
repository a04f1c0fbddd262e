use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// A single fertilizer listing. All price/size/use fields are pre-formatted
/// display strings; no arithmetic is ever performed on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub price_label: String,
    pub size: String,
    pub usage: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub image: String,
    pub price_label: String,
    pub size: String,
    pub usage: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            image: props.image,
            price_label: props.price_label,
            size: props.size,
            usage: props.usage,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        image: String,
        price_label: String,
        size: String,
        usage: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            image,
            price_label,
            size,
            usage,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            image: "/d1.jpeg".to_string(),
            price_label: "₹1,250 / bag".to_string(),
            size: "50kg".to_string(),
            usage: "Boosts nitrogen levels".to_string(),
        }
    }

    #[test]
    fn should_create_product_with_fresh_id() {
        let a = Product::new(props("Urea 50kg")).unwrap();
        let b = Product::new(props("Urea 50kg")).unwrap();

        assert_eq!(a.name, "Urea 50kg");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Product::new(props("   "));

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }
}
