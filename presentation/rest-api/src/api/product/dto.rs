use poem_openapi::Object;

use business::domain::product::model::Product;

/// Wire shape of a single catalog listing. This is the versioned
/// service-boundary schema; `priceLabel` and `use` keep the names the
/// storefront reads.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Display name; the storefront search key
    pub name: String,
    /// Path or URL of the display asset
    pub image: String,
    /// Pre-formatted price display string
    #[oai(rename = "priceLabel")]
    pub price_label: String,
    /// Pack size display string
    pub size: String,
    /// Free-text usage description
    #[oai(rename = "use")]
    pub usage: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            image: product.image,
            price_label: product.price_label,
            size: product.size,
            usage: product.usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use poem_openapi::types::ToJSON;
    use uuid::Uuid;

    #[test]
    fn should_serialize_with_storefront_field_names() {
        let product = Product::from_repository(
            Uuid::new_v4(),
            "Urea 50kg".to_string(),
            "/d1.jpeg".to_string(),
            "₹1,450 / bag".to_string(),
            "50kg".to_string(),
            "Boosts nitrogen levels".to_string(),
            Utc::now(),
        );

        let response: ProductResponse = product.into();
        let json = response.to_json().unwrap();

        let object = json.as_object().unwrap();
        for field in ["id", "name", "image", "priceLabel", "size", "use"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object["use"], "Boosts nitrogen levels");
    }
}
