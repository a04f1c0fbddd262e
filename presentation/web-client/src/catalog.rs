//! View-model state for the catalog page.
//!
//! Kept free of any rendering concerns so the filter and cart behaviour can
//! be unit tested without a browser.

use crate::api::ProductDto;

/// Case-insensitive substring filter over product names. The query is
/// trimmed and case-folded; an empty query matches everything. Purely local,
/// recomputed per keystroke, never triggers a re-fetch.
pub fn filter_by_name(products: &[ProductDto], query: &str) -> Vec<ProductDto> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// In-memory cart badge. Never persisted; reload resets it to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartCounter(u32);

impl CartCounter {
    pub fn add(&mut self) {
        self.0 += 1;
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> ProductDto {
        ProductDto {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            image: "/d1.jpeg".to_string(),
            price_label: "₹1,450 / bag".to_string(),
            size: "50kg".to_string(),
            usage: "General purpose".to_string(),
        }
    }

    fn catalog() -> Vec<ProductDto> {
        vec![product("Urea 50kg"), product("DAP Compound")]
    }

    #[test]
    fn should_return_full_list_for_empty_query() {
        let products = catalog();

        let filtered = filter_by_name(&products, "");

        assert_eq!(filtered, products);
    }

    #[test]
    fn should_return_full_list_for_substring_of_every_name() {
        // Both "Urea 50kg" and "DAP Compound" contain an "a".
        let products = catalog();

        let filtered = filter_by_name(&products, "a");

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn should_match_case_insensitively_with_surrounding_whitespace() {
        let products = catalog();

        let filtered = filter_by_name(&products, "  urea ");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Urea 50kg");
    }

    #[test]
    fn should_return_empty_list_when_nothing_matches() {
        let products = catalog();

        let filtered = filter_by_name(&products, "pesticide");

        assert!(filtered.is_empty());
    }

    #[test]
    fn should_be_idempotent() {
        let products = catalog();

        let once = filter_by_name(&products, "comp");
        let twice = filter_by_name(&once, "comp");

        assert_eq!(once, twice);
    }

    #[test]
    fn should_start_cart_at_zero_and_only_increment() {
        let mut cart = CartCounter::default();
        assert_eq!(cart.count(), 0);

        cart.add();
        cart.add();
        cart.add();

        assert_eq!(cart.count(), 3);
    }
}
