//! Product Record
//!
//! The catalog record as served by the Fake Store API.

/// A single product from the catalog.
///
/// The upstream response also carries a `rating` object; it is not consumed
/// anywhere in the dashboard, so serde simply skips it on deserialize.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl Product {
    /// Price formatted for display: two decimals, currency-prefixed.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price_two_decimals() {
        let product = Product {
            id: 1,
            title: "Backpack".to_string(),
            price: 109.95,
            category: "men's clothing".to_string(),
            description: "Fits laptops up to 15 inches".to_string(),
            image: "https://example.com/backpack.jpg".to_string(),
        };
        assert_eq!(product.display_price(), "$109.95");
    }

    #[test]
    fn test_display_price_pads_whole_numbers() {
        let product = Product {
            id: 2,
            title: "Shirt".to_string(),
            price: 22.0,
            category: "men's clothing".to_string(),
            description: "Slim fit".to_string(),
            image: "https://example.com/shirt.jpg".to_string(),
        };
        assert_eq!(product.display_price(), "$22.00");
    }

    #[test]
    fn test_deserialize_ignores_rating() {
        // Upstream shape includes a rating object the dashboard never reads.
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price, 109.95);
    }

    #[test]
    fn test_deserialize_catalog_preserves_order() {
        let json = r#"[
            {"id": 3, "title": "C", "price": 5.0, "description": "", "category": "y", "image": ""},
            {"id": 1, "title": "A", "price": 10.0, "description": "", "category": "x", "image": ""}
        ]"#;

        let catalog: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, 3);
        assert_eq!(catalog[1].id, 1);
    }
}
