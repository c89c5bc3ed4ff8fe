use contracts::domain::products::Listing;

use crate::shared::api_utils::{get_json, put_unit};

/// Fetch one server-side page of a category's product listings.
pub async fn fetch_products(category: &str, page: usize, size: usize) -> Result<Vec<Listing>, String> {
    get_json(&format!("/Api/v3/get/posts/data/{}?page={}&size={}", category, page, size)).await
}

/// Toggle the recommendation flag for a product. The endpoint name is
/// historical; it flips the state rather than deleting anything.
pub async fn update_recommendation_status(product_id: i64) -> Result<(), String> {
    put_unit(&format!("/Api/v3/delete/recommend/{}", product_id)).await
}
