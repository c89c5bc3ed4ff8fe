use contracts::domain::products::Listing;

use crate::shared::api_utils::{get_json, put_unit};

/// Fetch one server-side page of the recommendation feed.
pub async fn fetch_recommendations(page: usize, size: usize) -> Result<Vec<Listing>, String> {
    get_json(&format!("/Api/v3/get/recommendation?page={}&size={}", page, size)).await
}

/// Remove a product from the recommendation feed.
pub async fn remove_recommendation(product_id: i64) -> Result<(), String> {
    put_unit(&format!("/Api/v3/delete/recommend/{}", product_id)).await
}
