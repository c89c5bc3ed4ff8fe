use contracts::domain::shops::Shop;
use serde::Deserialize;

use crate::shared::api_utils::{get_json, put_json};

#[derive(Debug, Clone, Deserialize)]
pub struct ShopStatusResponse {
    pub status: String,
    pub message: String,
}

/// Fetch shops for one category; "all" returns every shop.
pub async fn fetch_shops(category: &str) -> Result<Vec<Shop>, String> {
    get_json(&format!("/Api/v3/get/shops/{}", category)).await
}

/// Open or close a shop.
pub async fn update_shop_status(uid: &str, is_open: bool) -> Result<ShopStatusResponse, String> {
    put_json(&format!("/Api/v1/update/shopStatus/{}/{}", uid, is_open)).await
}
