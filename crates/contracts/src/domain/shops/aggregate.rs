use serde::{Deserialize, Serialize};

/// Shop owner record (`GET /Api/v3/get/shops/{category}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub uid: String,
    /// Owner's name, distinct from the shop name.
    pub name: String,
    pub phone_number: String,
    pub shop_name: String,
    pub category: String,
    pub rating: f64,
    pub likes_count: i64,
    pub is_open: bool,
    pub verify: bool,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub image_url: String,
    pub state: String,
    pub city: String,
}
