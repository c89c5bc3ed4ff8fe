use serde::{Deserialize, Serialize};

/// Product listing as served by the catalogue endpoints
/// (`GET /Api/v3/get/posts/data/{category}` and the recommendation feed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub uid: String,
    pub category: String,
    pub sub_category: String,
    pub item_name: String,
    pub units: String,
    /// List price before discount.
    pub actual_price: f64,
    /// Discount descriptor such as "10%"; "0%" means none.
    pub discount: String,
    pub final_price: f64,
    pub shop_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Image URLs, first one is the thumbnail.
    #[serde(default)]
    pub urls: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Listing {
    pub fn has_discount(&self) -> bool {
        self.discount != "0%"
    }
}
