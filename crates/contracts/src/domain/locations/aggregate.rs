use serde::{Deserialize, Serialize};

/// Delivery address record (`GET /Api/location/idd/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub alternate_number: String,
    pub state: String,
    pub city: String,
    #[serde(rename = "pinCode")]
    pub pin_code: String,
    pub street: String,
    #[serde(default)]
    pub landmark: String,
    pub verify: bool,
    pub latitude: f64,
    pub longitude: f64,
}
