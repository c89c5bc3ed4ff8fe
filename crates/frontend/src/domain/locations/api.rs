use contracts::domain::locations::UserLocation;

use crate::shared::api_utils::get_json;

/// Look up one delivery address by its numeric id.
pub async fn fetch_location(location_id: i64) -> Result<UserLocation, String> {
    get_json(&format!("/Api/location/idd/{}", location_id)).await
}
