use contracts::domain::coupons::{Coupon, CreateCouponRequest};

use crate::shared::api_utils::{get_json, patch_json, post_json};

pub async fn fetch_coupons() -> Result<Vec<Coupon>, String> {
    get_json("/api/coupons").await
}

pub async fn create_coupon(request: &CreateCouponRequest) -> Result<Coupon, String> {
    post_json("/api/coupons", request).await
}

pub async fn deactivate_coupon(coupon_id: i64) -> Result<Coupon, String> {
    patch_json(&format!("/api/coupons/{}/deactivate", coupon_id)).await
}
