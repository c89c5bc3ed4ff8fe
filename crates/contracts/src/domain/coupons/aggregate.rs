use serde::{Deserialize, Serialize};

/// Discount coupon (`GET /api/coupons`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    #[serde(rename = "couponCode")]
    pub coupon_code: String,
    #[serde(rename = "discountAmount")]
    pub discount_amount: f64,
    pub active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Body of `POST /api/coupons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCouponRequest {
    #[serde(rename = "couponCode")]
    pub coupon_code: String,
    #[serde(rename = "discountAmount")]
    pub discount_amount: f64,
}
