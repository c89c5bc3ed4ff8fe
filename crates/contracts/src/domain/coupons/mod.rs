pub mod aggregate;

pub use aggregate::{Coupon, CreateCouponRequest};
