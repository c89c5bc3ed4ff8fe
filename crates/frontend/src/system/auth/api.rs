use contracts::system::auth::{OtpSendResponse, OtpVerifyResponse};

use crate::shared::api_utils::{post_empty, post_form};

/// Ask the backend to mail a one-time password to the admin account.
pub async fn send_otp() -> Result<OtpSendResponse, String> {
    post_empty("/Api/v1/otp_send").await
}

/// Verify the entered OTP. The endpoint expects a form-encoded body.
pub async fn verify_otp(email: &str, otp: &str) -> Result<OtpVerifyResponse, String> {
    let body = format!(
        "email={}&otp={}",
        urlencoding::encode(email),
        urlencoding::encode(otp)
    );
    post_form("/Api/v1/otp_verify", body).await
}
