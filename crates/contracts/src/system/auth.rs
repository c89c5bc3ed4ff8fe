use serde::{Deserialize, Serialize};

/// How long an admin session stays valid.
pub const SESSION_DURATION_MS: i64 = 24 * 60 * 60 * 1000;

/// Admin session persisted in browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub email: String,
    /// Creation time, unix millis.
    pub timestamp: i64,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl AdminSession {
    pub fn new(email: &str, now_ms: i64) -> Self {
        Self {
            email: email.to_string(),
            timestamp: now_ms,
            expires_at: now_ms + SESSION_DURATION_MS,
        }
    }

    /// A session is valid while unexpired and bound to the expected admin.
    pub fn is_valid(&self, admin_email: &str, now_ms: i64) -> bool {
        self.expires_at > now_ms && self.email == admin_email
    }
}

/// Response of `POST /Api/v1/otp_send`.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpSendResponse {
    pub message: String,
}

/// Response of `POST /Api/v1/otp_verify`.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpVerifyResponse {
    pub message: String,
    pub status: String,
}

impl OtpVerifyResponse {
    /// The backend signals success either through `status` or, on older
    /// deployments, only in the message text.
    pub fn is_success(&self) -> bool {
        self.status == "success" || self.message.to_lowercase().contains("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "ops@example.com";

    #[test]
    fn session_expires_after_24_hours() {
        let session = AdminSession::new(ADMIN, 1_000);
        assert!(session.is_valid(ADMIN, 1_000 + SESSION_DURATION_MS - 1));
        assert!(!session.is_valid(ADMIN, 1_000 + SESSION_DURATION_MS));
    }

    #[test]
    fn session_is_bound_to_the_admin_email() {
        let session = AdminSession::new(ADMIN, 0);
        assert!(!session.is_valid("someone@else.com", 1));
    }

    #[test]
    fn verify_success_from_status_or_message() {
        let by_status = OtpVerifyResponse { message: "ok".into(), status: "success".into() };
        let by_message = OtpVerifyResponse { message: "OTP verified successfully".into(), status: "ok".into() };
        let failure = OtpVerifyResponse { message: "invalid otp".into(), status: "error".into() };

        assert!(by_status.is_success());
        assert!(by_message.is_success());
        assert!(!failure.is_success());
    }
}
