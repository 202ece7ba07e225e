use serde::{Deserialize, Serialize};

/// User identity as reported by the Telegram host client.
///
/// This mirrors `initDataUnsafe.user` and is sent alongside the signed
/// init-data so the backend can cross-check both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// Verification request: `POST /api/auth/user`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyUserRequest {
    /// Signed payload from the Telegram host identifying this session.
    pub init_data: String,
    pub user: TelegramUser,
}

/// User profile returned on successful verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub telegram_user_id: i64,
    pub username: String,
}

/// Verification response (success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyUserResponse {
    pub user: UserProfile,
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
