//! Backend REST client.
//!
//! Thin wrapper over `gloo_net` for the three routes the app consumes:
//! init-data verification, reward claims, and the leaderboard. Every failure
//! is classified into [`ApiError`] at this boundary; callers decide whether
//! to toast (auth, claims) or degrade silently (leaderboard).

use gloo_net::http::Request;
use shared::dto::auth::{TelegramUser, VerifyUserRequest, VerifyUserResponse};
use shared::dto::game::{
    ClaimRewardsRequest, ClaimRewardsResponse, LeaderboardEntry, LeaderboardResponse,
};
use thiserror::Error;

use crate::config::{API_BASE, LEADERBOARD_TOP_N};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Verify the Telegram init-data with the backend and obtain the user
/// profile. `POST /api/auth/user`
pub async fn verify_user(
    init_data: String,
    user: TelegramUser,
) -> Result<VerifyUserResponse, ApiError> {
    let request = VerifyUserRequest { init_data, user };
    post_json(&format!("{}/api/auth/user", API_BASE), &request).await
}

/// Report a claimed reward to the backend. `POST /api/game/claim-rewards`
pub async fn claim_rewards(
    level: u32,
    reward: u64,
    init_data: String,
) -> Result<ClaimRewardsResponse, ApiError> {
    let request = ClaimRewardsRequest {
        level,
        reward,
        init_data,
    };
    post_json(&format!("{}/api/game/claim-rewards", API_BASE), &request).await
}

/// Fetch the top of the leaderboard. `GET /api/game/leaderboard`
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, ApiError> {
    let response = Request::get(&format!("{}/api/game/leaderboard", API_BASE))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    let mut body: LeaderboardResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    body.entries.truncate(LEADERBOARD_TOP_N);
    Ok(body.entries)
}

async fn post_json<Req, Resp>(url: &str, request: &Req) -> Result<Resp, ApiError>
where
    Req: serde::Serialize,
    Resp: serde::de::DeserializeOwned,
{
    let response = Request::post(url)
        .json(request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Status { status, body }
}
