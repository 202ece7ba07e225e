use serde::{Deserialize, Serialize};

/// Reward claim request: `POST /api/game/claim-rewards`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimRewardsRequest {
    pub level: u32,
    pub reward: u64,
    pub init_data: String,
}

/// Claim confirmation from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimRewardsResponse {
    pub success: bool,
    pub message: String,
    /// Server clock at settlement, unix milliseconds.
    pub settled_at_ms: i64,
}

/// One row of the leaderboard: `GET /api/game/leaderboard`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub coins: u64,
}

/// Leaderboard response (top players, best first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}
