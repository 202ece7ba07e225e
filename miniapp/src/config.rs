//! Application constants.
//!
//! Every gameplay threshold, interval and reward bound lives here so the
//! pages never re-derive their own copies.

/// Backend REST API base URL.
pub const API_BASE: &str = "http://127.0.0.1:3001";

/// Block-explorer API base URL for balance lookups.
pub const EXPLORER_BASE: &str = "https://api.ton.sh";

/// Staking contract receiving stake transfers.
pub const STAKING_CONTRACT_ADDRESS: &str =
    "EQDrjaLahLkMB-hMCmkzOyBuHJ139ZUYmPHu6RRBKnbdLIYI";

// Shake detection
/// Minimum accelerometer movement (|dx+dy+dz|) for a shake to register.
pub const SHAKE_THRESHOLD: f64 = 15.0;
/// Two accepted shakes must be at least this far apart.
pub const SHAKE_DEBOUNCE_MS: u64 = 100;
/// Card rotation added per accepted shake, in degrees.
pub const ROTATION_STEP_DEG: u32 = 45;

// Per-shake rewards
pub const SHAKE_REWARD_MIN: u64 = 1;
pub const SHAKE_REWARD_MAX: u64 = 10;
/// Experience gained per accepted shake, capped at [`EXPERIENCE_MAX`].
pub const SHAKE_EXPERIENCE: u32 = 5;
pub const EXPERIENCE_MAX: u32 = 100;

// Mined rewards
/// One-shot mining timer (3 minutes).
pub const MINING_INTERVAL_MS: u32 = 180_000;
/// Inclusive draw bounds for a mined reward.
pub const MINED_REWARD_MIN: u64 = 500;
pub const MINED_REWARD_MAX: u64 = 1_499;

// Staking
pub const BASE_APR: f64 = 12.5;
pub const STAKE_LOCK_DAYS: [u32; 3] = [7, 30, 90];
pub const MIN_STAKE_TON: f64 = 50.0;
/// Transfer validity window from submission, in seconds.
pub const TX_VALIDITY_SECS: u64 = 600;
pub const NANOTON_PER_TON: f64 = 1_000_000_000.0;
/// How long the staking success overlay stays up.
pub const SUCCESS_OVERLAY_MS: u32 = 2_000;
/// Post-stake balance polling: the explorer lags the transfer, so the
/// refetch retries until the balance reflects it.
pub const BALANCE_POLL_INTERVAL_MS: u32 = 5_000;
pub const BALANCE_POLL_ATTEMPTS: u32 = 12;
/// Float slack when comparing TON amounts (one nanoTON).
pub const BALANCE_TOLERANCE_TON: f64 = 0.000_000_001;

// Toasts
pub const TOAST_DEFAULT_DURATION_MS: u32 = 5_000;

// Invite
pub const INVITE_LINK: &str = "https://shaketon.app/invite/TYFE54DVCV";
pub const REFERRAL_REWARD_COINS: u64 = 50;
/// How long the "Copied!" state sticks before reverting.
pub const COPY_RESET_MS: u32 = 2_000;

// Leaderboard
pub const LEADERBOARD_TOP_N: usize = 10;
