//! Application pages, one per tab.

pub mod home;
pub mod invite;
pub mod leaderboard;
pub mod staking;
pub mod tasks;

pub use home::HomePage;
pub use invite::InvitePage;
pub use leaderboard::LeaderboardPage;
pub use staking::StakingPage;
pub use tasks::TasksPage;
