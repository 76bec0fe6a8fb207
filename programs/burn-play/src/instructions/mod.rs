pub mod initialize_game;
pub mod update_governance;
pub mod period_reset;
pub mod initialize_vault;
pub mod fund_vault;
pub mod deposit_to_prize_vault;
pub mod stake_tokens;
pub mod withdraw_stake;
pub mod claim_staking_rewards;
pub mod burn_to_play;
pub mod use_quota_play;
pub mod check_game_access;
pub mod initialize_dao;
pub mod update_dao_members;
pub mod create_proposal;
pub mod vote_on_proposal;
pub mod execute_proposal;
pub mod execute_release_proposal;
pub mod slash_stake;
pub mod execute_slash_proposal;
pub mod initialize_emergency_recovery;
pub mod update_recovery_members;
pub mod request_emergency_unlock;
pub mod approve_emergency_unlock;
pub mod emergency_unlock;
pub mod backup_withdraw;
pub mod update_player_score;
pub mod distribute_prize;

pub use initialize_game::*;
pub use update_governance::*;
pub use period_reset::*;
pub use initialize_vault::*;
pub use fund_vault::*;
pub use deposit_to_prize_vault::*;
pub use stake_tokens::*;
pub use withdraw_stake::*;
pub use claim_staking_rewards::*;
pub use burn_to_play::*;
pub use use_quota_play::*;
pub use check_game_access::*;
pub use initialize_dao::*;
pub use update_dao_members::*;
pub use create_proposal::*;
pub use vote_on_proposal::*;
pub use execute_proposal::*;
pub use execute_release_proposal::*;
pub use slash_stake::*;
pub use execute_slash_proposal::*;
pub use initialize_emergency_recovery::*;
pub use update_recovery_members::*;
pub use request_emergency_unlock::*;
pub use approve_emergency_unlock::*;
pub use emergency_unlock::*;
pub use backup_withdraw::*;
pub use update_player_score::*;
pub use distribute_prize::*;
