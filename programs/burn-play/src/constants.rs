use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["game_config"]
#[constant]
pub const GAME_CONFIG: &[u8] = b"game_config";

// Seeds for vault state PDAs: ["vault", kind]
pub const VAULT: &[u8] = b"vault";

// Seeds for vault signing authorities: ["vault_authority", kind]
// The vault token account is the ATA of this authority for the game mint.
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";

// Vault kind seeds
pub const STAKING_VAULT: &[u8] = b"staking";
pub const REWARD_VAULT: &[u8] = b"reward";
pub const BURN_VAULT: &[u8] = b"burn";
pub const PRIZE_VAULT: &[u8] = b"prize";
pub const RECOVERY_VAULT: &[u8] = b"recovery";

// Per-player records: [seed, player]
pub const PLAYER_STAKE: &[u8] = b"player_stake";
pub const PLAYER_ACCESS: &[u8] = b"player_access";
pub const PLAYER_SCORE: &[u8] = b"player_score";

// Governance records
pub const DAO_GOVERNANCE: &[u8] = b"dao_governance";
pub const EMERGENCY_RECOVERY: &[u8] = b"emergency_recovery";

// Seeds for PDA derivation: ["proposal", proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Fixed member list capacity for the DAO and the recovery body
pub const MAX_MEMBERS: usize = 10;

// Size of the backup team kept on the game config
pub const BACKUP_TEAM_SIZE: usize = 3;

pub const MAX_DESCRIPTION_LEN: usize = 128;

pub const WEEKLY_SECONDS: i64 = 7 * 24 * 60 * 60;
pub const MONTHLY_SECONDS: i64 = 30 * 24 * 60 * 60;

// A purchased pass stays live for one month
pub const PASS_DURATION_SECONDS: i64 = MONTHLY_SECONDS;

// Backup team may step in once the authority has been silent this long
pub const AUTHORITY_INACTIVITY_SECONDS: i64 = 26 * WEEKLY_SECONDS;

// Backup withdrawals are capped at a quarter of the locked balance
pub const BACKUP_WITHDRAW_DIVISOR: u64 = 4;

// Weekly staking reward in basis points of the staked amount
pub const WEEKLY_REWARD_BPS: u64 = 20;
pub const BPS_DENOMINATOR: u64 = 10_000;

// A single slash takes at most this share of the staked amount
pub const MAX_SLASH_PERCENT: u64 = 50;

pub const BASELINE_RATING: u32 = 1000;
pub const MIN_RATING: i64 = 0;
