use anchor_lang::prelude::*;
use crate::state::{AccessPolicy, GovernanceMode, VaultKind};

#[event]
pub struct GameInitialized {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub access_policy: AccessPolicy,
    pub governance_mode: GovernanceMode,
}

#[event]
pub struct AuthorityUpdated {
    pub previous: Pubkey,
    pub new_authority: Pubkey,
}

#[event]
pub struct PeriodAdvanced {
    pub period: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultFunded {
    pub vault: VaultKind,
    pub funder: Pubkey,
    pub amount: u64,
    pub total_locked: u64,
}

#[event]
pub struct StakeDeposited {
    pub player: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub player: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct StakeSlashed {
    pub player: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct RewardsClaimed {
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PlayPurchased {
    pub player: Pubkey,
    pub amount: u64,
    pub period: u64,
    pub plays_used: u32,
    pub pass_expires_at: i64,
}

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub proposer: Pubkey,
}

#[event]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub in_favor: bool,
    pub votes_for: u8,
    pub votes_against: u8,
}

#[event]
pub struct ProposalExecuted {
    pub proposal_id: u64,
    pub executor: Pubkey,
}

#[event]
pub struct EmergencyUnlockRequested {
    pub requester: Pubkey,
    pub vault: VaultKind,
    pub recipient: Pubkey,
    pub round: u64,
}

#[event]
pub struct EmergencyUnlocked {
    pub vault: VaultKind,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BackupWithdrawal {
    pub member: Pubkey,
    pub amount: u64,
    pub authority_inactive: bool,
}

#[event]
pub struct PrizeDistributed {
    pub player: Pubkey,
    pub amount: u64,
    pub total_prizes_earned: u64,
}
