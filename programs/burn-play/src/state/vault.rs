use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum VaultKind {
    // Player stakes
    Staking,
    // Funds weekly staking rewards
    Reward,
    // Receives every burn_to_play payment
    Burn,
    // Funds prize payouts
    Prize,
    // Reserve the backup team or recovery body can draw on
    Recovery,
}

impl VaultKind {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            VaultKind::Staking => STAKING_VAULT,
            VaultKind::Reward => REWARD_VAULT,
            VaultKind::Burn => BURN_VAULT,
            VaultKind::Prize => PRIZE_VAULT,
            VaultKind::Recovery => RECOVERY_VAULT,
        }
    }

    // Only these vaults carry an emergency threshold
    pub fn supports_emergency_unlock(&self) -> bool {
        matches!(self, VaultKind::Burn | VaultKind::Recovery)
    }

    // Vaults whose funds may leave through a DAO release proposal.
    // Staking funds leave only through withdraw_stake, prize funds only as prizes.
    pub fn governance_releasable(&self) -> bool {
        matches!(self, VaultKind::Burn | VaultKind::Reward | VaultKind::Recovery)
    }

    // Vaults anyone may top up through fund_vault
    pub fn publicly_fundable(&self) -> bool {
        matches!(self, VaultKind::Reward | VaultKind::Recovery)
    }
}

// Accounting record for one program-custodied token account
// Seeds: ["vault", kind]
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub kind: VaultKind,

    // ATA of the vault authority PDA for the game mint
    pub token_account: Pubkey,

    // Both counters only grow; locked = deposited - distributed
    pub total_deposited: u64,
    pub total_distributed: u64,

    // Locked balance at which an emergency unlock becomes possible
    pub emergency_threshold: Option<u64>,

    // Terminal: set by an emergency unlock
    pub unlocked: bool,

    pub is_initialized: bool,
    pub last_release: i64,
    pub bump: u8,

    // Bump of ["vault_authority", kind], used to sign releases
    pub authority_bump: u8,
}

impl Vault {
    pub fn total_locked(&self) -> u64 {
        self.total_deposited.saturating_sub(self.total_distributed)
    }

    pub fn threshold_met(&self) -> bool {
        matches!(self.emergency_threshold, Some(threshold) if self.total_locked() >= threshold)
    }

    // Backup withdrawals open when the balance has drained under the threshold
    pub fn below_backup_threshold(&self) -> bool {
        matches!(self.emergency_threshold, Some(threshold) if self.total_locked() < threshold)
    }

    pub fn authority_seeds(&self) -> [&[u8]; 3] {
        [
            VAULT_AUTHORITY,
            self.kind.seed(),
            std::slice::from_ref(&self.authority_bump),
        ]
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        require!(self.is_initialized, BurnPlayError::Uninitialized);
        require!(!self.unlocked, BurnPlayError::VaultUnlocked);
        require!(amount > 0, BurnPlayError::InvalidParameter);

        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_release(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(self.is_initialized, BurnPlayError::Uninitialized);
        require!(amount > 0, BurnPlayError::InvalidParameter);
        require!(
            amount <= self.total_locked(),
            BurnPlayError::InsufficientBalance
        );

        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.last_release = now;
        Ok(())
    }

    // Releases the whole locked balance and closes the vault to deposits.
    // Returns the amount to transfer out.
    pub fn record_emergency_unlock(&mut self, now: i64) -> Result<u64> {
        require!(self.is_initialized, BurnPlayError::Uninitialized);
        require!(!self.unlocked, BurnPlayError::VaultUnlocked);
        require!(self.threshold_met(), BurnPlayError::ThresholdNotMet);

        let amount = self.total_locked();
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.unlocked = true;
        self.last_release = now;
        Ok(amount)
    }
}
