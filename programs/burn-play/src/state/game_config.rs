use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// How players buy their way into a game
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum AccessPolicy {
    // Any positive burn consumes one unit of a per-period quota
    WeeklyQuota,
    // Burning exactly the pass price buys a 30-day pass
    MonthlyPass,
}

// Who may rewrite the authority fields
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum GovernanceMode {
    // Authority rotates itself; backup team is the escape hatch
    Direct,
    // Authority changes only through executed DAO proposals;
    // emergency recovery body is the escape hatch
    Dao,
}

// Global game configuration
// Single instance at ["game_config"]
#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    pub authority: Pubkey,

    // Rotating backup signers used by backup_withdraw in Direct mode
    pub backup_team: [Pubkey; BACKUP_TEAM_SIZE],

    pub token_mint: Pubkey,

    pub access_policy: AccessPolicy,
    pub governance_mode: GovernanceMode,

    // Plays per period under WeeklyQuota
    pub weekly_quota: u32,

    // Burn price of a pass under MonthlyPass
    pub pass_price: u64,

    pub total_burned: u64,
    pub total_prizes_distributed: u64,

    // Bumped by period_reset; player counters compare against it lazily
    pub current_period: u64,
    pub last_period_reset: i64,

    pub last_authority_activity: i64,
    pub emergency_mode: bool,
    pub is_initialized: bool,
    pub bump: u8,
}

impl GameConfig {
    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, BurnPlayError::Unauthorized);
        Ok(())
    }

    pub fn assert_mode(&self, mode: GovernanceMode) -> Result<()> {
        require!(self.governance_mode == mode, BurnPlayError::WrongGovernanceMode);
        Ok(())
    }

    pub fn assert_policy(&self, policy: AccessPolicy) -> Result<()> {
        require!(self.access_policy == policy, BurnPlayError::WrongAccessPolicy);
        Ok(())
    }

    pub fn is_backup_member(&self, key: &Pubkey) -> bool {
        *key != Pubkey::default() && self.backup_team.contains(key)
    }

    pub fn period_seconds(&self) -> i64 {
        match self.access_policy {
            AccessPolicy::WeeklyQuota => WEEKLY_SECONDS,
            AccessPolicy::MonthlyPass => MONTHLY_SECONDS,
        }
    }

    // Validates and stores the policy parameter (quota or price)
    pub fn set_play_parameter(&mut self, value: u64) -> Result<()> {
        require!(value > 0, BurnPlayError::InvalidParameter);
        match self.access_policy {
            AccessPolicy::WeeklyQuota => {
                self.weekly_quota =
                    u32::try_from(value).map_err(|_| BurnPlayError::InvalidParameter)?;
            }
            AccessPolicy::MonthlyPass => self.pass_price = value,
        }
        Ok(())
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_prize(&mut self, amount: u64) -> Result<()> {
        self.total_prizes_distributed = self
            .total_prizes_distributed
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn authority_inactive(&self, now: i64) -> bool {
        now.saturating_sub(self.last_authority_activity) >= AUTHORITY_INACTIVITY_SECONDS
    }

    // Starts a new accounting period. Player quota counters reset lazily.
    pub fn advance_period(&mut self, now: i64) -> Result<()> {
        let elapsed = now
            .checked_sub(self.last_period_reset)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        require!(
            elapsed >= self.period_seconds(),
            BurnPlayError::PeriodResetNotReady
        );

        self.current_period = self
            .current_period
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.last_period_reset = now;
        Ok(())
    }
}

pub fn validate_backup_team(team: &[Pubkey; BACKUP_TEAM_SIZE]) -> Result<()> {
    for (i, member) in team.iter().enumerate() {
        require!(*member != Pubkey::default(), BurnPlayError::InvalidParameter);
        require!(
            !team[..i].contains(member),
            BurnPlayError::InvalidParameter
        );
    }
    Ok(())
}
