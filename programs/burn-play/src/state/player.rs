use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};
use super::game_config::{AccessPolicy, GameConfig};

// Stake position of a single player
// Seeds: ["player_stake", player]
#[account]
#[derive(InitSpace)]
pub struct PlayerStake {
    pub player: Pubkey,
    pub total_staked: u64,
    pub total_rewards_claimed: u64,
    // Start of the current reward window
    pub last_reward_claim: i64,
    // Total taken by governance penalties
    pub slashed_amount: u64,
    pub is_slashed: bool,
    pub bump: u8,
}

impl PlayerStake {
    pub fn record_stake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, BurnPlayError::InvalidParameter);
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, BurnPlayError::InvalidParameter);
        require!(
            amount <= self.total_staked,
            BurnPlayError::InsufficientBalance
        );
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn max_slash(&self) -> Result<u64> {
        let cap = (self.total_staked as u128)
            .checked_mul(MAX_SLASH_PERCENT as u128)
            .ok_or(BurnPlayError::ArithmeticOverflow)?
            / 100;
        u64::try_from(cap).map_err(|_| error!(BurnPlayError::ArithmeticOverflow))
    }

    // Moves part of the stake out of the player's position. A slashed
    // position stops earning rewards but can still be withdrawn.
    pub fn record_slash(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, BurnPlayError::InvalidParameter);
        require!(
            amount <= self.max_slash()?,
            BurnPlayError::SlashAmountTooHigh
        );
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.slashed_amount = self
            .slashed_amount
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.is_slashed = true;
        Ok(())
    }

    pub fn weekly_reward(&self) -> Result<u64> {
        let reward = (self.total_staked as u128)
            .checked_mul(WEEKLY_REWARD_BPS as u128)
            .ok_or(BurnPlayError::ArithmeticOverflow)?
            / BPS_DENOMINATOR as u128;
        u64::try_from(reward).map_err(|_| error!(BurnPlayError::ArithmeticOverflow))
    }

    // Closes the current reward window and returns the amount owed
    pub fn claim_reward(&mut self, now: i64) -> Result<u64> {
        require!(!self.is_slashed, BurnPlayError::StakeSlashed);
        let elapsed = now
            .checked_sub(self.last_reward_claim)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        require!(elapsed >= WEEKLY_SECONDS, BurnPlayError::RewardNotReady);

        let reward = self.weekly_reward()?;
        require!(reward > 0, BurnPlayError::InsufficientBalance);

        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(reward)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.last_reward_claim = now;
        Ok(reward)
    }
}

// Play access of a single player, used by both access policies
// Seeds: ["player_access", player]
#[account]
#[derive(InitSpace)]
pub struct PlayerAccess {
    pub player: Pubkey,

    // Quota fields. plays_used belongs to period_id only.
    pub period_id: u64,
    pub plays_used: u32,
    pub total_plays: u64,

    // Pass fields
    pub pass_active: bool,
    pub passes_purchased: u32,
    pub pass_expires_at: i64,

    pub total_burned: u64,
    pub bump: u8,
}

impl PlayerAccess {
    pub fn plays_used_in(&self, period: u64) -> u32 {
        if self.period_id == period {
            self.plays_used
        } else {
            0
        }
    }

    // Lazy period reset: a counter from an older period reads as zero
    pub fn sync_period(&mut self, period: u64) {
        if self.period_id != period {
            self.period_id = period;
            self.plays_used = 0;
        }
    }

    pub fn consume_play(&mut self, quota: u32, period: u64) -> Result<()> {
        self.sync_period(period);
        require!(self.plays_used < quota, BurnPlayError::QuotaExceeded);

        self.plays_used = self
            .plays_used
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.total_plays = self
            .total_plays
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn pass_is_live(&self, now: i64) -> bool {
        self.pass_active && now < self.pass_expires_at
    }

    // Buys one pass period. A live pass is extended from its expiry.
    pub fn purchase_pass(&mut self, now: i64) -> Result<()> {
        let start = if self.pass_is_live(now) {
            self.pass_expires_at
        } else {
            now
        };

        self.pass_expires_at = start
            .checked_add(PASS_DURATION_SECONDS)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.pass_active = true;
        self.passes_purchased = self
            .passes_purchased
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn has_access(&self, config: &GameConfig, now: i64) -> bool {
        match config.access_policy {
            AccessPolicy::WeeklyQuota => {
                self.plays_used_in(config.current_period) < config.weekly_quota
            }
            AccessPolicy::MonthlyPass => self.pass_is_live(now),
        }
    }

    // Prize standing: a live pass, or at least one play this period
    pub fn is_prize_eligible(&self, config: &GameConfig, now: i64) -> bool {
        match config.access_policy {
            AccessPolicy::WeeklyQuota => self.plays_used_in(config.current_period) > 0,
            AccessPolicy::MonthlyPass => self.pass_is_live(now),
        }
    }
}
