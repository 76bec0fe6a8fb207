use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Consumes one quota play without burning. The access record is created by
// the player's first burn_to_play.

#[derive(Accounts)]
pub struct UseQuotaPlay<'info> {
    pub player: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [PLAYER_ACCESS, player.key().as_ref()],
        bump = player_access.bump,
    )]
    pub player_access: Account<'info, PlayerAccess>,
}

impl<'info> UseQuotaPlay<'info> {
    pub fn use_quota_play(&mut self) -> Result<()> {
        let config = &self.game_config;
        config.assert_policy(AccessPolicy::WeeklyQuota)?;

        self.player_access
            .consume_play(config.weekly_quota, config.current_period)?;

        msg!(
            "Quota play used: {}/{}",
            self.player_access.plays_used,
            config.weekly_quota
        );
        emit!(PlayPurchased {
            player: self.player.key(),
            amount: 0,
            period: config.current_period,
            plays_used: self.player_access.plays_used,
            pass_expires_at: self.player_access.pass_expires_at,
        });

        Ok(())
    }
}
