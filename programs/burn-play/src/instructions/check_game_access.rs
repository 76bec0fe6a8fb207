use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Read-only access check. A player without an access record passes None;
// under the quota policy such a player still has the full weekly quota.

#[derive(Accounts)]
pub struct CheckGameAccess<'info> {
    pub player: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        seeds = [PLAYER_ACCESS, player.key().as_ref()],
        bump,
    )]
    pub player_access: Option<Account<'info, PlayerAccess>>,
}

impl<'info> CheckGameAccess<'info> {
    pub fn check_game_access(&self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let granted = match &self.player_access {
            Some(access) => access.has_access(&self.game_config, now),
            None => {
                self.game_config.access_policy == AccessPolicy::WeeklyQuota
                    && self.game_config.weekly_quota > 0
            }
        };
        require!(granted, BurnPlayError::AccessDenied);

        msg!("Access granted to {}", self.player.key());
        Ok(())
    }
}
