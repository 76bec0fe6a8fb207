use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

#[derive(Accounts)]
pub struct ResetPeriod<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,
}

impl<'info> ResetPeriod<'info> {
    pub fn period_reset(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // Player counters are not touched here; they reset on next use
        self.game_config.advance_period(now)?;
        self.game_config.last_authority_activity = now;

        msg!("Period advanced to {}", self.game_config.current_period);
        emit!(PeriodAdvanced {
            period: self.game_config.current_period,
            timestamp: now,
        });

        Ok(())
    }
}
