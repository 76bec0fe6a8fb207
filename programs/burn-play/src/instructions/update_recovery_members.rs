use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

#[derive(Accounts)]
pub struct UpdateRecoveryMembers<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [EMERGENCY_RECOVERY],
        bump = recovery.bump,
    )]
    pub recovery: Account<'info, RecoveryBody>,
}

impl<'info> UpdateRecoveryMembers<'info> {
    pub fn update_recovery_members(&mut self, members: Vec<Pubkey>) -> Result<()> {
        require!(self.recovery.is_initialized, BurnPlayError::Uninitialized);

        let now = Clock::get()?.unix_timestamp;

        // Also drops any pending unlock request
        self.recovery.replace_members(&members)?;
        self.recovery.last_activity = now;
        self.game_config.last_authority_activity = now;

        msg!(
            "Recovery members replaced: {} members",
            self.recovery.members.count
        );
        Ok(())
    }
}
