use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Replaces the whole DAO membership. Pending proposals become stale.

#[derive(Accounts)]
pub struct UpdateDaoMembers<'info> {
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
        seeds = [DAO_GOVERNANCE],
        bump = dao.bump,
    )]
    pub dao: Account<'info, DaoGovernance>,
}

impl<'info> UpdateDaoMembers<'info> {
    pub fn update_dao_members(&mut self, members: Vec<Pubkey>) -> Result<()> {
        require!(self.dao.is_initialized, BurnPlayError::Uninitialized);

        let now = Clock::get()?.unix_timestamp;
        self.dao.replace_members(&members)?;
        self.dao.last_activity = now;
        self.game_config.last_authority_activity = now;

        msg!(
            "DAO members replaced: {} members, epoch {}",
            self.dao.members.count,
            self.dao.membership_epoch
        );
        Ok(())
    }
}
