use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

#[derive(Accounts)]
pub struct InitializeDao<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + DaoGovernance::INIT_SPACE,
        seeds = [DAO_GOVERNANCE],
        bump,
    )]
    pub dao: Account<'info, DaoGovernance>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeDao<'info> {
    pub fn initialize_dao(&mut self, members: Vec<Pubkey>, bumps: &InitializeDaoBumps) -> Result<()> {
        self.game_config.assert_mode(GovernanceMode::Dao)?;
        require!(!self.dao.is_initialized, BurnPlayError::AlreadyInitialized);

        let now = Clock::get()?.unix_timestamp;

        let mut member_set = MemberSet::default();
        member_set.set_members(&members)?;

        self.dao.set_inner(DaoGovernance {
            members: member_set,
            proposal_count: 0,
            membership_epoch: 0,
            last_activity: now,
            is_initialized: true,
            bump: bumps.dao,
        });
        self.game_config.last_authority_activity = now;

        msg!("DAO initialized with {} members", members.len());
        Ok(())
    }
}
