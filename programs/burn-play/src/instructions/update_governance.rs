use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Direct-mode authority changes. Shared by update_governance and update_backup_team.
// In Dao mode the same changes only happen through executed proposals.

#[derive(Accounts)]
pub struct UpdateGovernance<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,
}

impl<'info> UpdateGovernance<'info> {
    pub fn update_governance(&mut self, new_authority: Pubkey) -> Result<()> {
        self.game_config.assert_mode(GovernanceMode::Direct)?;
        require!(
            new_authority != Pubkey::default(),
            BurnPlayError::InvalidParameter
        );

        let previous = self.game_config.authority;
        self.game_config.authority = new_authority;
        self.game_config.last_authority_activity = Clock::get()?.unix_timestamp;

        msg!("Authority rotated from {} to {}", previous, new_authority);
        emit!(AuthorityUpdated {
            previous,
            new_authority,
        });

        Ok(())
    }

    pub fn update_backup_team(&mut self, new_team: [Pubkey; BACKUP_TEAM_SIZE]) -> Result<()> {
        self.game_config.assert_mode(GovernanceMode::Direct)?;
        validate_backup_team(&new_team)?;

        self.game_config.backup_team = new_team;
        self.game_config.last_authority_activity = Clock::get()?.unix_timestamp;

        msg!("Backup team updated");
        Ok(())
    }
}
