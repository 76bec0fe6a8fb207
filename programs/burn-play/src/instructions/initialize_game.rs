use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{state::*, errors::*, constants::*, events::*};

// Initialize Game Instruction
//
// Creates the single game configuration. The signer becomes the authority.
// play_parameter is the weekly quota or the pass price, depending on the policy.
// A repeated call fails and leaves every field untouched.

#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + GameConfig::INIT_SPACE,
        seeds = [GAME_CONFIG],
        bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    // Mint of the token burned, staked and paid out by the game
    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGame<'info> {
    pub fn initialize_game(
        &mut self,
        access_policy: AccessPolicy,
        play_parameter: u64,
        governance_mode: GovernanceMode,
        bumps: &InitializeGameBumps,
    ) -> Result<()> {
        require!(
            !self.game_config.is_initialized,
            BurnPlayError::AlreadyInitialized
        );

        let now = Clock::get()?.unix_timestamp;

        let mut config = GameConfig {
            authority: self.authority.key(),
            backup_team: [Pubkey::default(); BACKUP_TEAM_SIZE],
            token_mint: self.token_mint.key(),
            access_policy,
            governance_mode,
            weekly_quota: 0,
            pass_price: 0,
            total_burned: 0,
            total_prizes_distributed: 0,
            current_period: 0,
            last_period_reset: now,
            last_authority_activity: now,
            emergency_mode: false,
            is_initialized: true,
            bump: bumps.game_config,
        };
        config.set_play_parameter(play_parameter)?;
        self.game_config.set_inner(config);

        msg!(
            "Game initialized: policy {:?}, parameter {}, mode {:?}",
            access_policy,
            play_parameter,
            governance_mode
        );
        emit!(GameInitialized {
            authority: self.authority.key(),
            token_mint: self.token_mint.key(),
            access_policy,
            governance_mode,
        });

        Ok(())
    }
}
