use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Slash Stake Instruction
//
// Direct-mode penalty. The authority moves up to half of a player's stake
// from the staking vault into the reward vault. Dao deployments slash
// through a SlashStake proposal instead.

#[derive(Accounts)]
pub struct SlashStake<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,

    /// CHECK: only used to derive the stake record
    pub player: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [PLAYER_STAKE, player.key().as_ref()],
        bump = player_stake.bump,
    )]
    pub player_stake: Account<'info, PlayerStake>,

    #[account(
        mut,
        seeds = [VAULT, STAKING_VAULT],
        bump = staking_vault.bump,
    )]
    pub staking_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the staking vault
    #[account(
        seeds = [VAULT_AUTHORITY, STAKING_VAULT],
        bump = staking_vault.authority_bump,
    )]
    pub staking_vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = staking_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub staking_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT, REWARD_VAULT],
        bump = reward_vault.bump,
    )]
    pub reward_vault: Account<'info, Vault>,

    #[account(
        mut,
        address = reward_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub reward_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> SlashStake<'info> {
    pub fn slash_stake(&mut self, amount: u64) -> Result<()> {
        self.game_config.assert_mode(GovernanceMode::Direct)?;

        let now = Clock::get()?.unix_timestamp;
        self.player_stake.record_slash(amount)?;
        self.staking_vault.record_release(amount, now)?;
        self.reward_vault.record_deposit(amount)?;
        self.game_config.last_authority_activity = now;

        let seeds = self.staking_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.staking_token_account.to_account_info(),
            &self.reward_token_account.to_account_info(),
            &self.staking_vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Slashed {} from {}", amount, self.player.key());
        emit!(StakeSlashed {
            player: self.player.key(),
            amount,
            total_staked: self.player_stake.total_staked,
        });

        Ok(())
    }
}
