use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Withdraw Stake Instruction
//
// Returns staked tokens to the player. Withdrawals need the authority's
// co-signature; the staking vault releases through its PDA.

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    pub player: Signer<'info>,

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
        seeds = [VAULT, STAKING_VAULT],
        bump = staking_vault.bump,
    )]
    pub staking_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the staking vault
    #[account(
        seeds = [VAULT_AUTHORITY, STAKING_VAULT],
        bump = staking_vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [PLAYER_STAKE, player.key().as_ref()],
        bump = player_stake.bump,
    )]
    pub player_stake: Account<'info, PlayerStake>,

    #[account(
        mut,
        constraint = player_token_account.owner == player.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = player_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = staking_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawStake<'info> {
    pub fn withdraw_stake(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.player_stake.record_withdrawal(amount)?;
        self.staking_vault.record_release(amount, now)?;
        self.game_config.last_authority_activity = now;

        let seeds = self.staking_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Withdrew {}, remaining stake {}", amount, self.player_stake.total_staked);
        emit!(StakeWithdrawn {
            player: self.player.key(),
            amount,
            total_staked: self.player_stake.total_staked,
        });

        Ok(())
    }
}
