use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

#[derive(Accounts)]
pub struct DepositToPrizeVault<'info> {
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
        seeds = [VAULT, PRIZE_VAULT],
        bump = prize_vault.bump,
    )]
    pub prize_vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = authority_token_account.owner == authority.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = authority_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = prize_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> DepositToPrizeVault<'info> {
    pub fn deposit_to_prize_vault(&mut self, amount: u64) -> Result<()> {
        self.prize_vault.record_deposit(amount)?;
        self.game_config.last_authority_activity = Clock::get()?.unix_timestamp;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.authority_token_account.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.authority.to_account_info(),
        )?;

        msg!("Prize vault deposit {}, locked {}", amount, self.prize_vault.total_locked());
        emit!(VaultFunded {
            vault: VaultKind::Prize,
            funder: self.authority.key(),
            amount,
            total_locked: self.prize_vault.total_locked(),
        });

        Ok(())
    }
}
