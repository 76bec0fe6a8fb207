use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Anyone may top up the reward or recovery vault.
// The other vaults are fed by their own instructions.

#[derive(Accounts)]
#[instruction(kind: VaultKind)]
pub struct FundVault<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [VAULT, kind.seed()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = funder_token_account.owner == funder.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = funder_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FundVault<'info> {
    pub fn fund_vault(&mut self, kind: VaultKind, amount: u64) -> Result<()> {
        require!(kind.publicly_fundable(), BurnPlayError::InvalidParameter);

        self.vault.record_deposit(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.funder_token_account.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.funder.to_account_info(),
        )?;

        msg!("Funded {:?} vault with {}", kind, amount);
        emit!(VaultFunded {
            vault: kind,
            funder: self.funder.key(),
            amount,
            total_locked: self.vault.total_locked(),
        });

        Ok(())
    }
}
