use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{state::*, errors::*, constants::*};

// Initialize Vault Instruction
//
// Creates the accounting record for one vault kind, its signing PDA and the
// PDA's associated token account for the game mint.
// Emergency thresholds are only accepted for the burn and recovery vaults.

#[derive(Accounts)]
#[instruction(kind: VaultKind)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
        has_one = token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub game_config: Account<'info, GameConfig>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Vault::INIT_SPACE,
        seeds = [VAULT, kind.seed()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: PDA used only as the token account authority
    #[account(
        seeds = [VAULT_AUTHORITY, kind.seed()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVault<'info> {
    pub fn initialize_vault(
        &mut self,
        kind: VaultKind,
        emergency_threshold: Option<u64>,
        bumps: &InitializeVaultBumps,
    ) -> Result<()> {
        require!(
            !self.vault.is_initialized,
            BurnPlayError::AlreadyInitialized
        );

        if let Some(threshold) = emergency_threshold {
            require!(
                kind.supports_emergency_unlock() && threshold > 0,
                BurnPlayError::InvalidParameter
            );
        }

        self.vault.set_inner(Vault {
            kind,
            token_account: self.vault_token_account.key(),
            total_deposited: 0,
            total_distributed: 0,
            emergency_threshold,
            unlocked: false,
            is_initialized: true,
            last_release: 0,
            bump: bumps.vault,
            authority_bump: bumps.vault_authority,
        });

        self.game_config.last_authority_activity = Clock::get()?.unix_timestamp;

        msg!("Vault {:?} initialized, threshold {:?}", kind, emergency_threshold);
        Ok(())
    }
}
