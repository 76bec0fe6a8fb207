use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Emergency Unlock Instruction
//
// Releases the whole locked balance of the requested vault once a majority of
// the recovery body approved and the vault's threshold holds.
// The vault stays unlocked for good and the game enters emergency mode.

#[derive(Accounts)]
pub struct EmergencyUnlock<'info> {
    pub member: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [EMERGENCY_RECOVERY],
        bump = recovery.bump,
    )]
    pub recovery: Account<'info, RecoveryBody>,

    #[account(
        mut,
        seeds = [VAULT, recovery.request_vault.seed()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the unlocked vault
    #[account(
        seeds = [VAULT_AUTHORITY, recovery.request_vault.seed()],
        bump = vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = recovery.request_recipient @ BurnPlayError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> EmergencyUnlock<'info> {
    pub fn emergency_unlock(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Recovery member
        self.recovery.members.assert_member(&self.member.key())?;

        // 2. Open request with majority approval
        self.recovery.assert_ready()?;

        // 3. Threshold predicate, checked by the vault itself
        let now = Clock::get()?.unix_timestamp;
        let amount = self.vault.record_emergency_unlock(now)?;

        self.recovery.emergency_triggered = true;
        self.recovery.last_activity = now;
        self.recovery.clear_request();
        self.game_config.emergency_mode = true;

        let seeds = self.vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.recipient_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Emergency unlock of {:?} vault released {}", self.vault.kind, amount);
        emit!(EmergencyUnlocked {
            vault: self.vault.kind,
            recipient: self.recipient_token_account.key(),
            amount,
        });

        Ok(())
    }
}
