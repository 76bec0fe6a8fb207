use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Backup Withdraw Instruction
//
// Direct-mode escape hatch. A backup team member may draw up to a quarter of
// the recovery vault once its balance drops under the threshold or the
// authority went silent.

#[derive(Accounts)]
pub struct BackupWithdraw<'info> {
    pub member: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [VAULT, RECOVERY_VAULT],
        bump = recovery_vault.bump,
    )]
    pub recovery_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the recovery vault
    #[account(
        seeds = [VAULT_AUTHORITY, RECOVERY_VAULT],
        bump = recovery_vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = recovery_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = member_token_account.owner == member.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = member_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub member_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> BackupWithdraw<'info> {
    pub fn backup_withdraw(&mut self, amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Direct mode only; Dao deployments use the recovery body
        self.game_config.assert_mode(GovernanceMode::Direct)?;

        // 2. Backup team member
        require!(
            self.game_config.is_backup_member(&self.member.key()),
            BurnPlayError::Unauthorized
        );

        // 3. Trigger: low balance or authority inactive
        let now = Clock::get()?.unix_timestamp;
        let authority_inactive = self.game_config.authority_inactive(now);
        require!(
            self.recovery_vault.below_backup_threshold() || authority_inactive,
            BurnPlayError::ThresholdNotMet
        );

        // 4. Cap
        let cap = self.recovery_vault.total_locked() / BACKUP_WITHDRAW_DIVISOR;
        require!(amount <= cap, BurnPlayError::InsufficientBalance);

        self.recovery_vault.record_release(amount, now)?;
        self.game_config.emergency_mode = true;

        let seeds = self.recovery_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.member_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Backup withdrawal of {} by {}", amount, self.member.key());
        emit!(BackupWithdrawal {
            member: self.member.key(),
            amount,
            authority_inactive,
        });

        Ok(())
    }
}
