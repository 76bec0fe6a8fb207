use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Distribute Prize Instruction
//
// Pays a prize out of the prize vault to an eligible player.
// The authority co-signs and pays for the score record if it does not exist yet.

#[derive(Accounts)]
pub struct DistributePrize<'info> {
    pub player: Signer<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,

    // None for players that never played
    #[account(
        seeds = [PLAYER_ACCESS, player.key().as_ref()],
        bump,
    )]
    pub player_access: Option<Account<'info, PlayerAccess>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + PlayerScore::INIT_SPACE,
        seeds = [PLAYER_SCORE, player.key().as_ref()],
        bump,
    )]
    pub player_score: Account<'info, PlayerScore>,

    #[account(
        mut,
        seeds = [VAULT, PRIZE_VAULT],
        bump = prize_vault.bump,
    )]
    pub prize_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the prize vault
    #[account(
        seeds = [VAULT_AUTHORITY, PRIZE_VAULT],
        bump = prize_vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = prize_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = player_token_account.owner == player.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = player_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> DistributePrize<'info> {
    pub fn distribute_prize(&mut self, amount: u64, bumps: &DistributePrizeBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // 1. Eligibility mirrors the access gate
        let eligible = self
            .player_access
            .as_ref()
            .is_some_and(|access| access.is_prize_eligible(&self.game_config, now));
        require!(eligible, BurnPlayError::AccessDenied);

        // 2. Bounded by the prize vault's locked balance
        self.prize_vault.record_release(amount, now)?;

        if self.player_score.is_new() {
            self.player_score.open(self.player.key(), bumps.player_score);
        }
        self.player_score.record_prize(amount)?;
        self.game_config.record_prize(amount)?;
        self.game_config.last_authority_activity = now;

        let seeds = self.prize_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Prize of {} paid to {}", amount, self.player.key());
        emit!(PrizeDistributed {
            player: self.player.key(),
            amount,
            total_prizes_earned: self.player_score.total_prizes_earned,
        });

        Ok(())
    }
}
