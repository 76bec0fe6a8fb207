use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Burn To Play Instruction
//
// Moves the burned amount into the burn vault and grants access:
// - WeeklyQuota: any positive amount consumes one play of the current period
// - MonthlyPass: the amount must equal the pass price; buys or renews a pass

#[derive(Accounts)]
pub struct BurnToPlay<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + PlayerAccess::INIT_SPACE,
        seeds = [PLAYER_ACCESS, player.key().as_ref()],
        bump,
    )]
    pub player_access: Account<'info, PlayerAccess>,

    #[account(
        mut,
        seeds = [VAULT, BURN_VAULT],
        bump = burn_vault.bump,
    )]
    pub burn_vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = player_token_account.owner == player.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = player_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = burn_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> BurnToPlay<'info> {
    pub fn burn_to_play(&mut self, amount: u64, bumps: &BurnToPlayBumps) -> Result<()> {
        require!(amount > 0, BurnPlayError::InvalidParameter);
        require!(
            self.player_token_account.amount >= amount,
            BurnPlayError::InsufficientBalance
        );

        let now = Clock::get()?.unix_timestamp;
        let config = &self.game_config;

        if self.player_access.player == Pubkey::default() {
            self.player_access.set_inner(PlayerAccess {
                player: self.player.key(),
                period_id: config.current_period,
                plays_used: 0,
                total_plays: 0,
                pass_active: false,
                passes_purchased: 0,
                pass_expires_at: 0,
                total_burned: 0,
                bump: bumps.player_access,
            });
        }

        match config.access_policy {
            AccessPolicy::WeeklyQuota => {
                self.player_access
                    .consume_play(config.weekly_quota, config.current_period)?;
            }
            AccessPolicy::MonthlyPass => {
                require!(amount == config.pass_price, BurnPlayError::InvalidParameter);
                self.player_access.purchase_pass(now)?;
            }
        }

        self.player_access.record_burn(amount)?;
        self.game_config.record_burn(amount)?;
        self.burn_vault.record_deposit(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.player.to_account_info(),
        )?;

        msg!(
            "Burned {} to play, plays used {}, total burned {}",
            amount,
            self.player_access.plays_used,
            self.game_config.total_burned
        );
        emit!(PlayPurchased {
            player: self.player.key(),
            amount,
            period: self.game_config.current_period,
            plays_used: self.player_access.plays_used,
            pass_expires_at: self.player_access.pass_expires_at,
        });

        Ok(())
    }
}
