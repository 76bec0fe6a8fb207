use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [VAULT, STAKING_VAULT],
        bump = staking_vault.bump,
    )]
    pub staking_vault: Account<'info, Vault>,

    // Created on the first stake
    #[account(
        init_if_needed,
        payer = player,
        space = ANCHOR_DISCRIMINATOR + PlayerStake::INIT_SPACE,
        seeds = [PLAYER_STAKE, player.key().as_ref()],
        bump,
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
    pub system_program: Program<'info, System>,
}

impl<'info> StakeTokens<'info> {
    pub fn stake_tokens(&mut self, amount: u64, bumps: &StakeTokensBumps) -> Result<()> {
        require!(amount > 0, BurnPlayError::InvalidParameter);
        require!(
            self.player_token_account.amount >= amount,
            BurnPlayError::InsufficientBalance
        );

        let now = Clock::get()?.unix_timestamp;

        // The first reward window opens with the first stake
        if self.player_stake.player == Pubkey::default() {
            self.player_stake.set_inner(PlayerStake {
                player: self.player.key(),
                total_staked: 0,
                total_rewards_claimed: 0,
                last_reward_claim: now,
                slashed_amount: 0,
                is_slashed: false,
                bump: bumps.player_stake,
            });
        }

        self.player_stake.record_stake(amount)?;
        self.staking_vault.record_deposit(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.player.to_account_info(),
        )?;

        msg!("Staked {}, total {}", amount, self.player_stake.total_staked);
        emit!(StakeDeposited {
            player: self.player.key(),
            amount,
            total_staked: self.player_stake.total_staked,
        });

        Ok(())
    }
}
