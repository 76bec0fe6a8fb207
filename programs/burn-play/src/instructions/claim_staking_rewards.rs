use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Weekly staking reward, paid out of the reward vault

#[derive(Accounts)]
pub struct ClaimStakingRewards<'info> {
    pub player: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [PLAYER_STAKE, player.key().as_ref()],
        bump = player_stake.bump,
    )]
    pub player_stake: Account<'info, PlayerStake>,

    #[account(
        mut,
        seeds = [VAULT, REWARD_VAULT],
        bump = reward_vault.bump,
    )]
    pub reward_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the reward vault
    #[account(
        seeds = [VAULT_AUTHORITY, REWARD_VAULT],
        bump = reward_vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = reward_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = player_token_account.owner == player.key() @ BurnPlayError::InvalidTokenAccount,
        constraint = player_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimStakingRewards<'info> {
    pub fn claim_staking_rewards(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let reward = self.player_stake.claim_reward(now)?;
        self.reward_vault.record_release(reward, now)?;

        let seeds = self.reward_vault.authority_seeds();
        transfer_from_vault(
            reward,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.player_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Claimed {} staking rewards", reward);
        emit!(RewardsClaimed {
            player: self.player.key(),
            amount: reward,
        });

        Ok(())
    }
}
