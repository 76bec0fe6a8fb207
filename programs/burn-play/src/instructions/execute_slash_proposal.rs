use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Execute Slash Proposal Instruction
//
// Applies an approved SlashStake proposal. Funds move from the staking vault
// into the reward vault, same as the direct-mode slash.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ExecuteSlashProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_GOVERNANCE],
        bump = dao.bump,
    )]
    pub dao: Account<'info, DaoGovernance>,

    #[account(
        mut,
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,

    /// CHECK: compared against the proposal payload
    pub player: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [PLAYER_STAKE, player.key().as_ref()],
        bump = player_stake.bump,
    )]
    pub player_stake: Account<'info, PlayerStake>,

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
    pub staking_vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = staking_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub staking_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT, REWARD_VAULT],
        bump = reward_vault.bump,
    )]
    pub reward_vault: Account<'info, Vault>,

    #[account(
        mut,
        address = reward_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub reward_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ExecuteSlashProposal<'info> {
    pub fn execute_slash_proposal(&mut self, proposal_id: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Approval gate, same order as execute_proposal
        self.dao.members.assert_member(&self.executor.key())?;
        require!(!self.proposal.executed, BurnPlayError::AlreadyExecuted);
        self.dao.assert_current(&self.proposal)?;
        require!(
            self.dao.members.has_majority(self.proposal.votes_for),
            BurnPlayError::QuorumNotReached
        );

        // 2. Payload must name the stake passed in
        let (player, amount) = match self.proposal.kind {
            ProposalKind::SlashStake { player, amount } => (player, amount),
            _ => return err!(BurnPlayError::InvalidProposalKind),
        };
        require_keys_eq!(self.player.key(), player, BurnPlayError::InvalidParameter);

        let now = Clock::get()?.unix_timestamp;
        self.player_stake.record_slash(amount)?;
        self.staking_vault.record_release(amount, now)?;
        self.reward_vault.record_deposit(amount)?;
        self.proposal.mark_executed(now)?;
        self.dao.last_activity = now;

        let seeds = self.staking_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.staking_token_account.to_account_info(),
            &self.reward_token_account.to_account_info(),
            &self.staking_vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Proposal {} slashed {} from {}", proposal_id, amount, player);
        emit!(StakeSlashed {
            player,
            amount,
            total_staked: self.player_stake.total_staked,
        });
        emit!(ProposalExecuted {
            proposal_id,
            executor: self.executor.key(),
        });

        Ok(())
    }
}
