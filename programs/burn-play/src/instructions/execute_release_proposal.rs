use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{state::*, errors::*, constants::*, events::*, helpers::*};

// Execute Release Proposal Instruction
//
// Pays out an approved ReleaseFunds proposal from the named vault to the
// named token account. Same approval gate as execute_proposal.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ExecuteReleaseProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
    )]
    pub game_config: Account<'info, GameConfig>,

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

    #[account(
        mut,
        seeds = [VAULT, source_vault.kind.seed()],
        bump = source_vault.bump,
    )]
    pub source_vault: Account<'info, Vault>,

    /// CHECK: signing PDA of the source vault
    #[account(
        seeds = [VAULT_AUTHORITY, source_vault.kind.seed()],
        bump = source_vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = source_vault.token_account @ BurnPlayError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == game_config.token_mint @ BurnPlayError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ExecuteReleaseProposal<'info> {
    pub fn execute_release_proposal(&mut self, proposal_id: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Approval gate, same order as execute_proposal
        self.dao.members.assert_member(&self.executor.key())?;
        require!(!self.proposal.executed, BurnPlayError::AlreadyExecuted);
        self.dao.assert_current(&self.proposal)?;
        require!(
            self.dao.members.has_majority(self.proposal.votes_for),
            BurnPlayError::QuorumNotReached
        );

        // 2. Payload must match the accounts passed in
        let (vault, amount, recipient) = match self.proposal.kind {
            ProposalKind::ReleaseFunds { vault, amount, recipient } => (vault, amount, recipient),
            _ => return err!(BurnPlayError::InvalidProposalKind),
        };
        require!(
            self.source_vault.kind == vault,
            BurnPlayError::InvalidParameter
        );
        require_keys_eq!(
            self.recipient_token_account.key(),
            recipient,
            BurnPlayError::InvalidTokenAccount
        );

        let now = Clock::get()?.unix_timestamp;
        self.source_vault.record_release(amount, now)?;
        self.proposal.mark_executed(now)?;
        self.dao.last_activity = now;

        let seeds = self.source_vault.authority_seeds();
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_token_account.to_account_info(),
            &self.recipient_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &seeds,
        )?;

        msg!("Proposal {} released {} from {:?} vault", proposal_id, amount, vault);
        emit!(ProposalExecuted {
            proposal_id,
            executor: self.executor.key(),
        });

        Ok(())
    }
}
