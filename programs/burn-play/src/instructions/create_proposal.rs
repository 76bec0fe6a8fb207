use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Create Proposal Instruction
//
// Any DAO member may propose. The id is the DAO's proposal_count.
// The payload is validated now; state-dependent checks run again at execution.

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_GOVERNANCE],
        bump = dao.bump,
    )]
    pub dao: Account<'info, DaoGovernance>,

    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [PROPOSAL, &dao.proposal_count.to_le_bytes()],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(
        &mut self,
        kind: ProposalKind,
        description: String,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        // 1. Membership
        self.dao.members.assert_member(&self.proposer.key())?;

        // 2. Payload
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            BurnPlayError::InvalidParameter
        );
        kind.validate()?;

        match &kind {
            ProposalKind::AddMember { member } => {
                require!(
                    !self.dao.members.is_member(member),
                    BurnPlayError::InvalidParameter
                );
            }
            ProposalKind::RemoveMember { member } => {
                self.dao.members.assert_member(member)?;
            }
            _ => {}
        }

        // 3. Sequential id
        let now = Clock::get()?.unix_timestamp;
        let proposal_id = self.dao.next_proposal_id()?;
        self.dao.last_activity = now;

        self.proposal.set_inner(Proposal {
            id: proposal_id,
            proposer: self.proposer.key(),
            kind,
            description,
            votes_for: 0,
            votes_against: 0,
            voter_bitmap: 0,
            membership_epoch: self.dao.membership_epoch,
            executed: false,
            created_at: now,
            executed_at: 0,
            bump: bumps.proposal,
        });

        msg!("Proposal {} created", proposal_id);
        emit!(ProposalCreated {
            proposal_id,
            proposer: self.proposer.key(),
        });

        Ok(())
    }
}
