use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct VoteOnProposal<'info> {
    pub voter: Signer<'info>,

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
}

impl<'info> VoteOnProposal<'info> {
    pub fn vote_on_proposal(&mut self, proposal_id: u64, in_favor: bool) -> Result<()> {
        let slot = self.dao.members.assert_member(&self.voter.key())?;

        require!(!self.proposal.executed, BurnPlayError::AlreadyExecuted);
        self.dao.assert_current(&self.proposal)?;

        self.proposal
            .record_vote(slot, in_favor, self.dao.members.count)?;
        self.dao.last_activity = Clock::get()?.unix_timestamp;

        msg!(
            "Vote on proposal {}: {} for, {} against",
            proposal_id,
            self.proposal.votes_for,
            self.proposal.votes_against
        );
        emit!(VoteCast {
            proposal_id,
            voter: self.voter.key(),
            in_favor,
            votes_for: self.proposal.votes_for,
            votes_against: self.proposal.votes_against,
        });

        Ok(())
    }
}
