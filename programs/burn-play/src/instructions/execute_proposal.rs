use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Execute Proposal Instruction
//
// Applies an approved configuration or membership proposal.
// ReleaseFunds proposals go through execute_release_proposal and
// SlashStake proposals through execute_slash_proposal.
// target_vault is only read by UpdateEmergencyThreshold.
// The proposal account is kept as an execution record.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ExecuteProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
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

    #[account(mut)]
    pub target_vault: Option<Account<'info, Vault>>,
}

impl<'info> ExecuteProposal<'info> {
    pub fn execute_proposal(&mut self, proposal_id: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Only members execute
        self.dao.members.assert_member(&self.executor.key())?;

        // 2. Once only
        require!(!self.proposal.executed, BurnPlayError::AlreadyExecuted);

        // 3. Voted by the current membership
        self.dao.assert_current(&self.proposal)?;

        // 4. Strict majority of all members
        require!(
            self.dao.members.has_majority(self.proposal.votes_for),
            BurnPlayError::QuorumNotReached
        );

        let now = Clock::get()?.unix_timestamp;

        match self.proposal.kind.clone() {
            ProposalKind::UpdatePassPrice { new_price } => {
                self.game_config.pass_price = new_price;
            }

            ProposalKind::UpdateWeeklyQuota { new_quota } => {
                self.game_config.weekly_quota = new_quota;
            }

            ProposalKind::UpdateEmergencyThreshold { vault, new_threshold } => {
                let target = self
                    .target_vault
                    .as_mut()
                    .ok_or(BurnPlayError::InvalidParameter)?;
                require!(target.kind == vault, BurnPlayError::InvalidParameter);
                require!(!target.unlocked, BurnPlayError::VaultUnlocked);
                target.emergency_threshold = Some(new_threshold);
            }

            ProposalKind::UpdateAuthority { new_authority } => {
                let previous = self.game_config.authority;
                self.game_config.authority = new_authority;
                self.game_config.last_authority_activity = now;
                emit!(AuthorityUpdated {
                    previous,
                    new_authority,
                });
            }

            ProposalKind::UpdateBackupTeam { new_team } => {
                validate_backup_team(&new_team)?;
                self.game_config.backup_team = new_team;
            }

            ProposalKind::AddMember { member } => {
                self.dao.members.add(member)?;
                self.dao.bump_epoch()?;
            }

            ProposalKind::RemoveMember { member } => {
                self.dao.members.remove(&member)?;
                self.dao.bump_epoch()?;
            }

            ProposalKind::ReleaseFunds { .. } | ProposalKind::SlashStake { .. } => {
                return err!(BurnPlayError::InvalidProposalKind);
            }
        }

        self.proposal.mark_executed(now)?;
        self.dao.last_activity = now;

        msg!("Proposal {} executed", proposal_id);
        emit!(ProposalExecuted {
            proposal_id,
            executor: self.executor.key(),
        });

        Ok(())
    }
}
