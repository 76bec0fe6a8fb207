use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};
use super::{game_config::validate_backup_team, member_set::MemberSet, vault::VaultKind};

// Single instance at ["dao_governance"]
#[account]
#[derive(InitSpace)]
pub struct DaoGovernance {
    pub members: MemberSet,

    // Next proposal id
    pub proposal_count: u64,

    // Bumped on every membership change; older proposals go stale
    pub membership_epoch: u32,

    pub last_activity: i64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl DaoGovernance {
    pub fn next_proposal_id(&mut self) -> Result<u64> {
        let id = self.proposal_count;
        self.proposal_count = self
            .proposal_count
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(id)
    }

    pub fn bump_epoch(&mut self) -> Result<()> {
        self.membership_epoch = self
            .membership_epoch
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn replace_members(&mut self, members: &[Pubkey]) -> Result<()> {
        self.members.set_members(members)?;
        self.bump_epoch()
    }

    pub fn assert_current(&self, proposal: &Proposal) -> Result<()> {
        require!(
            proposal.membership_epoch == self.membership_epoch,
            BurnPlayError::StaleProposal
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalKind {
    UpdatePassPrice { new_price: u64 },
    UpdateWeeklyQuota { new_quota: u32 },
    UpdateEmergencyThreshold { vault: VaultKind, new_threshold: u64 },
    UpdateAuthority { new_authority: Pubkey },
    UpdateBackupTeam { new_team: [Pubkey; BACKUP_TEAM_SIZE] },
    AddMember { member: Pubkey },
    RemoveMember { member: Pubkey },
    // Executed by execute_release_proposal
    ReleaseFunds { vault: VaultKind, amount: u64, recipient: Pubkey },
    // Executed by execute_slash_proposal
    SlashStake { player: Pubkey, amount: u64 },
}

impl ProposalKind {
    // Payload checks done at creation; execution re-checks state-dependent ones
    pub fn validate(&self) -> Result<()> {
        match self {
            ProposalKind::UpdatePassPrice { new_price } => {
                require!(*new_price > 0, BurnPlayError::InvalidParameter);
            }
            ProposalKind::UpdateWeeklyQuota { new_quota } => {
                require!(*new_quota > 0, BurnPlayError::InvalidParameter);
            }
            ProposalKind::UpdateEmergencyThreshold { vault, new_threshold } => {
                require!(
                    vault.supports_emergency_unlock() && *new_threshold > 0,
                    BurnPlayError::InvalidParameter
                );
            }
            ProposalKind::UpdateAuthority { new_authority } => {
                require!(
                    *new_authority != Pubkey::default(),
                    BurnPlayError::InvalidParameter
                );
            }
            ProposalKind::UpdateBackupTeam { new_team } => validate_backup_team(new_team)?,
            ProposalKind::AddMember { member } | ProposalKind::RemoveMember { member } => {
                require!(*member != Pubkey::default(), BurnPlayError::InvalidParameter);
            }
            ProposalKind::ReleaseFunds { vault, amount, recipient } => {
                require!(
                    vault.governance_releasable(),
                    BurnPlayError::InvalidParameter
                );
                require!(*amount > 0, BurnPlayError::InvalidParameter);
                require!(
                    *recipient != Pubkey::default(),
                    BurnPlayError::InvalidParameter
                );
            }
            ProposalKind::SlashStake { player, amount } => {
                require!(*player != Pubkey::default(), BurnPlayError::InvalidParameter);
                require!(*amount > 0, BurnPlayError::InvalidParameter);
            }
        }
        Ok(())
    }

    pub fn is_release(&self) -> bool {
        matches!(self, ProposalKind::ReleaseFunds { .. })
    }
}

// Seeds: ["proposal", id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Pubkey,
    pub kind: ProposalKind,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    pub votes_for: u8,
    pub votes_against: u8,

    // Bit i set: member slot i has voted
    pub voter_bitmap: u16,

    pub membership_epoch: u32,
    pub executed: bool,
    pub created_at: i64,
    pub executed_at: i64,
    pub bump: u8,
}

impl Proposal {
    pub fn has_voted(&self, slot: usize) -> bool {
        self.voter_bitmap & (1 << slot) != 0
    }

    pub fn record_vote(&mut self, slot: usize, in_favor: bool, member_count: u8) -> Result<()> {
        require!(!self.executed, BurnPlayError::AlreadyExecuted);
        require!(slot < MAX_MEMBERS, BurnPlayError::NotAMember);
        require!(!self.has_voted(slot), BurnPlayError::DuplicateVote);

        let cast = self
            .votes_for
            .checked_add(self.votes_against)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        require!(cast < member_count, BurnPlayError::DuplicateVote);

        self.voter_bitmap |= 1 << slot;
        if in_favor {
            self.votes_for += 1;
        } else {
            self.votes_against += 1;
        }
        Ok(())
    }

    pub fn mark_executed(&mut self, now: i64) -> Result<()> {
        require!(!self.executed, BurnPlayError::AlreadyExecuted);
        self.executed = true;
        self.executed_at = now;
        Ok(())
    }
}
