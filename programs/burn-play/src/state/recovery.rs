use anchor_lang::prelude::*;
use crate::errors::*;
use super::{member_set::MemberSet, vault::VaultKind};

// Emergency recovery body, independent from the DAO
// Single instance at ["emergency_recovery"]
#[account]
#[derive(InitSpace)]
pub struct RecoveryBody {
    pub members: MemberSet,
    pub membership_epoch: u32,

    // Pending unlock request
    pub request_active: bool,
    pub request_vault: VaultKind,
    pub request_recipient: Pubkey,
    // Member slot that opened the active round
    pub request_opener: u8,
    pub approval_bitmap: u16,
    pub approval_count: u8,
    pub request_round: u64,

    pub emergency_triggered: bool,
    pub last_activity: i64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl RecoveryBody {
    pub fn replace_members(&mut self, members: &[Pubkey]) -> Result<()> {
        self.members.set_members(members)?;
        self.membership_epoch = self
            .membership_epoch
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        // Approvals are indexed by slot and cannot survive a new member list
        self.clear_request();
        Ok(())
    }

    // Opens a new round; the requester's approval is counted. An active
    // round can only be replaced by the member who opened it.
    pub fn open_request(
        &mut self,
        requester_slot: usize,
        vault: VaultKind,
        recipient: Pubkey,
    ) -> Result<()> {
        require!(
            vault.supports_emergency_unlock(),
            BurnPlayError::InvalidParameter
        );
        require!(recipient != Pubkey::default(), BurnPlayError::InvalidParameter);
        require!(
            !self.request_active || self.request_opener as usize == requester_slot,
            BurnPlayError::UnlockRequestPending
        );

        self.request_round = self
            .request_round
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        self.request_active = true;
        self.request_vault = vault;
        self.request_recipient = recipient;
        self.request_opener = requester_slot as u8;
        self.approval_bitmap = 1 << requester_slot;
        self.approval_count = 1;
        Ok(())
    }

    pub fn approve(&mut self, slot: usize) -> Result<()> {
        require!(self.request_active, BurnPlayError::NoActiveUnlockRequest);
        require!(
            self.approval_bitmap & (1 << slot) == 0,
            BurnPlayError::DuplicateVote
        );

        self.approval_bitmap |= 1 << slot;
        self.approval_count = self
            .approval_count
            .checked_add(1)
            .ok_or(BurnPlayError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn assert_ready(&self) -> Result<()> {
        require!(self.request_active, BurnPlayError::NoActiveUnlockRequest);
        require!(
            self.members.has_majority(self.approval_count),
            BurnPlayError::QuorumNotReached
        );
        Ok(())
    }

    pub fn clear_request(&mut self) {
        self.request_active = false;
        self.request_opener = 0;
        self.approval_bitmap = 0;
        self.approval_count = 0;
    }
}
