use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Fixed-capacity member list shared by the DAO and the recovery body.
// Slots [0, count) are populated, the rest hold the default key.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, InitSpace)]
pub struct MemberSet {
    pub members: [Pubkey; MAX_MEMBERS],
    pub count: u8,
}

impl MemberSet {
    pub fn active(&self) -> &[Pubkey] {
        &self.members[..self.count as usize]
    }

    pub fn member_index(&self, key: &Pubkey) -> Option<usize> {
        self.active().iter().position(|m| m == key)
    }

    pub fn is_member(&self, key: &Pubkey) -> bool {
        self.member_index(key).is_some()
    }

    pub fn assert_member(&self, key: &Pubkey) -> Result<usize> {
        self.member_index(key)
            .ok_or_else(|| error!(BurnPlayError::NotAMember))
    }

    // Strict majority of the whole membership
    pub fn has_majority(&self, votes: u8) -> bool {
        (votes as u16) * 2 > self.count as u16
    }

    pub fn set_members(&mut self, members: &[Pubkey]) -> Result<()> {
        require!(
            !members.is_empty() && members.len() <= MAX_MEMBERS,
            BurnPlayError::InvalidParameter
        );
        for (i, member) in members.iter().enumerate() {
            require!(*member != Pubkey::default(), BurnPlayError::InvalidParameter);
            require!(
                !members[..i].contains(member),
                BurnPlayError::InvalidParameter
            );
        }

        self.members = [Pubkey::default(); MAX_MEMBERS];
        self.members[..members.len()].copy_from_slice(members);
        self.count = members.len() as u8;
        Ok(())
    }

    pub fn add(&mut self, member: Pubkey) -> Result<()> {
        require!(member != Pubkey::default(), BurnPlayError::InvalidParameter);
        require!(!self.is_member(&member), BurnPlayError::InvalidParameter);
        require!(
            (self.count as usize) < MAX_MEMBERS,
            BurnPlayError::InvalidParameter
        );

        self.members[self.count as usize] = member;
        self.count += 1;
        Ok(())
    }

    // Removal keeps the list compact; the last member cannot leave
    pub fn remove(&mut self, member: &Pubkey) -> Result<()> {
        let index = self.assert_member(member)?;
        require!(self.count > 1, BurnPlayError::InvalidParameter);

        let count = self.count as usize;
        self.members.copy_within(index + 1..count, index);
        self.members[count - 1] = Pubkey::default();
        self.count -= 1;
        Ok(())
    }
}
