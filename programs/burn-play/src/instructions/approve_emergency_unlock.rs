use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct ApproveEmergencyUnlock<'info> {
    pub member: Signer<'info>,

    #[account(
        mut,
        seeds = [EMERGENCY_RECOVERY],
        bump = recovery.bump,
    )]
    pub recovery: Account<'info, RecoveryBody>,
}

impl<'info> ApproveEmergencyUnlock<'info> {
    pub fn approve_emergency_unlock(&mut self) -> Result<()> {
        let slot = self.recovery.members.assert_member(&self.member.key())?;

        self.recovery.approve(slot)?;
        self.recovery.last_activity = Clock::get()?.unix_timestamp;

        msg!(
            "Emergency unlock approvals: {}/{}",
            self.recovery.approval_count,
            self.recovery.members.count
        );
        Ok(())
    }
}
