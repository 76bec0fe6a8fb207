use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Opens a new unlock round for the burn or recovery vault.
// recipient is the token account that receives the unlocked balance.

#[derive(Accounts)]
pub struct RequestEmergencyUnlock<'info> {
    pub member: Signer<'info>,

    #[account(
        mut,
        seeds = [EMERGENCY_RECOVERY],
        bump = recovery.bump,
    )]
    pub recovery: Account<'info, RecoveryBody>,
}

impl<'info> RequestEmergencyUnlock<'info> {
    pub fn request_emergency_unlock(&mut self, vault: VaultKind, recipient: Pubkey) -> Result<()> {
        require!(self.recovery.is_initialized, BurnPlayError::Uninitialized);
        let slot = self.recovery.members.assert_member(&self.member.key())?;

        self.recovery.open_request(slot, vault, recipient)?;
        self.recovery.last_activity = Clock::get()?.unix_timestamp;

        msg!(
            "Emergency unlock requested for {:?} vault, round {}",
            vault,
            self.recovery.request_round
        );
        emit!(EmergencyUnlockRequested {
            requester: self.member.key(),
            vault,
            recipient,
            round: self.recovery.request_round,
        });

        Ok(())
    }
}
