use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

#[derive(Accounts)]
pub struct InitializeEmergencyRecovery<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG],
        bump = game_config.bump,
        has_one = authority @ BurnPlayError::Unauthorized,
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + RecoveryBody::INIT_SPACE,
        seeds = [EMERGENCY_RECOVERY],
        bump,
    )]
    pub recovery: Account<'info, RecoveryBody>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEmergencyRecovery<'info> {
    pub fn initialize_emergency_recovery(
        &mut self,
        members: Vec<Pubkey>,
        bumps: &InitializeEmergencyRecoveryBumps,
    ) -> Result<()> {
        self.game_config.assert_mode(GovernanceMode::Dao)?;
        require!(
            !self.recovery.is_initialized,
            BurnPlayError::AlreadyInitialized
        );

        let now = Clock::get()?.unix_timestamp;

        let mut member_set = MemberSet::default();
        member_set.set_members(&members)?;

        self.recovery.set_inner(RecoveryBody {
            members: member_set,
            membership_epoch: 0,
            request_active: false,
            request_vault: VaultKind::Recovery,
            request_recipient: Pubkey::default(),
            request_opener: 0,
            approval_bitmap: 0,
            approval_count: 0,
            request_round: 0,
            emergency_triggered: false,
            last_activity: now,
            is_initialized: true,
            bump: bumps.recovery,
        });
        self.game_config.last_authority_activity = now;

        msg!("Emergency recovery initialized with {} members", members.len());
        Ok(())
    }
}
