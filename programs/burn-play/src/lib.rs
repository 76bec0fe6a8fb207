// Burn-Play Program
//
// Token-burn play-to-earn game: players burn tokens for plays or passes,
// stake for weekly rewards, and win prizes paid from program vaults.
// Parameters evolve through a member DAO (Dao mode) or the authority
// itself (Direct mode), with an emergency recovery path for each.
//
// Instructions:
// - initialize_game / update_governance / update_backup_team / period_reset
// - initialize_vault / fund_vault / deposit_to_prize_vault
// - stake_tokens / withdraw_stake / claim_staking_rewards / slash_stake
// - burn_to_play / use_quota_play / check_game_access
// - initialize_dao / update_dao_members / create_proposal / vote_on_proposal
//   execute_proposal / execute_release_proposal / execute_slash_proposal
// - initialize_emergency_recovery / update_recovery_members
//   request_emergency_unlock / approve_emergency_unlock / emergency_unlock
//   backup_withdraw
// - update_player_score / distribute_prize

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("ANKTRidEZhxHJ65TckCb8PbNYvtgD2GUGTCA2tBZj3RZ");

#[program]
pub mod burn_play {
    use super::*;

    // GAME CONFIGURATION

    pub fn initialize_game(
        ctx: Context<InitializeGame>,
        access_policy: AccessPolicy,
        play_parameter: u64,
        governance_mode: GovernanceMode,
    ) -> Result<()> {
        ctx.accounts
            .initialize_game(access_policy, play_parameter, governance_mode, &ctx.bumps)
    }

    // Direct mode only
    pub fn update_governance(ctx: Context<UpdateGovernance>, new_authority: Pubkey) -> Result<()> {
        ctx.accounts.update_governance(new_authority)
    }

    // Direct mode only
    pub fn update_backup_team(
        ctx: Context<UpdateGovernance>,
        new_team: [Pubkey; BACKUP_TEAM_SIZE],
    ) -> Result<()> {
        ctx.accounts.update_backup_team(new_team)
    }

    pub fn period_reset(ctx: Context<ResetPeriod>) -> Result<()> {
        ctx.accounts.period_reset()
    }

    // VAULTS

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        kind: VaultKind,
        emergency_threshold: Option<u64>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_vault(kind, emergency_threshold, &ctx.bumps)
    }

    pub fn fund_vault(ctx: Context<FundVault>, kind: VaultKind, amount: u64) -> Result<()> {
        ctx.accounts.fund_vault(kind, amount)
    }

    pub fn deposit_to_prize_vault(ctx: Context<DepositToPrizeVault>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_to_prize_vault(amount)
    }

    // STAKING

    pub fn stake_tokens(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
        ctx.accounts.stake_tokens(amount, &ctx.bumps)
    }

    // Player and authority both sign
    pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_stake(amount)
    }

    pub fn claim_staking_rewards(ctx: Context<ClaimStakingRewards>) -> Result<()> {
        ctx.accounts.claim_staking_rewards()
    }

    // Direct mode only
    pub fn slash_stake(ctx: Context<SlashStake>, amount: u64) -> Result<()> {
        ctx.accounts.slash_stake(amount)
    }

    // PLAY ACCESS

    pub fn burn_to_play(ctx: Context<BurnToPlay>, amount: u64) -> Result<()> {
        ctx.accounts.burn_to_play(amount, &ctx.bumps)
    }

    pub fn use_quota_play(ctx: Context<UseQuotaPlay>) -> Result<()> {
        ctx.accounts.use_quota_play()
    }

    pub fn check_game_access(ctx: Context<CheckGameAccess>) -> Result<()> {
        ctx.accounts.check_game_access()
    }

    // DAO GOVERNANCE

    pub fn initialize_dao(ctx: Context<InitializeDao>, members: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.initialize_dao(members, &ctx.bumps)
    }

    pub fn update_dao_members(ctx: Context<UpdateDaoMembers>, members: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.update_dao_members(members)
    }

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        kind: ProposalKind,
        description: String,
    ) -> Result<()> {
        ctx.accounts.create_proposal(kind, description, &ctx.bumps)
    }

    pub fn vote_on_proposal(
        ctx: Context<VoteOnProposal>,
        proposal_id: u64,
        in_favor: bool,
    ) -> Result<()> {
        ctx.accounts.vote_on_proposal(proposal_id, in_favor)
    }

    // Every kind except ReleaseFunds and SlashStake
    pub fn execute_proposal(ctx: Context<ExecuteProposal>, proposal_id: u64) -> Result<()> {
        ctx.accounts.execute_proposal(proposal_id)
    }

    pub fn execute_release_proposal(
        ctx: Context<ExecuteReleaseProposal>,
        proposal_id: u64,
    ) -> Result<()> {
        ctx.accounts.execute_release_proposal(proposal_id)
    }

    pub fn execute_slash_proposal(
        ctx: Context<ExecuteSlashProposal>,
        proposal_id: u64,
    ) -> Result<()> {
        ctx.accounts.execute_slash_proposal(proposal_id)
    }

    // EMERGENCY RECOVERY

    pub fn initialize_emergency_recovery(
        ctx: Context<InitializeEmergencyRecovery>,
        members: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize_emergency_recovery(members, &ctx.bumps)
    }

    pub fn update_recovery_members(
        ctx: Context<UpdateRecoveryMembers>,
        members: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.update_recovery_members(members)
    }

    pub fn request_emergency_unlock(
        ctx: Context<RequestEmergencyUnlock>,
        vault: VaultKind,
        recipient: Pubkey,
    ) -> Result<()> {
        ctx.accounts.request_emergency_unlock(vault, recipient)
    }

    pub fn approve_emergency_unlock(ctx: Context<ApproveEmergencyUnlock>) -> Result<()> {
        ctx.accounts.approve_emergency_unlock()
    }

    pub fn emergency_unlock(ctx: Context<EmergencyUnlock>) -> Result<()> {
        ctx.accounts.emergency_unlock()
    }

    // Direct mode only
    pub fn backup_withdraw(ctx: Context<BackupWithdraw>, amount: u64) -> Result<()> {
        ctx.accounts.backup_withdraw(amount)
    }

    // SCORES AND PRIZES

    pub fn update_player_score(
        ctx: Context<UpdatePlayerScore>,
        games_played: u32,
        games_won: u32,
        rating_delta: i32,
    ) -> Result<()> {
        ctx.accounts
            .update_player_score(games_played, games_won, rating_delta, &ctx.bumps)
    }

    // Player and authority both sign
    pub fn distribute_prize(ctx: Context<DistributePrize>, amount: u64) -> Result<()> {
        ctx.accounts.distribute_prize(amount, &ctx.bumps)
    }
}
