use anchor_lang::prelude::*;

#[error_code]
pub enum BurnPlayError {
    // Lifecycle errors
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    #[msg("Account is not initialized")]
    Uninitialized,

    // Authorization errors
    #[msg("Signer is not authorized to perform this action")]
    Unauthorized,

    #[msg("Signer is not a member of this body")]
    NotAMember,

    #[msg("Operation not available under the configured governance mode")]
    WrongGovernanceMode,

    // Access errors
    #[msg("Weekly play quota exhausted for the current period")]
    QuotaExceeded,

    #[msg("Player does not have game access")]
    AccessDenied,

    #[msg("Operation not available under the configured access policy")]
    WrongAccessPolicy,

    #[msg("Period reset is not due yet")]
    PeriodResetNotReady,

    #[msg("Staking rewards can be claimed once per week")]
    RewardNotReady,

    // Vault errors
    #[msg("Insufficient balance for this operation")]
    InsufficientBalance,

    #[msg("Vault has been unlocked and accepts no further deposits")]
    VaultUnlocked,

    #[msg("Emergency unlock threshold not met")]
    ThresholdNotMet,

    #[msg("Token account does not match the expected owner or mint")]
    InvalidTokenAccount,

    // Governance errors
    #[msg("Member has already voted")]
    DuplicateVote,

    #[msg("Proposal has not reached a majority of members")]
    QuorumNotReached,

    #[msg("Proposal already executed")]
    AlreadyExecuted,

    #[msg("Proposal was created under a previous membership")]
    StaleProposal,

    #[msg("Proposal kind cannot be executed by this instruction")]
    InvalidProposalKind,

    #[msg("No emergency unlock request is active")]
    NoActiveUnlockRequest,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Invalid parameter provided")]
    InvalidParameter,

    // Appended variants keep earlier error codes stable
    #[msg("Slash amount exceeds the allowed share of the stake")]
    SlashAmountTooHigh,

    #[msg("Stake has been slashed and no longer earns rewards")]
    StakeSlashed,

    #[msg("Another member's emergency unlock request is still active")]
    UnlockRequestPending,
}
