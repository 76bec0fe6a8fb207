// Test utilities for the burn-play program

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData};
use burn_play::constants::*;
use burn_play::errors::BurnPlayError;
use burn_play::state::{AccessPolicy, GovernanceMode, ProposalKind, VaultKind};
use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(burn_play::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

pub const DECIMALS: u8 = 6;

pub const ALL_VAULTS: [VaultKind; 5] = [
    VaultKind::Staking,
    VaultKind::Reward,
    VaultKind::Burn,
    VaultKind::Prize,
    VaultKind::Recovery,
];

// ======================== HELPERS ========================

// Program-side keys use the framework's Pubkey type
pub fn anchor_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn sdk_key(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

// Setup LiteSVM with the compiled burn-play program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(
        PROGRAM_ID,
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/burn_play.so"),
    )
    .expect("burn_play.so should be built before running integration tests");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// Assert a transaction failed with the given program error
pub fn assert_program_error(result: TransactionResult, expected: BurnPlayError) {
    let code = anchor_lang::error::ERROR_CODE_OFFSET + expected as u32;
    match result {
        Ok(_) => panic!("Expected {:?} but the transaction succeeded", expected),
        Err(failed) => {
            let err = format!("{:?}", failed.err);
            assert!(
                err.contains(&format!("Custom({})", code)),
                "Expected {:?} ({}), got {}",
                expected,
                code,
                err
            );
        }
    }
}

pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm
        .get_account(address)
        .expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

// ======================== PDAs ========================

pub fn derive_game_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME_CONFIG], &PROGRAM_ID)
}

pub fn derive_vault_pda(kind: VaultKind) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, kind.seed()], &PROGRAM_ID)
}

pub fn derive_vault_authority_pda(kind: VaultKind) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY, kind.seed()], &PROGRAM_ID)
}

pub fn vault_token_account(kind: VaultKind, mint: &Pubkey) -> Pubkey {
    let (authority, _) = derive_vault_authority_pda(kind);
    get_associated_token_address(&authority, mint)
}

pub fn derive_player_stake_pda(player: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLAYER_STAKE, player.as_ref()], &PROGRAM_ID)
}

pub fn derive_player_access_pda(player: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLAYER_ACCESS, player.as_ref()], &PROGRAM_ID)
}

pub fn derive_player_score_pda(player: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PLAYER_SCORE, player.as_ref()], &PROGRAM_ID)
}

pub fn derive_dao_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DAO_GOVERNANCE], &PROGRAM_ID)
}

pub fn derive_recovery_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EMERGENCY_RECOVERY], &PROGRAM_ID)
}

pub fn derive_proposal_pda(proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROPOSAL, &proposal_id.to_le_bytes()], &PROGRAM_ID)
}

// ======================== INSTRUCTION BUILDERS ========================

fn program_ix(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

// Placeholder for an absent optional account
fn none_account() -> AccountMeta {
    AccountMeta::new_readonly(PROGRAM_ID, false)
}

pub fn build_initialize_game_ix(
    authority: &Pubkey,
    token_mint: &Pubkey,
    access_policy: AccessPolicy,
    play_parameter: u64,
    governance_mode: GovernanceMode,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();

    program_ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::InitializeGame {
            access_policy,
            play_parameter,
            governance_mode,
        }
        .data(),
    )
}

pub fn build_update_governance_ix(authority: &Pubkey, new_authority: &Pubkey) -> Instruction {
    let (game_config, _) = derive_game_config_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
        ],
        burn_play::instruction::UpdateGovernance {
            new_authority: anchor_key(new_authority),
        }
        .data(),
    )
}

pub fn build_update_backup_team_ix(authority: &Pubkey, team: &[Pubkey; 3]) -> Instruction {
    let (game_config, _) = derive_game_config_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
        ],
        burn_play::instruction::UpdateBackupTeam {
            new_team: team.map(|k| anchor_key(&k)),
        }
        .data(),
    )
}

pub fn build_period_reset_ix(authority: &Pubkey) -> Instruction {
    let (game_config, _) = derive_game_config_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
        ],
        burn_play::instruction::PeriodReset {}.data(),
    )
}

pub fn build_initialize_vault_ix(
    authority: &Pubkey,
    token_mint: &Pubkey,
    kind: VaultKind,
    emergency_threshold: Option<u64>,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (vault, _) = derive_vault_pda(kind);
    let (vault_authority, _) = derive_vault_authority_pda(kind);

    program_ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(kind, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::InitializeVault {
            kind,
            emergency_threshold,
        }
        .data(),
    )
}

pub fn build_fund_vault_ix(
    funder: &Pubkey,
    funder_token_account: &Pubkey,
    token_mint: &Pubkey,
    kind: VaultKind,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (vault, _) = derive_vault_pda(kind);

    program_ix(
        vec![
            AccountMeta::new_readonly(*funder, true),
            AccountMeta::new_readonly(game_config, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(*funder_token_account, false),
            AccountMeta::new(vault_token_account(kind, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::FundVault { kind, amount }.data(),
    )
}

pub fn build_deposit_to_prize_vault_ix(
    authority: &Pubkey,
    authority_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (prize_vault, _) = derive_vault_pda(VaultKind::Prize);

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(prize_vault, false),
            AccountMeta::new(*authority_token_account, false),
            AccountMeta::new(vault_token_account(VaultKind::Prize, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::DepositToPrizeVault { amount }.data(),
    )
}

pub fn build_stake_tokens_ix(
    player: &Pubkey,
    player_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (staking_vault, _) = derive_vault_pda(VaultKind::Staking);
    let (player_stake, _) = derive_player_stake_pda(player);

    program_ix(
        vec![
            AccountMeta::new(*player, true),
            AccountMeta::new_readonly(game_config, false),
            AccountMeta::new(staking_vault, false),
            AccountMeta::new(player_stake, false),
            AccountMeta::new(*player_token_account, false),
            AccountMeta::new(vault_token_account(VaultKind::Staking, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::StakeTokens { amount }.data(),
    )
}

pub fn build_withdraw_stake_ix(
    player: &Pubkey,
    authority: &Pubkey,
    player_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (staking_vault, _) = derive_vault_pda(VaultKind::Staking);
    let (vault_authority, _) = derive_vault_authority_pda(VaultKind::Staking);
    let (player_stake, _) = derive_player_stake_pda(player);

    program_ix(
        vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(staking_vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(player_stake, false),
            AccountMeta::new(*player_token_account, false),
            AccountMeta::new(vault_token_account(VaultKind::Staking, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::WithdrawStake { amount }.data(),
    )
}

pub fn build_claim_staking_rewards_ix(
    player: &Pubkey,
    player_token_account: &Pubkey,
    token_mint: &Pubkey,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (player_stake, _) = derive_player_stake_pda(player);
    let (reward_vault, _) = derive_vault_pda(VaultKind::Reward);
    let (vault_authority, _) = derive_vault_authority_pda(VaultKind::Reward);

    program_ix(
        vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new_readonly(game_config, false),
            AccountMeta::new(player_stake, false),
            AccountMeta::new(reward_vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(VaultKind::Reward, token_mint), false),
            AccountMeta::new(*player_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::ClaimStakingRewards {}.data(),
    )
}

pub fn build_burn_to_play_ix(
    player: &Pubkey,
    player_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (player_access, _) = derive_player_access_pda(player);
    let (burn_vault, _) = derive_vault_pda(VaultKind::Burn);

    program_ix(
        vec![
            AccountMeta::new(*player, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(player_access, false),
            AccountMeta::new(burn_vault, false),
            AccountMeta::new(*player_token_account, false),
            AccountMeta::new(vault_token_account(VaultKind::Burn, token_mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::BurnToPlay { amount }.data(),
    )
}

pub fn build_use_quota_play_ix(player: &Pubkey) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (player_access, _) = derive_player_access_pda(player);

    program_ix(
        vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new_readonly(game_config, false),
            AccountMeta::new(player_access, false),
        ],
        burn_play::instruction::UseQuotaPlay {}.data(),
    )
}

pub fn build_check_game_access_ix(player: &Pubkey, has_access_record: bool) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let player_access = if has_access_record {
        AccountMeta::new_readonly(derive_player_access_pda(player).0, false)
    } else {
        none_account()
    };

    program_ix(
        vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new_readonly(game_config, false),
            player_access,
        ],
        burn_play::instruction::CheckGameAccess {}.data(),
    )
}

pub fn build_initialize_dao_ix(authority: &Pubkey, members: &[Pubkey]) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (dao, _) = derive_dao_pda();

    program_ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(dao, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::InitializeDao {
            members: members.iter().map(anchor_key).collect(),
        }
        .data(),
    )
}

pub fn build_update_dao_members_ix(authority: &Pubkey, members: &[Pubkey]) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (dao, _) = derive_dao_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(dao, false),
        ],
        burn_play::instruction::UpdateDaoMembers {
            members: members.iter().map(anchor_key).collect(),
        }
        .data(),
    )
}

// proposal_id must equal the DAO's current proposal_count
pub fn build_create_proposal_ix(
    proposer: &Pubkey,
    proposal_id: u64,
    kind: ProposalKind,
    description: &str,
) -> Instruction {
    let (dao, _) = derive_dao_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);

    program_ix(
        vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new(dao, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::CreateProposal {
            kind,
            description: description.to_string(),
        }
        .data(),
    )
}

pub fn build_vote_on_proposal_ix(voter: &Pubkey, proposal_id: u64, in_favor: bool) -> Instruction {
    let (dao, _) = derive_dao_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);

    program_ix(
        vec![
            AccountMeta::new_readonly(*voter, true),
            AccountMeta::new(dao, false),
            AccountMeta::new(proposal, false),
        ],
        burn_play::instruction::VoteOnProposal {
            proposal_id,
            in_favor,
        }
        .data(),
    )
}

pub fn build_execute_proposal_ix(
    executor: &Pubkey,
    proposal_id: u64,
    target_vault: Option<VaultKind>,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (dao, _) = derive_dao_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);
    let target_vault = match target_vault {
        Some(kind) => AccountMeta::new(derive_vault_pda(kind).0, false),
        None => none_account(),
    };

    program_ix(
        vec![
            AccountMeta::new_readonly(*executor, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(dao, false),
            AccountMeta::new(proposal, false),
            target_vault,
        ],
        burn_play::instruction::ExecuteProposal { proposal_id }.data(),
    )
}

pub fn build_execute_release_proposal_ix(
    executor: &Pubkey,
    proposal_id: u64,
    vault: VaultKind,
    recipient_token_account: &Pubkey,
    token_mint: &Pubkey,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (dao, _) = derive_dao_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);
    let (source_vault, _) = derive_vault_pda(vault);
    let (vault_authority, _) = derive_vault_authority_pda(vault);

    program_ix(
        vec![
            AccountMeta::new_readonly(*executor, true),
            AccountMeta::new_readonly(game_config, false),
            AccountMeta::new(dao, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new(source_vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(vault, token_mint), false),
            AccountMeta::new(*recipient_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::ExecuteReleaseProposal { proposal_id }.data(),
    )
}

fn slash_metas(player: &Pubkey, token_mint: &Pubkey) -> Vec<AccountMeta> {
    let (player_stake, _) = derive_player_stake_pda(player);
    let (staking_vault, _) = derive_vault_pda(VaultKind::Staking);
    let (staking_vault_authority, _) = derive_vault_authority_pda(VaultKind::Staking);
    let (reward_vault, _) = derive_vault_pda(VaultKind::Reward);

    vec![
        AccountMeta::new_readonly(*player, false),
        AccountMeta::new(player_stake, false),
        AccountMeta::new(staking_vault, false),
        AccountMeta::new_readonly(staking_vault_authority, false),
        AccountMeta::new(vault_token_account(VaultKind::Staking, token_mint), false),
        AccountMeta::new(reward_vault, false),
        AccountMeta::new(vault_token_account(VaultKind::Reward, token_mint), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ]
}

pub fn build_slash_stake_ix(
    authority: &Pubkey,
    player: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();

    let mut accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(game_config, false),
    ];
    accounts.extend(slash_metas(player, token_mint));

    program_ix(accounts, burn_play::instruction::SlashStake { amount }.data())
}

pub fn build_execute_slash_proposal_ix(
    executor: &Pubkey,
    proposal_id: u64,
    player: &Pubkey,
    token_mint: &Pubkey,
) -> Instruction {
    let (dao, _) = derive_dao_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);

    let mut accounts = vec![
        AccountMeta::new_readonly(*executor, true),
        AccountMeta::new(dao, false),
        AccountMeta::new(proposal, false),
    ];
    accounts.extend(slash_metas(player, token_mint));

    program_ix(
        accounts,
        burn_play::instruction::ExecuteSlashProposal { proposal_id }.data(),
    )
}

pub fn build_initialize_emergency_recovery_ix(authority: &Pubkey, members: &[Pubkey]) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (recovery, _) = derive_recovery_pda();

    program_ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(recovery, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::InitializeEmergencyRecovery {
            members: members.iter().map(anchor_key).collect(),
        }
        .data(),
    )
}

pub fn build_update_recovery_members_ix(authority: &Pubkey, members: &[Pubkey]) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (recovery, _) = derive_recovery_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(recovery, false),
        ],
        burn_play::instruction::UpdateRecoveryMembers {
            members: members.iter().map(anchor_key).collect(),
        }
        .data(),
    )
}

pub fn build_request_emergency_unlock_ix(
    member: &Pubkey,
    vault: VaultKind,
    recipient_token_account: &Pubkey,
) -> Instruction {
    let (recovery, _) = derive_recovery_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*member, true),
            AccountMeta::new(recovery, false),
        ],
        burn_play::instruction::RequestEmergencyUnlock {
            vault,
            recipient: anchor_key(recipient_token_account),
        }
        .data(),
    )
}

pub fn build_approve_emergency_unlock_ix(member: &Pubkey) -> Instruction {
    let (recovery, _) = derive_recovery_pda();

    program_ix(
        vec![
            AccountMeta::new_readonly(*member, true),
            AccountMeta::new(recovery, false),
        ],
        burn_play::instruction::ApproveEmergencyUnlock {}.data(),
    )
}

pub fn build_emergency_unlock_ix(
    member: &Pubkey,
    vault: VaultKind,
    recipient_token_account: &Pubkey,
    token_mint: &Pubkey,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (recovery, _) = derive_recovery_pda();
    let (vault_pda, _) = derive_vault_pda(vault);
    let (vault_authority, _) = derive_vault_authority_pda(vault);

    program_ix(
        vec![
            AccountMeta::new_readonly(*member, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(recovery, false),
            AccountMeta::new(vault_pda, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(vault, token_mint), false),
            AccountMeta::new(*recipient_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::EmergencyUnlock {}.data(),
    )
}

pub fn build_backup_withdraw_ix(
    member: &Pubkey,
    member_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (recovery_vault, _) = derive_vault_pda(VaultKind::Recovery);
    let (vault_authority, _) = derive_vault_authority_pda(VaultKind::Recovery);

    program_ix(
        vec![
            AccountMeta::new_readonly(*member, true),
            AccountMeta::new(game_config, false),
            AccountMeta::new(recovery_vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(VaultKind::Recovery, token_mint), false),
            AccountMeta::new(*member_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        burn_play::instruction::BackupWithdraw { amount }.data(),
    )
}

pub fn build_update_player_score_ix(
    player: &Pubkey,
    games_played: u32,
    games_won: u32,
    rating_delta: i32,
) -> Instruction {
    let (player_score, _) = derive_player_score_pda(player);

    program_ix(
        vec![
            AccountMeta::new(*player, true),
            AccountMeta::new(player_score, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::UpdatePlayerScore {
            games_played,
            games_won,
            rating_delta,
        }
        .data(),
    )
}

pub fn build_distribute_prize_ix(
    player: &Pubkey,
    authority: &Pubkey,
    player_token_account: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
    has_access_record: bool,
) -> Instruction {
    let (game_config, _) = derive_game_config_pda();
    let (player_score, _) = derive_player_score_pda(player);
    let (prize_vault, _) = derive_vault_pda(VaultKind::Prize);
    let (vault_authority, _) = derive_vault_authority_pda(VaultKind::Prize);
    let player_access = if has_access_record {
        AccountMeta::new_readonly(derive_player_access_pda(player).0, false)
    } else {
        none_account()
    };

    program_ix(
        vec![
            AccountMeta::new_readonly(*player, true),
            AccountMeta::new(*authority, true),
            AccountMeta::new(game_config, false),
            player_access,
            AccountMeta::new(player_score, false),
            AccountMeta::new(prize_vault, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(vault_token_account(VaultKind::Prize, token_mint), false),
            AccountMeta::new(*player_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        burn_play::instruction::DistributePrize { amount }.data(),
    )
}

// ======================== FIXTURE ========================

// Initialized game with a mint, all vaults and a funded authority
pub struct Game {
    pub svm: LiteSVM,
    pub authority: Keypair,
    pub mint: Pubkey,
    pub authority_ata: Pubkey,
}

impl Game {
    pub fn new(
        access_policy: AccessPolicy,
        play_parameter: u64,
        governance_mode: GovernanceMode,
    ) -> Self {
        Self::with_thresholds(access_policy, play_parameter, governance_mode, None, None)
    }

    pub fn with_thresholds(
        access_policy: AccessPolicy,
        play_parameter: u64,
        governance_mode: GovernanceMode,
        burn_threshold: Option<u64>,
        recovery_threshold: Option<u64>,
    ) -> Self {
        let mut svm = setup_svm();
        let authority = create_funded_account(&mut svm, 100 * LAMPORTS_PER_SOL);

        let mint = CreateMint::new(&mut svm, &authority)
            .authority(&authority.pubkey())
            .decimals(DECIMALS)
            .send()
            .expect("Mint creation should succeed");

        let authority_ata = CreateAssociatedTokenAccount::new(&mut svm, &authority, &mint)
            .owner(&authority.pubkey())
            .send()
            .expect("Authority ATA creation should succeed");

        MintTo::new(&mut svm, &authority, &mint, &authority_ata, 1_000_000_000)
            .owner(&authority)
            .send()
            .expect("Minting should succeed");

        let mut game = Game {
            svm,
            authority,
            mint,
            authority_ata,
        };

        let ix = build_initialize_game_ix(
            &game.authority.pubkey(),
            &game.mint,
            access_policy,
            play_parameter,
            governance_mode,
        );
        game.send_as_authority(ix)
            .expect("Game initialization should succeed");

        for kind in ALL_VAULTS {
            let threshold = match kind {
                VaultKind::Burn => burn_threshold,
                VaultKind::Recovery => recovery_threshold,
                _ => None,
            };
            let ix = build_initialize_vault_ix(&game.authority.pubkey(), &game.mint, kind, threshold);
            game.send_as_authority(ix)
                .expect("Vault initialization should succeed");
        }

        game
    }

    // Sends a transaction paid by the first signer
    pub fn send(&mut self, ixs: &[Instruction], signers: &[&Keypair]) -> TransactionResult {
        // Identical transactions would otherwise be rejected as already processed
        self.svm.expire_blockhash();
        let tx = Transaction::new_signed_with_payer(
            ixs,
            Some(&signers[0].pubkey()),
            signers,
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }

    pub fn send_as_authority(&mut self, ix: Instruction) -> TransactionResult {
        self.svm.expire_blockhash();
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.authority.pubkey()),
            &[&self.authority],
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }

    // Paid by `signer`, co-signed by the game authority
    pub fn send_with_authority(&mut self, ix: Instruction, signer: &Keypair) -> TransactionResult {
        self.svm.expire_blockhash();
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&signer.pubkey()),
            &[signer, &self.authority],
            self.svm.latest_blockhash(),
        );
        self.svm.send_transaction(tx)
    }

    // Funded wallet with an ATA holding `tokens`
    pub fn new_player(&mut self, tokens: u64) -> (Keypair, Pubkey) {
        let player = create_funded_account(&mut self.svm, 10 * LAMPORTS_PER_SOL);
        let ata = CreateAssociatedTokenAccount::new(&mut self.svm, &self.authority, &self.mint)
            .owner(&player.pubkey())
            .send()
            .expect("Player ATA creation should succeed");

        if tokens > 0 {
            MintTo::new(&mut self.svm, &self.authority, &self.mint, &ata, tokens)
                .owner(&self.authority)
                .send()
                .expect("Minting should succeed");
        }

        (player, ata)
    }

    pub fn fetch<T: AccountDeserialize>(&self, address: &Pubkey) -> T {
        fetch(&self.svm, address)
    }

    pub fn balance(&self, token_account: &Pubkey) -> u64 {
        token_balance(&self.svm, token_account)
    }

    pub fn vault_balance(&self, kind: VaultKind) -> u64 {
        token_balance(&self.svm, &vault_token_account(kind, &self.mint))
    }
}
