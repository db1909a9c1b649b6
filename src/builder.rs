//! Builders for complete vote instructions.
//!
//! Account keys are laid out in the order of the instruction's [role schema](VoteInstructionKind::roles).
//! The vote program reads them by position, so the order is part of the wire format.

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::system_instruction;

use crate::codec::{encode, FieldValue, Fields};
use crate::layout::VoteInstructionKind;
use crate::program::{self, clock, rent, VOTE_STATE_SPACE};
use crate::types::{VoteInit, WithdrawParams};
use crate::VoteCodecResult;

fn account_metas(kind: VoteInstructionKind, keys: &[Pubkey]) -> Vec<AccountMeta> {
    debug_assert_eq!(keys.len(), kind.roles().len());
    kind.roles()
        .iter()
        .zip(keys)
        .map(|(role, key)| AccountMeta {
            pubkey: *key,
            is_signer: role.is_signer,
            is_writable: role.is_writable,
        })
        .collect()
}

/// Initializes a vote account.
///
/// Keys: `[vote (writable), rent sysvar, clock sysvar, node (signer)]`.
pub fn initialize_account(
    vote_pubkey: &Pubkey,
    node_pubkey: &Pubkey,
    vote_init: &VoteInit,
) -> VoteCodecResult<Instruction> {
    let kind = VoteInstructionKind::InitializeAccount;
    let mut fields = Fields::new();
    fields.insert("vote_init", FieldValue::Struct(vote_init.to_fields()));
    Ok(Instruction {
        program_id: program::id(),
        accounts: account_metas(kind, &[*vote_pubkey, rent::id(), clock::id(), *node_pubkey]),
        data: encode(kind.layout(), &fields)?,
    })
}

/// Withdraws `lamports` from a vote account to `to_pubkey`.
///
/// Keys: `[vote (writable), to (writable), authorized withdrawer (signer)]`.
/// Fails if `lamports` is above [`i64::MAX`].
pub fn withdraw(
    vote_pubkey: &Pubkey,
    authorized_withdrawer_pubkey: &Pubkey,
    lamports: u64,
    to_pubkey: &Pubkey,
) -> VoteCodecResult<Instruction> {
    let kind = VoteInstructionKind::Withdraw;
    Ok(Instruction {
        program_id: program::id(),
        accounts: account_metas(
            kind,
            &[*vote_pubkey, *to_pubkey, *authorized_withdrawer_pubkey],
        ),
        data: encode(kind.layout(), &WithdrawParams::lamports_fields(lamports)?)?,
    })
}

/// Allocates a vote account owned by the vote program and initializes it.
///
/// Returns the system `create_account` instruction followed by [`initialize_account`]. Both must
/// land in the same transaction; nothing here enforces that.
pub fn create_account_and_initialize(
    from_pubkey: &Pubkey,
    vote_pubkey: &Pubkey,
    vote_init: &VoteInit,
    lamports: u64,
) -> VoteCodecResult<Vec<Instruction>> {
    create_account_and_initialize_with_space(
        from_pubkey,
        vote_pubkey,
        vote_init,
        lamports,
        VOTE_STATE_SPACE,
    )
}

/// [`create_account_and_initialize`] with an explicit account size, for vote program versions
/// whose state is not [`VOTE_STATE_SPACE`] bytes.
pub fn create_account_and_initialize_with_space(
    from_pubkey: &Pubkey,
    vote_pubkey: &Pubkey,
    vote_init: &VoteInit,
    lamports: u64,
    space: u64,
) -> VoteCodecResult<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            from_pubkey,
            vote_pubkey,
            lamports,
            space,
            &program::id(),
        ),
        initialize_account(vote_pubkey, &vote_init.node_pubkey, vote_init)?,
    ])
}
