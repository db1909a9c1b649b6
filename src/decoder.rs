//! Decoding and validation of raw vote instructions.
//!
//! Every decoder checks, in order, the program id, the key count and then the payload, so the
//! first failing check determines the error.

use log::{debug, trace};
use solana_program::instruction::Instruction;

use crate::codec::decode;
use crate::discriminant::Discriminant;
use crate::layout::VoteInstructionKind;
use crate::program;
use crate::types::{InitializeAccountParams, VoteInit, VoteInstruction, WithdrawParams};
use crate::util::assert::{assert_is_signer, assert_is_writable, assert_key_count};
use crate::{VoteCodecError, VoteCodecResult};

/// Fails unless `instruction` is addressed to the vote program.
pub fn check_program_id(instruction: &Instruction) -> VoteCodecResult<()> {
    if program::check_id(&instruction.program_id) {
        Ok(())
    } else {
        debug!(
            "Rejecting instruction for program `{}`",
            instruction.program_id
        );
        Err(VoteCodecError::InvalidProgram {
            actual: instruction.program_id,
            expected: program::id(),
        })
    }
}

/// Fails if `instruction` has fewer keys than `kind`'s role schema.
pub fn check_key_count(
    instruction: &Instruction,
    kind: VoteInstructionKind,
) -> VoteCodecResult<()> {
    assert_key_count(&instruction.accounts, kind.roles().len()).map_err(|error| {
        debug!("Rejecting {}: {}", kind, error);
        error
    })
}

/// Determines which vote instruction `instruction` is.
pub fn decode_instruction_type(instruction: &Instruction) -> VoteCodecResult<VoteInstructionKind> {
    check_program_id(instruction)?;
    let discriminant = Discriminant::peek(&instruction.data)?;
    let kind = VoteInstructionKind::from_discriminant(discriminant).ok_or(
        VoteCodecError::UnknownInstruction {
            discriminant: discriminant.value(),
        },
    )?;
    trace!("Discriminant `{}` is {}", discriminant, kind);
    Ok(kind)
}

/// Decodes an `InitializeAccount` instruction.
///
/// `vote_pubkey` is key 0 and `node_pubkey` key 3; keys 1 and 2 (the sysvars) are not inspected.
pub fn decode_initialize_account(
    instruction: &Instruction,
) -> VoteCodecResult<InitializeAccountParams> {
    let kind = VoteInstructionKind::InitializeAccount;
    check_program_id(instruction)?;
    check_key_count(instruction, kind)?;

    let fields = decode(kind.layout(), &instruction.data)?;
    let vote_init = fields
        .get("vote_init")
        .and_then(|value| value.as_struct())
        .ok_or_else(|| VoteCodecError::decoding(kind.layout().name, "missing `vote_init`"))?;
    Ok(InitializeAccountParams {
        vote_pubkey: instruction.accounts[0].pubkey,
        node_pubkey: instruction.accounts[3].pubkey,
        vote_init: VoteInit::from_fields(vote_init)?,
    })
}

/// Decodes a `Withdraw` instruction.
///
/// Keys are `[vote, to, authorized withdrawer]`. A negative wire amount is rejected.
pub fn decode_withdraw(instruction: &Instruction) -> VoteCodecResult<WithdrawParams> {
    let kind = VoteInstructionKind::Withdraw;
    check_program_id(instruction)?;
    check_key_count(instruction, kind)?;

    let fields = decode(kind.layout(), &instruction.data)?;
    Ok(WithdrawParams {
        vote_pubkey: instruction.accounts[0].pubkey,
        to_pubkey: instruction.accounts[1].pubkey,
        authorized_withdrawer_pubkey: instruction.accounts[2].pubkey,
        lamports: WithdrawParams::lamports_from_fields(&fields)?,
    })
}

/// Decodes any supported vote instruction, dispatching on its discriminant.
pub fn decode_instruction(instruction: &Instruction) -> VoteCodecResult<VoteInstruction> {
    Ok(match decode_instruction_type(instruction)? {
        VoteInstructionKind::InitializeAccount => decode_initialize_account(instruction)?.into(),
        VoteInstructionKind::Withdraw => decode_withdraw(instruction)?.into(),
    })
}

/// Checks the signer and writable flags of every key covered by `kind`'s role schema.
///
/// The decoders read keys by position only; this is the stricter check a caller can opt into
/// before trusting an instruction built elsewhere. Extra keys are not inspected.
pub fn validate_account_roles(
    instruction: &Instruction,
    kind: VoteInstructionKind,
) -> VoteCodecResult<()> {
    check_program_id(instruction)?;
    check_key_count(instruction, kind)?;
    for (index, role) in kind.roles().iter().enumerate() {
        if role.is_signer {
            assert_is_signer(&instruction.accounts, index)?;
        }
        if role.is_writable {
            assert_is_writable(&instruction.accounts, index)?;
        }
    }
    Ok(())
}
