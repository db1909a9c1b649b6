//! General imports for `vote_codec`.
pub use crate::{
    builder::{
        create_account_and_initialize, create_account_and_initialize_with_space,
        initialize_account, withdraw,
    },
    codec::{decode, encode, FieldValue, Fields},
    decoder::{
        check_key_count, check_program_id, decode_initialize_account, decode_instruction,
        decode_instruction_type, decode_withdraw, validate_account_roles,
    },
    discriminant::Discriminant,
    layout::{AccountRole, Layout, VoteInstructionKind},
    program::VOTE_STATE_SPACE,
    types::{InitializeAccountParams, VoteInit, VoteInstruction, WithdrawParams},
    AccountMeta, Instruction, Pubkey, VoteCodecError, VoteCodecResult,
};
