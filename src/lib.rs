#![warn(
    unused_import_braces,
    unused_imports,
    missing_docs,
    missing_debug_implementations,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Typed encoding and decoding of Solana vote program instructions.
//!
//! # How it works
//! Every supported instruction has an entry in the [layout registry](crate::layout): a
//! [`Discriminant`], a byte [`Layout`] and a positional account role schema.
//! 1. [`builder`] functions turn typed parameters into [`Fields`], [`encode`] them with the
//!    instruction's layout and lay out the account keys by role
//! 1. [`decode_instruction_type`] checks the program id and maps the leading discriminant back to
//!    a [`VoteInstructionKind`]
//! 1. [`decode_initialize_account`] and [`decode_withdraw`] check the program id and key count, then
//!    [`decode`] the data and reassign keys to roles by position
//!
//! Nothing here signs or sends transactions.
//!
//! [`Fields`]: crate::codec::Fields
//! [`Layout`]: crate::layout::Layout
//! [`encode`]: crate::codec::encode
//! [`decode`]: crate::codec::decode

pub mod builder;
pub mod codec;
pub mod decoder;
pub mod discriminant;
pub mod layout;
pub mod prelude;
pub mod program;
pub mod types;
pub mod util;

mod error;

pub use builder::{
    create_account_and_initialize, create_account_and_initialize_with_space, initialize_account,
    withdraw,
};
pub use decoder::{
    decode_initialize_account, decode_instruction, decode_instruction_type, decode_withdraw,
    validate_account_roles,
};
pub use discriminant::Discriminant;
pub use error::*;
pub use layout::VoteInstructionKind;
pub use solana_program;
pub use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
pub use types::{InitializeAccountParams, VoteInit, VoteInstruction, WithdrawParams};
