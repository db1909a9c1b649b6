//! Well-known keys and sizes used by vote instructions.

pub use solana_program::sysvar::{clock, rent};

solana_program::declare_id!("Vote111111111111111111111111111111111111111");

/// Bytes reserved for a vote account's state when it is created.
///
/// This is fixed by the vote program version in use, not derived from anything in this crate. Use
/// [`create_account_and_initialize_with_space`](crate::builder::create_account_and_initialize_with_space)
/// when targeting a version with a different state size.
pub const VOTE_STATE_SPACE: u64 = 3731;
