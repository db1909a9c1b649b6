//! Assertions over an instruction's account list.

use crate::{VoteCodecError, VoteCodecResult};
use solana_program::instruction::AccountMeta;

/// Asserts that `accounts` holds at least `expected` keys.
pub fn assert_key_count(accounts: &[AccountMeta], expected: usize) -> VoteCodecResult<()> {
    if accounts.len() >= expected {
        Ok(())
    } else {
        Err(VoteCodecError::InsufficientAccounts {
            actual: accounts.len(),
            expected,
        })
    }
}

/// Asserts that the account at `index` is a signer.
pub fn assert_is_signer(accounts: &[AccountMeta], index: usize) -> VoteCodecResult<()> {
    let account = account_at(accounts, index)?;
    if account.is_signer {
        Ok(())
    } else {
        Err(VoteCodecError::AccountIsNotSigner {
            index,
            account: account.pubkey,
        })
    }
}

/// Asserts that the account at `index` is writable.
pub fn assert_is_writable(accounts: &[AccountMeta], index: usize) -> VoteCodecResult<()> {
    let account = account_at(accounts, index)?;
    if account.is_writable {
        Ok(())
    } else {
        Err(VoteCodecError::CannotWrite {
            index,
            account: account.pubkey,
        })
    }
}

fn account_at(accounts: &[AccountMeta], index: usize) -> VoteCodecResult<&AccountMeta> {
    accounts
        .get(index)
        .ok_or(VoteCodecError::InsufficientAccounts {
            actual: accounts.len(),
            expected: index + 1,
        })
}
