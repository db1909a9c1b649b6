//! Errors raised while building or decoding vote instructions.

use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use strum::{Display, EnumDiscriminants, IntoStaticStr};
use thiserror::Error;

/// A version of [`Result`] returned by every codec, builder and decoder function.
pub type VoteCodecResult<T = ()> = Result<T, VoteCodecError>;

/// Errors issued by the vote instruction codec.
///
/// The numeric code of a variant ([`VoteCodecErrorDiscriminants`]) is its declaration index and is
/// what [`ProgramError::Custom`] carries after conversion.
#[derive(Clone, Debug, Error, EnumDiscriminants, PartialEq, Eq)]
#[strum_discriminants(derive(Display, IntoStaticStr))]
pub enum VoteCodecError {
    /// The instruction was not addressed to the vote program
    #[error("Invalid program id `{actual}`, expected `{expected}`")]
    InvalidProgram {
        /// The program id found on the instruction
        actual: Pubkey,
        /// The vote program id
        expected: Pubkey,
    },
    /// The discriminant matched no registered layout
    #[error("Unknown vote instruction discriminant: `{discriminant}`")]
    UnknownInstruction {
        /// The discriminant read from the instruction data
        discriminant: u32,
    },
    /// The key list is shorter than the variant's role schema
    #[error("Invalid instruction; found {actual} keys, expected at least {expected}")]
    InsufficientAccounts {
        /// Number of keys on the instruction
        actual: usize,
        /// Number of roles the variant requires
        expected: usize,
    },
    /// A field could not be written
    #[error("Could not encode field `{field}`: {reason}")]
    Encoding {
        /// The layout field
        field: &'static str,
        /// What went wrong
        reason: String,
    },
    /// Data could not be read back into fields
    #[error("Could not decode `{what}`: {reason}")]
    Decoding {
        /// The layout or field being read
        what: &'static str,
        /// What went wrong
        reason: String,
    },
    /// A key whose role requires a signature is not marked as signer
    #[error("Account `{account}` at index {index} is not signer when should be")]
    AccountIsNotSigner {
        /// Position in the key list
        index: usize,
        /// The offending key
        account: Pubkey,
    },
    /// A key whose role requires write access is not marked writable
    #[error("Cannot write to account `{account}` at index {index} when should be able to")]
    CannotWrite {
        /// Position in the key list
        index: usize,
        /// The offending key
        account: Pubkey,
    },
}
impl VoteCodecError {
    /// Stable numeric code of this error.
    #[must_use]
    pub fn code(&self) -> u32 {
        VoteCodecErrorDiscriminants::from(self) as u32
    }

    pub(crate) fn encoding(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Encoding {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn decoding(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Decoding {
            what,
            reason: reason.into(),
        }
    }
}
impl From<VoteCodecError> for ProgramError {
    fn from(from: VoteCodecError) -> Self {
        ProgramError::Custom(from.code())
    }
}
