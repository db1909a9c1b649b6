//! Typed parameters of the vote instructions.

use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;

use crate::codec::{field, FieldValue, Fields};
use crate::layout::{VoteInstructionKind, PUBKEY_LEN};
use crate::util::bytes_ext::pubkey_from_slice;
use crate::{builder, VoteCodecError, VoteCodecResult};

/// Initial configuration of a vote account.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct VoteInit {
    /// The validator identity the account votes for
    pub node_pubkey: Pubkey,
    /// Key allowed to submit votes
    pub authorized_voter: Pubkey,
    /// Key allowed to withdraw from the account
    pub authorized_withdrawer: Pubkey,
    /// Percentage (`0..=100`) of rewards the validator keeps. Not checked here; the vote program
    /// rejects out of range values.
    pub commission: u8,
}
impl VoteInit {
    /// Creates a new [`VoteInit`]
    #[must_use]
    pub const fn new(
        node_pubkey: Pubkey,
        authorized_voter: Pubkey,
        authorized_withdrawer: Pubkey,
        commission: u8,
    ) -> Self {
        Self {
            node_pubkey,
            authorized_voter,
            authorized_withdrawer,
            commission,
        }
    }

    pub(crate) fn to_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(
            "node_pubkey",
            FieldValue::Bytes(self.node_pubkey.to_bytes().to_vec()),
        );
        fields.insert(
            "authorized_voter",
            FieldValue::Bytes(self.authorized_voter.to_bytes().to_vec()),
        );
        fields.insert(
            "authorized_withdrawer",
            FieldValue::Bytes(self.authorized_withdrawer.to_bytes().to_vec()),
        );
        fields.insert("commission", FieldValue::U8(self.commission));
        fields
    }

    pub(crate) fn from_fields(fields: &Fields) -> VoteCodecResult<Self> {
        Ok(Self {
            node_pubkey: pubkey_field(fields, "node_pubkey")?,
            authorized_voter: pubkey_field(fields, "authorized_voter")?,
            authorized_withdrawer: pubkey_field(fields, "authorized_withdrawer")?,
            commission: field(fields, "vote_init", "commission")?
                .as_u8()
                .ok_or_else(|| VoteCodecError::decoding("commission", "expected u8"))?,
        })
    }
}

fn pubkey_field(fields: &Fields, name: &'static str) -> VoteCodecResult<Pubkey> {
    match field(fields, "vote_init", name)?.as_bytes() {
        Some(bytes) if bytes.len() == PUBKEY_LEN => Ok(pubkey_from_slice(bytes)),
        _ => Err(VoteCodecError::decoding(
            name,
            "expected a 32 byte public key",
        )),
    }
}

/// Parameters of an `InitializeAccount` instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InitializeAccountParams {
    /// The vote account being initialized
    pub vote_pubkey: Pubkey,
    /// The validator identity, signs the instruction
    pub node_pubkey: Pubkey,
    /// Initial configuration
    pub vote_init: VoteInit,
}

/// Parameters of a `Withdraw` instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WithdrawParams {
    /// The vote account withdrawn from
    pub vote_pubkey: Pubkey,
    /// The withdraw authority, signs the instruction
    pub authorized_withdrawer_pubkey: Pubkey,
    /// Lamports to move. Encoded as `i64`, so at most [`i64::MAX`].
    pub lamports: u64,
    /// Recipient of the lamports
    pub to_pubkey: Pubkey,
}
impl WithdrawParams {
    pub(crate) fn lamports_fields(lamports: u64) -> VoteCodecResult<Fields> {
        let lamports = i64::try_from(lamports).map_err(|_| {
            VoteCodecError::encoding(
                "lamports",
                format!("{} does not fit the signed 64 bit wire field", lamports),
            )
        })?;
        let mut fields = Fields::new();
        fields.insert("lamports", FieldValue::I64(lamports));
        Ok(fields)
    }

    pub(crate) fn lamports_from_fields(fields: &Fields) -> VoteCodecResult<u64> {
        let lamports = field(fields, "Withdraw", "lamports")?
            .as_i64()
            .ok_or_else(|| VoteCodecError::decoding("lamports", "expected i64"))?;
        u64::try_from(lamports).map_err(|_| {
            VoteCodecError::decoding("lamports", format!("negative amount {}", lamports))
        })
    }
}

/// A decoded vote instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VoteInstruction {
    /// See [`InitializeAccountParams`]
    InitializeAccount(InitializeAccountParams),
    /// See [`WithdrawParams`]
    Withdraw(WithdrawParams),
}
impl VoteInstruction {
    /// Which instruction this is
    #[must_use]
    pub const fn kind(&self) -> VoteInstructionKind {
        match self {
            VoteInstruction::InitializeAccount(_) => VoteInstructionKind::InitializeAccount,
            VoteInstruction::Withdraw(_) => VoteInstructionKind::Withdraw,
        }
    }

    /// Builds the wire instruction for these parameters
    pub fn to_instruction(&self) -> VoteCodecResult<Instruction> {
        match self {
            VoteInstruction::InitializeAccount(params) => builder::initialize_account(
                &params.vote_pubkey,
                &params.node_pubkey,
                &params.vote_init,
            ),
            VoteInstruction::Withdraw(params) => builder::withdraw(
                &params.vote_pubkey,
                &params.authorized_withdrawer_pubkey,
                params.lamports,
                &params.to_pubkey,
            ),
        }
    }
}
impl From<InitializeAccountParams> for VoteInstruction {
    fn from(from: InitializeAccountParams) -> Self {
        Self::InitializeAccount(from)
    }
}
impl From<WithdrawParams> for VoteInstruction {
    fn from(from: WithdrawParams) -> Self {
        Self::Withdraw(from)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vote_init_fields_round_trip() {
        let init = VoteInit::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            42,
        );
        assert_eq!(VoteInit::from_fields(&init.to_fields()).unwrap(), init);
    }

    #[test]
    fn lamports_bounds() {
        assert!(WithdrawParams::lamports_fields(i64::MAX as u64).is_ok());
        assert!(matches!(
            WithdrawParams::lamports_fields(i64::MAX as u64 + 1),
            Err(VoteCodecError::Encoding {
                field: "lamports",
                ..
            })
        ));
        let mut negative = Fields::new();
        negative.insert("lamports", FieldValue::I64(-1));
        assert!(matches!(
            WithdrawParams::lamports_from_fields(&negative),
            Err(VoteCodecError::Decoding {
                what: "lamports",
                ..
            })
        ));
    }
}
