//! [`Discriminant`] type and relevant extras

use std::fmt::{Display, Formatter};
use std::io::Write;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::util::bytes_ext::{ReadExt, WriteExt};
use crate::{VoteCodecError, VoteCodecResult};

/// The leading tag of every vote instruction's data: a `u32` written little-endian.
///
/// Values are allocated by the vote program itself and are never compacted, so a gap in the
/// numbering (as between `0` and `3`) is a reserved range rather than a mistake.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Discriminant(u32);
impl Discriminant {
    /// The serialized width of a discriminant
    pub const LEN: usize = 4;

    /// Creates a discriminant from its raw value
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The raw value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Reads the discriminant at the front of `data` without consuming anything else.
    pub fn peek(data: &[u8]) -> VoteCodecResult<Self> {
        let mut buf = data;
        Self::deserialize(&mut buf).map_err(|_| {
            VoteCodecError::decoding(
                "discriminant",
                format!(
                    "need {} bytes, instruction data has {}",
                    Self::LEN,
                    data.len()
                ),
            )
        })
    }
}
impl Display for Discriminant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<u32> for Discriminant {
    fn from(from: u32) -> Self {
        Self(from)
    }
}
impl BorshSerialize for Discriminant {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u32_le(self.0)
    }
}
impl BorshDeserialize for Discriminant {
    fn deserialize(buf: &mut &[u8]) -> std::io::Result<Self> {
        Ok(Self(buf.read_u32_le()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn discriminant_borsh_test() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..128 {
            let value: u32 = rng.gen();
            let discriminant = Discriminant::from_u32(value);
            let bytes = discriminant
                .try_to_vec()
                .unwrap_or_else(|_| panic!("Could not serialize: {}", value));
            assert_eq!(bytes, value.to_le_bytes());
            let de_discriminant = Discriminant::try_from_slice(&bytes)
                .unwrap_or_else(|_| panic!("Could not deserialize: {:?}", bytes));
            assert_eq!(discriminant, de_discriminant);
        }
    }

    #[test]
    fn peek_ignores_payload() {
        let data = [3, 0, 0, 0, 0xff, 0xff];
        assert_eq!(Discriminant::peek(&data).unwrap().value(), 3);
    }

    #[test]
    fn peek_short_data() {
        assert!(matches!(
            Discriminant::peek(&[0, 0, 0]),
            Err(VoteCodecError::Decoding { .. })
        ));
    }
}
