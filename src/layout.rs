//! The layout registry: every vote instruction's discriminant, byte layout and account roles.

use static_assertions::const_assert_eq;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::discriminant::Discriminant;

/// Width and encoding of a single layout field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Unsigned byte
    U8,
    /// Little-endian `i64`
    I64,
    /// Fixed-width bytes copied verbatim, no length prefix
    Bytes(usize),
    /// Nested fixed-size layout
    Struct(&'static [Field]),
}
impl FieldKind {
    /// The encoded width of this field in bytes
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::I64 => 8,
            FieldKind::Bytes(len) => *len,
            FieldKind::Struct(fields) => fields_width(*fields),
        }
    }
}

/// A named field of a layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Field {
    /// Name used as the key of encoded/decoded field maps
    pub name: &'static str,
    /// How the field is encoded
    pub kind: FieldKind,
}
impl Field {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

const fn fields_width(fields: &[Field]) -> usize {
    let mut width = 0;
    let mut index = 0;
    while index < fields.len() {
        width += fields[index].kind.width();
        index += 1;
    }
    width
}

/// Byte layout of an instruction's data: the discriminant followed by `fields` in order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    /// Name of the layout, used in error messages
    pub name: &'static str,
    /// Leading tag
    pub discriminant: Discriminant,
    /// Payload fields after the discriminant
    pub fields: &'static [Field],
}
impl Layout {
    /// Width of the payload after the discriminant
    #[must_use]
    pub const fn payload_span(&self) -> usize {
        fields_width(self.fields)
    }

    /// Total width of the encoded data including the discriminant
    #[must_use]
    pub const fn span(&self) -> usize {
        Discriminant::LEN + self.payload_span()
    }
}

/// Positional role of a key in an instruction's account list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AccountRole {
    /// What the key is used for
    pub name: &'static str,
    /// Whether the key must sign
    pub is_signer: bool,
    /// Whether the key must be writable
    pub is_writable: bool,
}
impl AccountRole {
    const fn writable(name: &'static str) -> Self {
        Self {
            name,
            is_signer: false,
            is_writable: true,
        }
    }

    const fn readonly(name: &'static str) -> Self {
        Self {
            name,
            is_signer: false,
            is_writable: false,
        }
    }

    const fn signer(name: &'static str) -> Self {
        Self {
            name,
            is_signer: true,
            is_writable: false,
        }
    }
}

/// Width of a public key field
pub const PUBKEY_LEN: usize = 32;

/// The composite payload of [`VoteInstructionKind::InitializeAccount`].
pub const VOTE_INIT_FIELDS: &[Field] = &[
    Field::new("node_pubkey", FieldKind::Bytes(PUBKEY_LEN)),
    Field::new("authorized_voter", FieldKind::Bytes(PUBKEY_LEN)),
    Field::new("authorized_withdrawer", FieldKind::Bytes(PUBKEY_LEN)),
    Field::new("commission", FieldKind::U8),
];

/// Layout of [`VoteInstructionKind::InitializeAccount`]
pub const INITIALIZE_ACCOUNT_LAYOUT: Layout = Layout {
    name: "InitializeAccount",
    discriminant: Discriminant::from_u32(0),
    fields: &[Field::new("vote_init", FieldKind::Struct(VOTE_INIT_FIELDS))],
};

/// Layout of [`VoteInstructionKind::Withdraw`]
pub const WITHDRAW_LAYOUT: Layout = Layout {
    name: "Withdraw",
    discriminant: Discriminant::from_u32(3),
    fields: &[Field::new("lamports", FieldKind::I64)],
};

const_assert_eq!(fields_width(VOTE_INIT_FIELDS), 97);
const_assert_eq!(INITIALIZE_ACCOUNT_LAYOUT.span(), 101);
const_assert_eq!(WITHDRAW_LAYOUT.span(), 12);

const INITIALIZE_ACCOUNT_ROLES: &[AccountRole] = &[
    AccountRole::writable("vote"),
    AccountRole::readonly("rent_sysvar"),
    AccountRole::readonly("clock_sysvar"),
    AccountRole::signer("node"),
];

const WITHDRAW_ROLES: &[AccountRole] = &[
    AccountRole::writable("vote"),
    AccountRole::writable("recipient"),
    AccountRole::signer("authorized_withdrawer"),
];

/// The vote instructions this crate understands.
///
/// Discriminants `1` and `2` belong to vote program instructions outside this set and are left
/// unassigned here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum VoteInstructionKind {
    /// Initialize a freshly allocated vote account
    InitializeAccount,
    /// Withdraw lamports from a vote account
    Withdraw,
}
impl VoteInstructionKind {
    /// The registered layout of this instruction
    #[must_use]
    pub const fn layout(self) -> &'static Layout {
        match self {
            VoteInstructionKind::InitializeAccount => &INITIALIZE_ACCOUNT_LAYOUT,
            VoteInstructionKind::Withdraw => &WITHDRAW_LAYOUT,
        }
    }

    /// The leading tag of this instruction's data
    #[must_use]
    pub const fn discriminant(self) -> Discriminant {
        self.layout().discriminant
    }

    /// Positional roles of the account keys. Keys past the end are allowed and ignored.
    #[must_use]
    pub const fn roles(self) -> &'static [AccountRole] {
        match self {
            VoteInstructionKind::InitializeAccount => INITIALIZE_ACCOUNT_ROLES,
            VoteInstructionKind::Withdraw => WITHDRAW_ROLES,
        }
    }

    /// Finds the instruction registered under `discriminant`
    #[must_use]
    pub fn from_discriminant(discriminant: Discriminant) -> Option<Self> {
        Self::iter().find(|kind| kind.discriminant() == discriminant)
    }
}
