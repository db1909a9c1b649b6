//! Helper utility functions

pub mod assert;
pub(crate) mod bytes_ext;
