//! Wire-level types: the `NamedGroup` enum and the `supported_groups`
//! extension body.

#[macro_use]
mod macros;

pub(crate) mod codec;
pub(crate) mod enums;
pub(crate) mod handshake;

#[cfg(test)]
pub(crate) use enums::tests::test_enum8;
