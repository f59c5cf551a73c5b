//! Cryptographic capabilities consumed by negotiation: key exchange groups
//! and the backend that reports which groups are available.

use core::fmt::Debug;

use crate::error::Error;
use crate::msgs::enums::NamedGroup;
use crate::registry;

/// Key exchange interfaces.
pub mod kx;

/// X25519 key exchange.
pub mod x25519;

/// Kyber key encapsulation.
pub mod kem;

/// X25519 + Kyber hybrid key exchange.
pub mod hybrid;

mod default_backend;

pub use kx::{
    ActiveKeyExchange, CompletedKeyExchange, KeyExchangeAlgorithm, SharedSecret, SupportedKxGroup,
};
pub use default_backend::{DefaultBackend, ALL_KX_GROUPS};

/// What a negotiation context needs from a cryptography implementation.
///
/// The backend is consulted once per group when a
/// [`NegotiationContext`](crate::NegotiationContext) is built; its answers
/// decide which groups are enabled.
pub trait CryptoBackend: Send + Sync + Debug {
    /// Whether this backend implements `group` at all.
    fn has_named_group(&self, group: NamedGroup) -> bool;

    /// Fetch the parameters for `group`.
    ///
    /// Failure here disables the group for the lifetime of the context.
    fn named_group_parameters(&self, group: NamedGroup) -> Result<AlgorithmParameters, Error>;

    /// The key exchange implementation for `group`, if this backend has one.
    fn kx_group(&self, group: NamedGroup) -> Option<&'static dyn SupportedKxGroup> {
        let _ = group;
        None
    }
}

/// Parameters describing a group, as reported by a [`CryptoBackend`].
///
/// These are what algorithm constraints inspect alongside the family name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmParameters {
    /// The group these parameters are for.
    pub group: NamedGroup,
    /// The family algorithm name, such as `"EC"` or `"XDH"`.
    pub algorithm: &'static str,
    /// The backend name of the group, such as `"secp256r1"`.
    pub standard_name: &'static str,
}

impl AlgorithmParameters {
    /// Parameters for a group in the registry table, derived from its descriptor.
    pub fn for_group(group: NamedGroup) -> Option<Self> {
        let descriptor = registry::lookup(group)?;
        Some(Self {
            group,
            algorithm: descriptor.family().algorithm_name(),
            standard_name: descriptor.standard_name()?,
        })
    }
}
