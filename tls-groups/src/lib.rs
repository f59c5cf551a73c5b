//! # tls-groups - named-group negotiation for TLS
//!
//! This crate holds the part of a TLS implementation that decides which key
//! exchange groups are offered, which ones the peer advertised, which one is
//! selected, and how a classical X25519 exchange is combined with a Kyber-family
//! KEM into one hybrid shared secret.
//!
//! It does not do any IO, does not run the handshake state machine, and does not
//! apply the key schedule to the secrets it produces.  Those belong to the
//! surrounding TLS stack.
//!
//! ## Design overview
//!
//! Things are built in three stages, each feeding the next:
//!
//! - The [`registry`] is a static table of every known [`NamedGroup`] and its fixed
//!   properties (family, strength, which protocol versions may negotiate it).
//! - A [`NegotiationContext`] is built once per TLS context.  It filters the
//!   registry by policy (FIPS mode, disabled families, what the [`CryptoBackend`]
//!   can do) and resolves the configured preference list.
//! - A [`ConnectionGroups`] is built once per handshake from the context, the
//!   active protocol-version range and any per-connection [`ConnectionParams`].
//!   It owns the ordered local group list and the peer's advertised list.
//!
//! The [`select`] functions then answer strength and server-selection queries
//! against a [`ConnectionGroups`].
//!
//! Independently, [`crypto::hybrid`] composes X25519 with round 3 Kyber into the
//! hybrid groups, enforcing that a degenerate (all-zero) X25519 secret is fatal.
//!
//! ```rust
//! use std::sync::Arc;
//! use tls_groups::crypto::DefaultBackend;
//! use tls_groups::{
//!     ConnectionGroups, ConnectionParams, ContextConfig, NamedGroup, NegotiationContext,
//!     ProtocolVersion,
//! };
//!
//! let config = ContextConfig::default().with_named_groups(["x25519Kyber768", "x25519"]);
//! let context = NegotiationContext::new(false, Arc::new(DefaultBackend), &config);
//!
//! let conn = ConnectionGroups::for_server(
//!     &context,
//!     &ConnectionParams::default(),
//!     ProtocolVersion::TLSv1_3,
//! );
//! assert_eq!(
//!     conn.local_groups(),
//!     vec![NamedGroup::X25519Kyber768, NamedGroup::X25519]
//! );
//! ```
//!
//! # Crate features
//!
//! - `logging`: this makes the crate depend on the `log` crate.  Configuration
//!   problems are reported at `warn!` and `error!` level, and group filtering
//!   decisions at `debug!` and `trace!` level.  The log messages never contain
//!   secret key data.  This feature is in the default set.

#![forbid(unsafe_code, unused_must_use)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::use_self,
    trivial_casts,
    trivial_numeric_casts,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates,
    unused_qualifications
)]

// log for logging (optional).
#[cfg(feature = "logging")]
#[allow(clippy::single_component_path_imports)]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! error    ( ($($tt:tt)*) => {{}} );
    // `warn` alone would be ambiguous with the built-in lint attribute
    macro_rules! _warn    ( ($($tt:tt)*) => {{}} );
    pub(crate) use _warn as warn;
    pub(crate) use {debug, error, trace};

}

#[macro_use]
mod msgs;
mod config;
mod connection;
mod context;
mod enums;
mod error;
mod policy;
mod versions;

pub mod crypto;
pub mod registry;
pub mod select;

/// Low-level wire encoding of the `supported_groups` extension.
pub mod internal {
    pub use crate::msgs::codec::{Codec, Reader};
    pub use crate::msgs::handshake::SupportedGroups;
}

pub use crate::config::{
    ConnectionParams, ContextConfig, ENV_DISABLE_CHAR2, ENV_ENABLE_FFDHE, ENV_NAMED_GROUPS,
};
pub use crate::connection::ConnectionGroups;
pub use crate::context::{GroupInfo, NegotiationContext};
pub use crate::crypto::{AlgorithmParameters, CryptoBackend};
pub use crate::enums::ProtocolVersion;
pub use crate::error::{
    AlertDescription, ApiMisuse, Error, InvalidMessage, OtherError, PeerMisbehaved,
};
pub use crate::msgs::enums::NamedGroup;
pub use crate::policy::{AlgorithmConstraints, CryptoPrimitive, DisabledAlgorithms, PermitAll};
pub use crate::registry::{GroupDescriptor, GroupFamily};
pub use crate::versions::VersionRange;
