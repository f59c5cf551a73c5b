//! Error types used throughout tls-groups.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::msgs::enums::NamedGroup;


/// tls-groups reports negotiation and key exchange errors using this type.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// The peer sent us a message with invalid contents.
    InvalidMessage(InvalidMessage),

    /// The peer deviated from the standard TLS protocol.
    /// The parameter gives a hint where.
    PeerMisbehaved(PeerMisbehaved),

    /// A key exchange was requested for a group that is unknown to, or
    /// disabled in, the negotiation context.
    UnsupportedNamedGroup(NamedGroup),

    /// The cryptographic backend failed to perform an operation: key
    /// generation, encapsulation, decapsulation or key agreement.
    ///
    /// This is fatal to the handshake attempt that produced it.
    CryptoOperation(String),

    /// An object that was bound to one parameter set was asked to use
    /// a different one.
    ParameterMismatch {
        /// The parameter set the object is bound to.
        bound: &'static str,
        /// The parameter set that was requested.
        requested: &'static str,
    },

    /// The caller misused the API
    ///
    /// This only results from the ordering, dependencies or parameter values of calls,
    /// so (assuming parameter values are fixed) these can be determined and fixed by
    /// reading the code.  They are never caused by the values of untrusted data, or
    /// other non-determinism.
    ApiMisuse(ApiMisuse),

    /// Any other error.
    ///
    /// This variant should only be used when the error is not better described by a more
    /// specific variant. For example, if a custom crypto backend returns a
    /// backend specific error.
    ///
    /// Enums holding this variant will never compare equal to each other.
    Other(OtherError),
}

/// Determine which alert should be sent for a given error.
///
/// If this mapping fails, no alert is sent.
impl TryFrom<&Error> for AlertDescription {
    type Error = ();

    fn try_from(error: &Error) -> Result<Self, Self::Error> {
        Ok(match error {
            Error::InvalidMessage(e) => Self::from(*e),
            Error::PeerMisbehaved(e) => Self::from(*e),
            Error::UnsupportedNamedGroup(_) => Self::HandshakeFailure,
            Error::CryptoOperation(_) => Self::InternalError,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMessage(typ) => {
                write!(f, "received corrupt message of type {typ:?}")
            }
            Self::PeerMisbehaved(why) => write!(f, "peer misbehaved: {why:?}"),
            Self::UnsupportedNamedGroup(group) => {
                write!(f, "named group {group:?} is not supported")
            }
            Self::CryptoOperation(what) => write!(f, "cryptographic operation failed: {what}"),
            Self::ParameterMismatch { bound, requested } => write!(
                f,
                "restricted to parameter set {bound}, cannot use {requested}"
            ),
            Self::ApiMisuse(why) => write!(f, "API misuse: {why:?}"),
            Self::Other(err) => write!(f, "other error: {err}"),
        }
    }
}

impl StdError for Error {}

impl From<InvalidMessage> for Error {
    #[inline]
    fn from(e: InvalidMessage) -> Self {
        Self::InvalidMessage(e)
    }
}

impl From<PeerMisbehaved> for Error {
    #[inline]
    fn from(e: PeerMisbehaved) -> Self {
        Self::PeerMisbehaved(e)
    }
}

impl From<ApiMisuse> for Error {
    #[inline]
    fn from(e: ApiMisuse) -> Self {
        Self::ApiMisuse(e)
    }
}

impl From<OtherError> for Error {
    #[inline]
    fn from(value: OtherError) -> Self {
        Self::Other(value)
    }
}

enum_builder! {
    /// The TLS alerts an [`Error`] from this crate can map to.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum AlertDescription {
        /// handshake_failure
        HandshakeFailure => 0x28,
        /// illegal_parameter
        IllegalParameter => 0x2f,
        /// decode_error
        DecodeError => 0x32,
        /// internal_error
        InternalError => 0x50,
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // past tense, readable after 'the peer'
        match self {
            Self::HandshakeFailure => write!(
                f,
                "failed to negotiate an acceptable set of security parameters"
            ),
            Self::IllegalParameter => write!(
                f,
                "rejected a message because a field was incorrect or inconsistent"
            ),
            Self::DecodeError => write!(f, "failed to decode a message"),
            Self::InternalError => write!(f, "encountered an internal error"),
            Self::Unknown(n) => write!(f, "sent an unknown alert (0x{n:02x?})"),
        }
    }
}

/// A corrupt TLS message payload that resulted in an error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidMessage {
    /// Message is shorter than the expected length
    MessageTooShort,
    /// Missing data for the named handshake payload value
    MissingData(&'static str),
    /// Trailing data found for the named handshake payload value
    TrailingData(&'static str),
}

impl From<InvalidMessage> for AlertDescription {
    fn from(_: InvalidMessage) -> Self {
        Self::DecodeError
    }
}

/// The set of cases where we failed to complete a key exchange because we
/// thought the peer was misbehaving.
///
/// This is `non_exhaustive`: we might add or stop using items here in minor
/// versions.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PeerMisbehaved {
    /// The peer's key share had the wrong length or could not be decoded.
    InvalidKeyShare,
    /// The classical key agreement produced an all-zero shared secret,
    /// meaning the peer sent a small-order or otherwise degenerate public key.
    DegenerateSharedSecret,
}

impl From<PeerMisbehaved> for AlertDescription {
    fn from(e: PeerMisbehaved) -> Self {
        match e {
            PeerMisbehaved::DegenerateSharedSecret => Self::HandshakeFailure,
            PeerMisbehaved::InvalidKeyShare => Self::IllegalParameter,
        }
    }
}

/// Describes cases of API misuse
///
/// Variants here should be sufficiently detailed that the action needed is clear.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiMisuse {
    /// A key pair generator was asked for a key pair before being given a
    /// parameter set.
    KeyPairGeneratorNotInitialized,

    /// A client connection was built without any protocol version that takes part
    /// in group negotiation.
    NoActiveProtocolVersions,
}

mod other_error {
    use super::*;

    /// Any other error that cannot be expressed by a more specific [`Error`] variant.
    ///
    /// For example, an `OtherError` could be produced by a custom crypto backend
    /// exposing a backend specific error.
    ///
    /// Enums holding this type will never compare equal to each other.
    #[derive(Debug, Clone)]
    pub struct OtherError(Arc<dyn StdError + Send + Sync>);

    impl OtherError {
        /// Create a new `OtherError` from any error type.
        pub fn new(err: impl StdError + Send + Sync + 'static) -> Self {
            Self(Arc::new(err))
        }
    }

    impl PartialEq<Self> for OtherError {
        fn eq(&self, _other: &Self) -> bool {
            false
        }
    }

    impl fmt::Display for OtherError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for OtherError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.0.as_ref())
        }
    }
}

pub use other_error::OtherError;
