use core::fmt::Debug;

use zeroize::Zeroize;

use crate::enums::ProtocolVersion;
use crate::error::Error;
use crate::msgs::enums::NamedGroup;

/// A supported key exchange group.
///
/// This type carries both configuration and implementation. Specifically,
/// it has a TLS-level name expressed using the [`NamedGroup`] enum, and
/// a function which produces a [`ActiveKeyExchange`].
///
/// Compare with [`NamedGroup`], which carries solely a protocol identifier.
pub trait SupportedKxGroup: Send + Sync + Debug {
    /// Start a key exchange.
    ///
    /// This will prepare an ephemeral secret key in the supported group, and a corresponding
    /// public key. The key exchange can be completed by calling [`ActiveKeyExchange::complete()`]
    /// or discarded.
    ///
    /// # Errors
    ///
    /// This can fail if the random source fails during ephemeral key generation.
    fn start(&self) -> Result<Box<dyn ActiveKeyExchange>, Error>;

    /// Start and complete a key exchange, in one operation.
    ///
    /// The default implementation for this calls `start()` and then calls
    /// `complete()` on the result.  This is suitable for Diffie-Hellman-like
    /// key exchange algorithms, where there is not a data dependency between
    /// our key share (named "pub_key" in this API) and the peer's (`peer_pub_key`).
    ///
    /// If there is such a data dependency (like key encapsulation mechanisms), this
    /// function should be implemented.
    fn start_and_complete(&self, peer_pub_key: &[u8]) -> Result<CompletedKeyExchange, Error> {
        let kx = self.start()?;

        Ok(CompletedKeyExchange {
            group: kx.group(),
            pub_key: kx.pub_key().to_vec(),
            secret: kx.complete(peer_pub_key)?,
        })
    }

    /// Named group the SupportedKxGroup operates in.
    fn name(&self) -> NamedGroup;

    /// Return `true` if this group may be used under `version`.
    ///
    /// The default follows [`NamedGroup::can_be_negotiated()`].
    fn usable_for_version(&self, version: ProtocolVersion) -> bool {
        self.name()
            .can_be_negotiated(version)
    }
}

/// An in-progress key exchange originating from a [`SupportedKxGroup`].
pub trait ActiveKeyExchange: Send + Sync {
    /// Completes the key exchange, given the peer's public key.
    ///
    /// This method must return an error if `peer_pub_key` is invalid: either
    /// misencoded, or an invalid public key (such as, but not limited to, being
    /// in a small order subgroup).
    ///
    /// The shared secret is returned as a [`SharedSecret`] which can be constructed
    /// from a `&[u8]`.
    ///
    /// This consumes and so terminates the [`ActiveKeyExchange`].
    fn complete(self: Box<Self>, peer_pub_key: &[u8]) -> Result<SharedSecret, Error>;

    /// Return the public key being used.
    ///
    /// For hybrid groups this is the concatenation of the component shares,
    /// classical first.
    fn pub_key(&self) -> &[u8];

    /// Return the group being used.
    fn group(&self) -> NamedGroup;
}

/// The result from [`SupportedKxGroup::start_and_complete()`].
pub struct CompletedKeyExchange {
    /// Which group was used.
    pub group: NamedGroup,

    /// Our key share (sometimes a public key).
    pub pub_key: Vec<u8>,

    /// The computed shared secret.
    pub secret: SharedSecret,
}

impl Debug for CompletedKeyExchange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompletedKeyExchange")
            .field("group", &self.group)
            .field("pub_key_len", &self.pub_key.len())
            .finish_non_exhaustive()
    }
}

/// The result from [`ActiveKeyExchange::complete()`].
///
/// The bytes are zeroed when this is dropped.
pub struct SharedSecret {
    buf: Vec<u8>,
}

impl SharedSecret {
    /// Returns the shared secret as a slice of bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl From<&[u8]> for SharedSecret {
    fn from(source: &[u8]) -> Self {
        Self {
            buf: source.to_vec(),
        }
    }
}

impl From<Vec<u8>> for SharedSecret {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf }
    }
}

impl Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.buf.len())
            .finish_non_exhaustive()
    }
}

/// Describes supported key exchange mechanisms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyExchangeAlgorithm {
    /// Diffie-Hellman Key exchange (with only known parameters as defined in [RFC 7919]).
    ///
    /// [RFC 7919]: https://datatracker.ietf.org/doc/html/rfc7919
    DHE,
    /// Key exchange performed via elliptic curve Diffie-Hellman.
    ECDHE,
}

impl NamedGroup {
    /// Return the key exchange algorithm associated with this `NamedGroup`
    pub fn key_exchange_algorithm(self) -> KeyExchangeAlgorithm {
        match self.refers_to_specific_finite_field() {
            true => KeyExchangeAlgorithm::DHE,
            false => KeyExchangeAlgorithm::ECDHE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_debug_hides_contents() {
        let secret = SharedSecret::from(&[0xab; 32][..]);
        assert_eq!(secret.secret_bytes(), &[0xab; 32]);
        let debug = format!("{secret:?}");
        assert!(!debug.contains("171"));
        assert!(debug.contains("32"));
    }

    #[test]
    fn completed_key_exchange_debug_hides_secret() {
        let completed = CompletedKeyExchange {
            group: NamedGroup::X25519,
            pub_key: vec![0x11; 32],
            secret: SharedSecret::from(&[0xcd; 32][..]),
        };
        let debug = format!("{completed:?}");
        assert!(debug.contains("X25519"));
        assert!(debug.contains("pub_key_len: 32"));
        assert!(!debug.contains("205"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn key_exchange_algorithm() {
        assert_eq!(
            NamedGroup::FFDHE4096.key_exchange_algorithm(),
            KeyExchangeAlgorithm::DHE
        );
        assert_eq!(
            NamedGroup::secp384r1.key_exchange_algorithm(),
            KeyExchangeAlgorithm::ECDHE
        );
        assert_eq!(
            NamedGroup::X25519Kyber768.key_exchange_algorithm(),
            KeyExchangeAlgorithm::ECDHE
        );
    }
}
