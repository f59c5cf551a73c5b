use rand_core::OsRng;

use super::kx::{ActiveKeyExchange, SharedSecret, SupportedKxGroup};
use crate::error::{Error, PeerMisbehaved};
use crate::log::trace;
use crate::msgs::enums::NamedGroup;

/// Length of an X25519 public key or shared secret.
pub(crate) const X25519_LEN: usize = 32;

/// X25519 key exchange, backed by `x25519-dalek`.
#[derive(Debug)]
pub struct X25519;

/// The X25519 key exchange group.
pub static X25519_KX: &dyn SupportedKxGroup = &X25519;

impl SupportedKxGroup for X25519 {
    fn start(&self) -> Result<Box<dyn ActiveKeyExchange>, Error> {
        Ok(Box::new(KeyExchange::generate()))
    }

    fn name(&self) -> NamedGroup {
        NamedGroup::X25519
    }
}

/// An ephemeral X25519 key pair, waiting for the peer's share.
pub(crate) struct KeyExchange {
    priv_key: x25519_dalek::EphemeralSecret,
    pub_key: x25519_dalek::PublicKey,
}

impl KeyExchange {
    pub(crate) fn generate() -> Self {
        let priv_key = x25519_dalek::EphemeralSecret::random_from_rng(OsRng);
        Self {
            pub_key: (&priv_key).into(),
            priv_key,
        }
    }

    /// Agree with `peer`, rejecting malformed keys and degenerate results.
    ///
    /// A peer key of small order forces the all-zero secret; that is a fatal
    /// handshake failure rather than something to continue with.
    pub(crate) fn agree(self, peer: &[u8]) -> Result<SharedSecret, Error> {
        let peer_array: [u8; X25519_LEN] = peer
            .try_into()
            .map_err(|_| Error::from(PeerMisbehaved::InvalidKeyShare))?;
        let their_pub = x25519_dalek::PublicKey::from(peer_array);
        let shared_secret = self.priv_key.diffie_hellman(&their_pub);

        if !shared_secret.was_contributory() {
            trace!("X25519 agreement produced the all-zero secret");
            return Err(PeerMisbehaved::DegenerateSharedSecret.into());
        }

        Ok(SharedSecret::from(&shared_secret.as_bytes()[..]))
    }
}

impl ActiveKeyExchange for KeyExchange {
    fn complete(self: Box<Self>, peer_pub_key: &[u8]) -> Result<SharedSecret, Error> {
        (*self).agree(peer_pub_key)
    }

    fn pub_key(&self) -> &[u8] {
        self.pub_key.as_bytes()
    }

    fn group(&self) -> NamedGroup {
        NamedGroup::X25519
    }
}
