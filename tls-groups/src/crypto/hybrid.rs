//! X25519 combined with a Kyber KEM.
//!
//! Shares and secrets are the classical element followed by the KEM
//! element, with no length prefixes:
//!
//! - initiator share: `x25519_public || kem_encapsulation_key`
//! - responder share: `x25519_public || kem_ciphertext`
//! - shared secret: `x25519_secret || kem_secret`
//!
//! No key derivation is applied here; that is the key schedule's job.

use super::kem::{DecapsulationKey, KemKeyPairGenerator, KemParameterSet};
use super::kx::{ActiveKeyExchange, CompletedKeyExchange, SharedSecret, SupportedKxGroup};
use super::x25519::{self, X25519_LEN};
use crate::enums::ProtocolVersion;
use crate::error::{Error, PeerMisbehaved};
use crate::log::trace;
use crate::msgs::enums::NamedGroup;

/// A hybrid of X25519 and one Kyber parameter set.
#[derive(Debug)]
pub struct HybridDomain {
    name: NamedGroup,
    kem: KemParameterSet,
}

/// x25519Kyber512: X25519 with Kyber512.
pub static X25519_KYBER512: HybridDomain = HybridDomain {
    name: NamedGroup::X25519Kyber512,
    kem: KemParameterSet::Kyber512,
};

/// x25519Kyber768: X25519 with Kyber768.
pub static X25519_KYBER768: HybridDomain = HybridDomain {
    name: NamedGroup::X25519Kyber768,
    kem: KemParameterSet::Kyber768,
};

impl HybridDomain {
    /// The KEM half of this hybrid.
    pub fn kem(&self) -> KemParameterSet {
        self.kem
    }

    /// Begin an exchange as the initiator, generating both ephemeral key pairs.
    pub fn create_agreement(&self) -> Result<HybridAgreement, Error> {
        let classical = x25519::KeyExchange::generate();
        let (kem, kem_pub) = KemKeyPairGenerator::restricted(self.kem).generate()?;

        let mut pub_key = Vec::with_capacity(self.layout().initiator_share_len());
        pub_key.extend_from_slice(classical.pub_key());
        pub_key.extend_from_slice(&kem_pub);

        Ok(HybridAgreement {
            name: self.name,
            layout: self.layout(),
            classical,
            kem,
            pub_key,
        })
    }

    /// Answer an initiator's share as the responder.
    ///
    /// Returns our reply share and the combined secret.
    pub fn respond(&self, initiator_share: &[u8]) -> Result<CompletedKeyExchange, Error> {
        let (classical_share, kem_share) = self
            .layout()
            .split(initiator_share, self.kem.encapsulation_key_len())
            .ok_or(PeerMisbehaved::InvalidKeyShare)?;

        let classical = x25519::KeyExchange::generate();
        let mut pub_key = Vec::with_capacity(self.layout().responder_share_len());
        pub_key.extend_from_slice(classical.pub_key());

        let classical_secret = classical.agree(classical_share)?;
        let (ciphertext, kem_secret) = self.kem.encapsulate(kem_share)?;
        pub_key.extend_from_slice(&ciphertext);

        trace!("responded to {:?} share", self.name);
        Ok(CompletedKeyExchange {
            group: self.name,
            pub_key,
            secret: combine(&classical_secret, &kem_secret),
        })
    }

    fn layout(&self) -> Layout {
        Layout {
            classical_share_len: X25519_LEN,
            kem: self.kem,
        }
    }
}

impl SupportedKxGroup for HybridDomain {
    fn start(&self) -> Result<Box<dyn ActiveKeyExchange>, Error> {
        Ok(Box::new(self.create_agreement()?))
    }

    fn start_and_complete(&self, peer_pub_key: &[u8]) -> Result<CompletedKeyExchange, Error> {
        self.respond(peer_pub_key)
    }

    fn name(&self) -> NamedGroup {
        self.name
    }

    fn usable_for_version(&self, version: ProtocolVersion) -> bool {
        version.is_tls13()
    }
}

/// The initiator's half of a hybrid exchange.
///
/// Owns both ephemeral private keys until [`ActiveKeyExchange::complete()`]
/// consumes it.
pub struct HybridAgreement {
    name: NamedGroup,
    layout: Layout,
    classical: x25519::KeyExchange,
    kem: DecapsulationKey,
    pub_key: Vec<u8>,
}

impl ActiveKeyExchange for HybridAgreement {
    fn complete(self: Box<Self>, peer_pub_key: &[u8]) -> Result<SharedSecret, Error> {
        let Self {
            layout,
            classical,
            kem,
            ..
        } = *self;

        let (classical_share, ciphertext) = layout
            .split(peer_pub_key, layout.kem.ciphertext_len())
            .ok_or(PeerMisbehaved::InvalidKeyShare)?;

        let classical_secret = classical.agree(classical_share)?;
        let kem_secret = kem.decapsulate(ciphertext)?;

        Ok(combine(&classical_secret, &kem_secret))
    }

    fn pub_key(&self) -> &[u8] {
        &self.pub_key
    }

    fn group(&self) -> NamedGroup {
        self.name
    }
}

impl core::fmt::Debug for HybridAgreement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HybridAgreement")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn combine(classical: &SharedSecret, kem: &SharedSecret) -> SharedSecret {
    let mut secret = Vec::with_capacity(classical.secret_bytes().len() + kem.secret_bytes().len());
    secret.extend_from_slice(classical.secret_bytes());
    secret.extend_from_slice(kem.secret_bytes());
    SharedSecret::from(secret)
}

#[derive(Clone, Copy, Debug)]
struct Layout {
    /// Length of classical key share.
    classical_share_len: usize,

    /// The KEM, which fixes the length of the other element.
    kem: KemParameterSet,
}

impl Layout {
    fn initiator_share_len(&self) -> usize {
        self.classical_share_len + self.kem.encapsulation_key_len()
    }

    fn responder_share_len(&self) -> usize {
        self.classical_share_len + self.kem.ciphertext_len()
    }

    /// Return the classical and KEM component of a share.
    fn split<'a>(&self, share: &'a [u8], kem_share_len: usize) -> Option<(&'a [u8], &'a [u8])> {
        if share.len() != self.classical_share_len + kem_share_len {
            return None;
        }

        Some(share.split_at(self.classical_share_len))
    }
}
