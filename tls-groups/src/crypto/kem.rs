//! Kyber key encapsulation, backed by the round 3 Kyber implementation in
//! `pqcrypto-kyber`.
//!
//! This is the Kyber the draft `kyber*` and `x25519Kyber*` codepoints were
//! assigned for, not FIPS 203 ML-KEM: the two agree on every length but
//! derive different secrets.
//!
//! The initiator of a KEM exchange generates a key pair and sends the
//! encapsulation key.  The responder encapsulates to it and replies with the
//! ciphertext; both ends then hold the same 32-byte secret.

use pqcrypto_kyber::{kyber1024, kyber512, kyber768};
use pqcrypto_traits::kem::{
    Ciphertext as BackendCiphertext, PublicKey as BackendPublicKey, SecretKey as BackendSecretKey,
    SharedSecret as BackendSharedSecret,
};

use super::kx::{ActiveKeyExchange, CompletedKeyExchange, SharedSecret, SupportedKxGroup};
use crate::error::{ApiMisuse, Error, PeerMisbehaved};
use crate::log::debug;
use crate::msgs::enums::NamedGroup;

/// One of the three Kyber parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KemParameterSet {
    /// NIST security category 1.
    Kyber512,
    /// NIST security category 3.
    Kyber768,
    /// NIST security category 5.
    Kyber1024,
}

impl KemParameterSet {
    /// The parameter set's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Kyber512 => "kyber512",
            Self::Kyber768 => "kyber768",
            Self::Kyber1024 => "kyber1024",
        }
    }

    /// The group that performs this KEM on its own.
    pub fn named_group(self) -> NamedGroup {
        match self {
            Self::Kyber512 => NamedGroup::kyber512,
            Self::Kyber768 => NamedGroup::kyber768,
            Self::Kyber1024 => NamedGroup::kyber1024,
        }
    }

    /// Length of an encoded encapsulation key.
    pub fn encapsulation_key_len(self) -> usize {
        match self {
            Self::Kyber512 => kyber512::public_key_bytes(),
            Self::Kyber768 => kyber768::public_key_bytes(),
            Self::Kyber1024 => kyber1024::public_key_bytes(),
        }
    }

    /// Length of a ciphertext.
    pub fn ciphertext_len(self) -> usize {
        match self {
            Self::Kyber512 => kyber512::ciphertext_bytes(),
            Self::Kyber768 => kyber768::ciphertext_bytes(),
            Self::Kyber1024 => kyber1024::ciphertext_bytes(),
        }
    }

    /// Length of the shared secret.
    pub fn shared_secret_len(self) -> usize {
        32
    }

    /// Encapsulate to `encapsulation_key`, returning the ciphertext and secret.
    ///
    /// A key of the wrong length is the peer's fault.
    pub fn encapsulate(self, encapsulation_key: &[u8]) -> Result<(Vec<u8>, SharedSecret), Error> {
        match self {
            Self::Kyber512 => encapsulate_with(encapsulation_key, kyber512::encapsulate),
            Self::Kyber768 => encapsulate_with(encapsulation_key, kyber768::encapsulate),
            Self::Kyber1024 => encapsulate_with(encapsulation_key, kyber1024::encapsulate),
        }
    }

    fn generate(self) -> (DecapsulationKey, Vec<u8>) {
        let (key, ek) = match self {
            Self::Kyber512 => {
                let (pk, sk) = kyber512::keypair();
                (SecretKey::Kyber512(sk), pk.as_bytes().to_vec())
            }
            Self::Kyber768 => {
                let (pk, sk) = kyber768::keypair();
                (SecretKey::Kyber768(sk), pk.as_bytes().to_vec())
            }
            Self::Kyber1024 => {
                let (pk, sk) = kyber1024::keypair();
                (SecretKey::Kyber1024(sk), pk.as_bytes().to_vec())
            }
        };
        (DecapsulationKey { key }, ek)
    }
}

/// Whether a [`KemKeyPairGenerator`] is tied to one parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterBinding {
    /// Any parameter set is accepted by the first initialisation.
    Unbound,
    /// Only this parameter set is ever accepted.
    Bound(KemParameterSet),
}

/// Generates Kyber key pairs for one parameter set.
///
/// A generator created with [`KemKeyPairGenerator::restricted()`] refuses to
/// be initialised with any other set.  An unbound generator binds itself to
/// the first set it is initialised with.
#[derive(Debug)]
pub struct KemKeyPairGenerator {
    binding: ParameterBinding,
}

impl KemKeyPairGenerator {
    /// An unbound generator.  It must be initialised before use.
    pub fn new() -> Self {
        Self {
            binding: ParameterBinding::Unbound,
        }
    }

    /// A generator bound to `set`, ready for use.
    pub fn restricted(set: KemParameterSet) -> Self {
        Self {
            binding: ParameterBinding::Bound(set),
        }
    }

    /// The current binding.
    pub fn binding(&self) -> ParameterBinding {
        self.binding
    }

    /// Select `set` for subsequent key generation.
    pub fn initialize(&mut self, set: KemParameterSet) -> Result<(), Error> {
        match self.binding {
            ParameterBinding::Bound(bound) if bound != set => {
                debug!(
                    "refusing to reinitialise {} generator as {}",
                    bound.name(),
                    set.name()
                );
                Err(Error::ParameterMismatch {
                    bound: bound.name(),
                    requested: set.name(),
                })
            }
            _ => {
                self.binding = ParameterBinding::Bound(set);
                Ok(())
            }
        }
    }

    /// Generate a fresh key pair: the private half, and the encoded public half.
    pub fn generate(&self) -> Result<(DecapsulationKey, Vec<u8>), Error> {
        match self.binding {
            ParameterBinding::Bound(set) => Ok(set.generate()),
            ParameterBinding::Unbound => Err(ApiMisuse::KeyPairGeneratorNotInitialized.into()),
        }
    }
}

impl Default for KemKeyPairGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The private half of a Kyber key pair.
///
/// The key is overwritten with zeros when this is dropped.
pub struct DecapsulationKey {
    key: SecretKey,
}

enum SecretKey {
    Kyber512(kyber512::SecretKey),
    Kyber768(kyber768::SecretKey),
    Kyber1024(kyber1024::SecretKey),
}

impl DecapsulationKey {
    /// The parameter set this key belongs to.
    pub fn parameter_set(&self) -> KemParameterSet {
        match self.key {
            SecretKey::Kyber512(_) => KemParameterSet::Kyber512,
            SecretKey::Kyber768(_) => KemParameterSet::Kyber768,
            SecretKey::Kyber1024(_) => KemParameterSet::Kyber1024,
        }
    }

    /// Recover the shared secret from `ciphertext`.
    pub fn decapsulate(&self, ciphertext: &[u8]) -> Result<SharedSecret, Error> {
        match &self.key {
            SecretKey::Kyber512(sk) => decapsulate_with(sk, ciphertext, kyber512::decapsulate),
            SecretKey::Kyber768(sk) => decapsulate_with(sk, ciphertext, kyber768::decapsulate),
            SecretKey::Kyber1024(sk) => decapsulate_with(sk, ciphertext, kyber1024::decapsulate),
        }
    }
}

impl Drop for DecapsulationKey {
    fn drop(&mut self) {
        match &mut self.key {
            SecretKey::Kyber512(sk) => wipe_secret_key(sk),
            SecretKey::Kyber768(sk) => wipe_secret_key(sk),
            SecretKey::Kyber1024(sk) => wipe_secret_key(sk),
        }
    }
}

impl core::fmt::Debug for DecapsulationKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecapsulationKey")
            .field("set", &self.parameter_set())
            .finish_non_exhaustive()
    }
}

fn encapsulate_with<P, C, S>(
    encapsulation_key: &[u8],
    encapsulate: fn(&P) -> (S, C),
) -> Result<(Vec<u8>, SharedSecret), Error>
where
    P: BackendPublicKey + Clone + Copy,
    C: BackendCiphertext,
    S: BackendSharedSecret + Clone + Copy,
{
    let pk = P::from_bytes(encapsulation_key).map_err(|_| PeerMisbehaved::InvalidKeyShare)?;
    let (mut ss, ct) = encapsulate(&pk);
    let secret = SharedSecret::from(ss.as_bytes());
    wipe_shared_secret(&mut ss);
    Ok((ct.as_bytes().to_vec(), secret))
}

fn decapsulate_with<K, C, S>(
    key: &K,
    ciphertext: &[u8],
    decapsulate: fn(&C, &K) -> S,
) -> Result<SharedSecret, Error>
where
    C: BackendCiphertext + Clone + Copy,
    S: BackendSharedSecret + Clone + Copy,
{
    let ct = C::from_bytes(ciphertext).map_err(|_| PeerMisbehaved::InvalidKeyShare)?;
    let mut ss = decapsulate(&ct, key);
    let secret = SharedSecret::from(ss.as_bytes());
    wipe_shared_secret(&mut ss);
    Ok(secret)
}

// The backend's key types are plain byte arrays without `Zeroize`, so they are
// replaced with an all-zero value.  `black_box` keeps that store from being
// optimised away as dead.
fn wipe_secret_key<K: BackendSecretKey + Clone>(key: &mut K) {
    if let Ok(blank) = K::from_bytes(&vec![0u8; key.as_bytes().len()]) {
        *key = blank;
    }
    let _ = core::hint::black_box(key);
}

fn wipe_shared_secret<S: BackendSharedSecret + Clone + Copy>(secret: &mut S) {
    if let Ok(blank) = S::from_bytes(&vec![0u8; secret.as_bytes().len()]) {
        *secret = blank;
    }
    let _ = core::hint::black_box(secret);
}

/// A pure Kyber key exchange group.
#[derive(Debug)]
pub struct KemGroup {
    set: KemParameterSet,
}

/// Kyber512 alone.
pub static KYBER512: &dyn SupportedKxGroup = &KemGroup {
    set: KemParameterSet::Kyber512,
};

/// Kyber768 alone.
pub static KYBER768: &dyn SupportedKxGroup = &KemGroup {
    set: KemParameterSet::Kyber768,
};

/// Kyber1024 alone.
pub static KYBER1024: &dyn SupportedKxGroup = &KemGroup {
    set: KemParameterSet::Kyber1024,
};

impl SupportedKxGroup for KemGroup {
    fn start(&self) -> Result<Box<dyn ActiveKeyExchange>, Error> {
        let (dk, pub_key) = KemKeyPairGenerator::restricted(self.set).generate()?;
        Ok(Box::new(KemKeyExchange { dk, pub_key }))
    }

    fn start_and_complete(&self, peer_pub_key: &[u8]) -> Result<CompletedKeyExchange, Error> {
        let (ciphertext, secret) = self.set.encapsulate(peer_pub_key)?;
        Ok(CompletedKeyExchange {
            group: self.name(),
            pub_key: ciphertext,
            secret,
        })
    }

    fn name(&self) -> NamedGroup {
        self.set.named_group()
    }
}

struct KemKeyExchange {
    dk: DecapsulationKey,
    pub_key: Vec<u8>,
}

impl ActiveKeyExchange for KemKeyExchange {
    fn complete(self: Box<Self>, peer_pub_key: &[u8]) -> Result<SharedSecret, Error> {
        self.dk.decapsulate(peer_pub_key)
    }

    fn pub_key(&self) -> &[u8] {
        &self.pub_key
    }

    fn group(&self) -> NamedGroup {
        self.dk.parameter_set().named_group()
    }
}
