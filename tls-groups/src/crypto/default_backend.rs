use super::hybrid::{X25519_KYBER512, X25519_KYBER768};
use super::kem::{KYBER1024, KYBER512, KYBER768};
use super::kx::SupportedKxGroup;
use super::x25519::X25519_KX;
use super::{AlgorithmParameters, CryptoBackend};
use crate::error::Error;
use crate::msgs::enums::NamedGroup;

/// A list of all the key exchange groups supported by [`DefaultBackend`].
pub static ALL_KX_GROUPS: &[&dyn SupportedKxGroup] = &[
    &X25519_KYBER768,
    X25519_KX,
    &X25519_KYBER512,
    KYBER512,
    KYBER768,
    KYBER1024,
];

/// A [`CryptoBackend`] built from `x25519-dalek` and `pqcrypto-kyber`.
///
/// It implements X25519, the three Kyber parameter sets and their X25519 hybrids.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBackend;

impl CryptoBackend for DefaultBackend {
    fn has_named_group(&self, group: NamedGroup) -> bool {
        self.kx_group(group).is_some()
    }

    fn named_group_parameters(&self, group: NamedGroup) -> Result<AlgorithmParameters, Error> {
        match self.has_named_group(group) {
            true => AlgorithmParameters::for_group(group).ok_or(Error::UnsupportedNamedGroup(group)),
            false => Err(Error::UnsupportedNamedGroup(group)),
        }
    }

    fn kx_group(&self, group: NamedGroup) -> Option<&'static dyn SupportedKxGroup> {
        ALL_KX_GROUPS
            .iter()
            .find(|kx| kx.name() == group)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advertised_groups() {
        let backend = DefaultBackend;
        for group in [
            NamedGroup::X25519,
            NamedGroup::kyber512,
            NamedGroup::kyber768,
            NamedGroup::kyber1024,
            NamedGroup::X25519Kyber512,
            NamedGroup::X25519Kyber768,
        ] {
            assert!(backend.has_named_group(group), "{group:?}");
            assert_eq!(
                backend
                    .named_group_parameters(group)
                    .unwrap()
                    .group,
                group
            );
        }

        for group in [NamedGroup::secp256r1, NamedGroup::FFDHE2048, NamedGroup::X448] {
            assert!(!backend.has_named_group(group));
            assert_eq!(
                backend.named_group_parameters(group),
                Err(Error::UnsupportedNamedGroup(group))
            );
        }
    }

    #[test]
    fn group_names_are_unique() {
        for (i, a) in ALL_KX_GROUPS.iter().enumerate() {
            for b in &ALL_KX_GROUPS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
