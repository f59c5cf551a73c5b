//! The static table of named groups this crate can negotiate, and the
//! classification of group identifiers.
//!
//! Every entry is immutable and lives for the whole program.  Identifiers
//! outside the table are still classified by the [`NamedGroup`] methods
//! defined here, but can never be enabled.

use core::fmt;

use crate::crypto::kx::KeyExchangeAlgorithm;
use crate::enums::ProtocolVersion;
use crate::msgs::enums::NamedGroup;

mod named_group;

pub use named_group::{
    MAXIMUM_CHAR2_CURVE_BITS, MAXIMUM_CURVE_BITS, MAXIMUM_FINITE_FIELD_BITS,
    MAXIMUM_PRIME_CURVE_BITS,
};

/// The broad kind of key exchange a group performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupFamily {
    /// Short Weierstrass elliptic curves, prime or binary.
    Ec,
    /// Montgomery curves used through X25519/X448.
    Xdh,
    /// RFC 7919 finite field Diffie-Hellman.
    DiffieHellman,
    /// Kyber KEMs, alone or combined with a classical curve.
    Pqc,
}

impl GroupFamily {
    /// The algorithm name that policy constraints are checked against.
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Self::Ec => "EC",
            Self::Xdh => "XDH",
            Self::DiffieHellman => "DiffieHellman",
            Self::Pqc => "PQC",
        }
    }
}

/// Fixed properties of one named group.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
    group: NamedGroup,
    family: GroupFamily,
}

impl GroupDescriptor {
    const fn new(group: NamedGroup, family: GroupFamily) -> Self {
        Self { group, family }
    }

    /// The group's identifier.
    pub fn group(&self) -> NamedGroup {
        self.group
    }

    /// Which family this group belongs to.
    pub fn family(&self) -> GroupFamily {
        self.family
    }

    /// The symbolic name used in configuration.
    pub fn name(&self) -> &'static str {
        self.group.name()
    }

    /// Display form, `name(id)`.
    pub fn text(&self) -> String {
        self.group.text()
    }

    /// The name a crypto backend knows this group by.
    pub fn standard_name(&self) -> Option<&'static str> {
        self.group.standard_name()
    }

    /// Curve strength; zero for non-curve groups.
    pub fn curve_bits(&self) -> u32 {
        self.group.curve_bits()
    }

    /// Finite field strength; zero for non-FFDHE groups.
    pub fn finite_field_bits(&self) -> u32 {
        self.group.finite_field_bits()
    }

    /// Strength relevant to `kind` of key exchange.
    pub fn bits(&self, kind: KeyExchangeAlgorithm) -> u32 {
        match kind {
            KeyExchangeAlgorithm::ECDHE => self.curve_bits(),
            KeyExchangeAlgorithm::DHE => self.finite_field_bits(),
        }
    }

    /// Whether this is a binary-field curve.
    pub fn is_char2(&self) -> bool {
        self.group.is_char2_curve()
    }

    /// Whether TLS 1.3 may negotiate this group.
    pub fn supported_post13(&self) -> bool {
        self.group
            .can_be_negotiated(ProtocolVersion::TLSv1_3)
    }

    /// Whether TLS 1.2 and earlier may negotiate this group.
    pub fn supported_pre13(&self) -> bool {
        self.group
            .can_be_negotiated(ProtocolVersion::TLSv1_2)
    }
}

impl fmt::Debug for GroupDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDescriptor")
            .field("group", &self.group)
            .field("family", &self.family)
            .finish()
    }
}

impl fmt::Display for GroupDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), u16::from(self.group))
    }
}

use GroupFamily::{DiffieHellman, Ec, Pqc, Xdh};

/// Every group that may take part in negotiation, in table order.
///
/// The GOST curves are recognised by [`NamedGroup`] but deliberately absent.
pub static ALL: &[GroupDescriptor] = &[
    GroupDescriptor::new(NamedGroup::sect163k1, Ec),
    GroupDescriptor::new(NamedGroup::sect163r1, Ec),
    GroupDescriptor::new(NamedGroup::sect163r2, Ec),
    GroupDescriptor::new(NamedGroup::sect193r1, Ec),
    GroupDescriptor::new(NamedGroup::sect193r2, Ec),
    GroupDescriptor::new(NamedGroup::sect233k1, Ec),
    GroupDescriptor::new(NamedGroup::sect233r1, Ec),
    GroupDescriptor::new(NamedGroup::sect239k1, Ec),
    GroupDescriptor::new(NamedGroup::sect283k1, Ec),
    GroupDescriptor::new(NamedGroup::sect283r1, Ec),
    GroupDescriptor::new(NamedGroup::sect409k1, Ec),
    GroupDescriptor::new(NamedGroup::sect409r1, Ec),
    GroupDescriptor::new(NamedGroup::sect571k1, Ec),
    GroupDescriptor::new(NamedGroup::sect571r1, Ec),
    GroupDescriptor::new(NamedGroup::secp160k1, Ec),
    GroupDescriptor::new(NamedGroup::secp160r1, Ec),
    GroupDescriptor::new(NamedGroup::secp160r2, Ec),
    GroupDescriptor::new(NamedGroup::secp192k1, Ec),
    GroupDescriptor::new(NamedGroup::secp192r1, Ec),
    GroupDescriptor::new(NamedGroup::secp224k1, Ec),
    GroupDescriptor::new(NamedGroup::secp224r1, Ec),
    GroupDescriptor::new(NamedGroup::secp256k1, Ec),
    GroupDescriptor::new(NamedGroup::secp256r1, Ec),
    GroupDescriptor::new(NamedGroup::secp384r1, Ec),
    GroupDescriptor::new(NamedGroup::secp521r1, Ec),
    GroupDescriptor::new(NamedGroup::brainpoolP256r1, Ec),
    GroupDescriptor::new(NamedGroup::brainpoolP384r1, Ec),
    GroupDescriptor::new(NamedGroup::brainpoolP512r1, Ec),
    GroupDescriptor::new(NamedGroup::X25519, Xdh),
    GroupDescriptor::new(NamedGroup::X448, Xdh),
    GroupDescriptor::new(NamedGroup::brainpoolP256r1tls13, Ec),
    GroupDescriptor::new(NamedGroup::brainpoolP384r1tls13, Ec),
    GroupDescriptor::new(NamedGroup::brainpoolP512r1tls13, Ec),
    GroupDescriptor::new(NamedGroup::curveSM2, Ec),
    GroupDescriptor::new(NamedGroup::FFDHE2048, DiffieHellman),
    GroupDescriptor::new(NamedGroup::FFDHE3072, DiffieHellman),
    GroupDescriptor::new(NamedGroup::FFDHE4096, DiffieHellman),
    GroupDescriptor::new(NamedGroup::FFDHE6144, DiffieHellman),
    GroupDescriptor::new(NamedGroup::FFDHE8192, DiffieHellman),
    GroupDescriptor::new(NamedGroup::kyber512, Pqc),
    GroupDescriptor::new(NamedGroup::kyber768, Pqc),
    GroupDescriptor::new(NamedGroup::kyber1024, Pqc),
    GroupDescriptor::new(NamedGroup::secp256Kyber512, Pqc),
    GroupDescriptor::new(NamedGroup::secp384Kyber768, Pqc),
    GroupDescriptor::new(NamedGroup::secp521Kyber1024, Pqc),
    GroupDescriptor::new(NamedGroup::X25519Kyber512, Pqc),
    GroupDescriptor::new(NamedGroup::X25519Kyber768, Pqc),
    GroupDescriptor::new(NamedGroup::X448Kyber768, Pqc),
];

/// Find a table entry by configuration name, ignoring ASCII case.
pub fn lookup_name(name: &str) -> Option<&'static GroupDescriptor> {
    ALL.iter()
        .find(|d| d.name().eq_ignore_ascii_case(name))
}

/// Find a table entry by identifier.
pub fn lookup(group: NamedGroup) -> Option<&'static GroupDescriptor> {
    ALL.iter().find(|d| d.group == group)
}

/// Whether a FIPS context may use `group`.
///
/// Only the NIST prime curves and the RFC 7919 finite fields qualify.
pub fn is_fips_named_group(group: NamedGroup) -> bool {
    matches!(
        group,
        NamedGroup::secp256r1
            | NamedGroup::secp384r1
            | NamedGroup::secp521r1
            | NamedGroup::FFDHE2048
            | NamedGroup::FFDHE3072
            | NamedGroup::FFDHE4096
            | NamedGroup::FFDHE6144
            | NamedGroup::FFDHE8192
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicates() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.group, b.group);
            }
        }
    }

    #[test]
    fn every_entry_is_named_and_valid() {
        for d in ALL {
            assert!(d.group.is_valid(), "{d}");
            assert!(d.standard_name().is_some(), "{d}");
            assert_ne!(d.name(), "UNKNOWN");
            assert!(d.curve_bits() == 0 || d.finite_field_bits() == 0, "{d}");
        }
    }

    #[test]
    fn gost_is_not_in_table() {
        assert!(lookup(NamedGroup::GC256A).is_none());
        assert!(lookup_name("GC512C").is_none());
        assert_eq!(NamedGroup::GC256A.name(), "GC256A");
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(
            lookup_name("X25519").map(GroupDescriptor::group),
            Some(NamedGroup::X25519)
        );
        assert_eq!(
            lookup_name("FFDHE2048").map(GroupDescriptor::group),
            Some(NamedGroup::FFDHE2048)
        );
        assert_eq!(
            lookup_name("X25519KYBER768").map(GroupDescriptor::group),
            Some(NamedGroup::X25519Kyber768)
        );
        assert!(lookup_name("curve25519").is_none());
    }

    #[test]
    fn descriptor_properties() {
        let d = lookup(NamedGroup::brainpoolP256r1tls13).unwrap();
        assert!(d.supported_post13());
        assert!(!d.supported_pre13());
        assert_eq!(d.bits(KeyExchangeAlgorithm::ECDHE), 256);
        assert_eq!(d.bits(KeyExchangeAlgorithm::DHE), 0);

        let d = lookup(NamedGroup::sect283k1).unwrap();
        assert!(d.is_char2());
        assert!(!d.supported_post13());
        assert!(d.supported_pre13());
        assert_eq!(d.family().algorithm_name(), "EC");

        let d = lookup(NamedGroup::FFDHE3072).unwrap();
        assert_eq!(d.bits(KeyExchangeAlgorithm::DHE), 3072);
        assert_eq!(d.family(), DiffieHellman);
        assert_eq!(d.to_string(), "ffdhe3072(257)");
    }

    #[test]
    fn fips_groups() {
        assert!(is_fips_named_group(NamedGroup::secp256r1));
        assert!(is_fips_named_group(NamedGroup::FFDHE8192));
        assert!(!is_fips_named_group(NamedGroup::X25519));
        assert!(!is_fips_named_group(NamedGroup::GC256A));
        assert!(!is_fips_named_group(NamedGroup::X25519Kyber768));
    }
}
