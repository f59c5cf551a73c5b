use crate::enums::ProtocolVersion;
use crate::msgs::enums::NamedGroup;

/// Largest curve size of any known curve, in bits.
pub const MAXIMUM_CURVE_BITS: u32 = 571;
/// Largest curve size of any known characteristic-2 curve, in bits.
pub const MAXIMUM_CHAR2_CURVE_BITS: u32 = 571;
/// Largest curve size of any known prime curve, in bits.
pub const MAXIMUM_PRIME_CURVE_BITS: u32 = 521;
/// Largest modulus of any known finite field group, in bits.
pub const MAXIMUM_FINITE_FIELD_BITS: u32 = 8192;

// Names of the underlying curves, indexed by `id - sect163k1`.  These do not
// always match the group names.
static CURVE_NAMES: [&str; 41] = [
    "sect163k1",
    "sect163r1",
    "sect163r2",
    "sect193r1",
    "sect193r2",
    "sect233k1",
    "sect233r1",
    "sect239k1",
    "sect283k1",
    "sect283r1",
    "sect409k1",
    "sect409r1",
    "sect571k1",
    "sect571r1",
    "secp160k1",
    "secp160r1",
    "secp160r2",
    "secp192k1",
    "secp192r1",
    "secp224k1",
    "secp224r1",
    "secp256k1",
    "secp256r1",
    "secp384r1",
    "secp521r1",
    "brainpoolP256r1",
    "brainpoolP384r1",
    "brainpoolP512r1",
    "X25519",
    "X448",
    "brainpoolP256r1",
    "brainpoolP384r1",
    "brainpoolP512r1",
    "Tc26-Gost-3410-12-256-paramSetA",
    "GostR3410-2001-CryptoPro-A",
    "GostR3410-2001-CryptoPro-B",
    "GostR3410-2001-CryptoPro-C",
    "Tc26-Gost-3410-12-512-paramSetA",
    "Tc26-Gost-3410-12-512-paramSetB",
    "Tc26-Gost-3410-12-512-paramSetC",
    "sm2p256v1",
];

static FINITE_FIELD_NAMES: [&str; 5] = [
    "ffdhe2048",
    "ffdhe3072",
    "ffdhe4096",
    "ffdhe6144",
    "ffdhe8192",
];

const SECT163K1: u16 = 0x0001;
const SECT571R1: u16 = 0x000e;
const SECP160K1: u16 = 0x000f;
const SECP256K1: u16 = 0x0016;
const BRAINPOOLP256R1: u16 = 0x001a;
const BRAINPOOLP512R1: u16 = 0x001c;
const X25519: u16 = 0x001d;
const X448: u16 = 0x001e;
const BRAINPOOLP256R1TLS13: u16 = 0x001f;
const BRAINPOOLP512R1TLS13: u16 = 0x0021;
const GC256A: u16 = 0x0022;
const GC512C: u16 = 0x0028;
const CURVE_SM2: u16 = 0x0029;
const FFDHE2048: u16 = 0x0100;
const FFDHE8192: u16 = 0x0104;
const EXPLICIT_PRIME: u16 = 0xff01;
const EXPLICIT_CHAR2: u16 = 0xff02;

/// Classification of group identifiers.
///
/// These are total over the 16-bit id space: an id this crate knows nothing
/// about simply answers `false`, `0` or `None`.
impl NamedGroup {
    /// Whether this group may be negotiated under `version`.
    ///
    /// TLS 1.3 dropped the binary curves, the smaller prime curves, the
    /// RFC 7027 brainpool curves, the GOST curves and the explicit-curve
    /// wildcards.  Earlier versions cannot use the RFC 8734 brainpool
    /// curves or curveSM2.
    pub fn can_be_negotiated(self, version: ProtocolVersion) -> bool {
        let id = u16::from(self);
        let forbidden = if version.is_tls13() {
            (SECT163K1..=SECP256K1).contains(&id)
                || (BRAINPOOLP256R1..=BRAINPOOLP512R1).contains(&id)
                || (GC256A..=GC512C).contains(&id)
                || (EXPLICIT_PRIME..=EXPLICIT_CHAR2).contains(&id)
        } else {
            (BRAINPOOLP256R1TLS13..=BRAINPOOLP512R1TLS13).contains(&id) || id == CURVE_SM2
        };

        !forbidden && self.is_valid()
    }

    /// A specific group, a private-use id, or an explicit-curve wildcard.
    pub fn is_valid(self) -> bool {
        self.refers_to_specific_group()
            || self.is_private()
            || (EXPLICIT_PRIME..=EXPLICIT_CHAR2).contains(&u16::from(self))
    }

    /// Private-use ranges: `0x01FC..=0x01FF` (FFDHE) and `0xFE00..=0xFEFF` (ECDHE).
    pub fn is_private(self) -> bool {
        let id = u16::from(self);
        (id >> 2) == 0x7f || (id >> 8) == 0xfe
    }

    /// Binary-field curves, including the explicit char2 wildcard.
    pub fn is_char2_curve(self) -> bool {
        let id = u16::from(self);
        (SECT163K1..=SECT571R1).contains(&id) || id == EXPLICIT_CHAR2
    }

    /// Prime-field curves, including the explicit prime wildcard.
    pub fn is_prime_curve(self) -> bool {
        let id = u16::from(self);
        (SECP160K1..=CURVE_SM2).contains(&id) || id == EXPLICIT_PRIME
    }

    /// Any single, named elliptic curve.
    pub fn refers_to_specific_curve(self) -> bool {
        (SECT163K1..=CURVE_SM2).contains(&u16::from(self))
    }

    /// One of the RFC 7919 finite field groups.
    pub fn refers_to_specific_finite_field(self) -> bool {
        (FFDHE2048..=FFDHE8192).contains(&u16::from(self))
    }

    /// A Kyber KEM, alone or in a hybrid.
    pub fn refers_to_specific_pqc(self) -> bool {
        matches!(
            self,
            Self::kyber512
                | Self::kyber768
                | Self::kyber1024
                | Self::secp256Kyber512
                | Self::secp384Kyber768
                | Self::secp521Kyber1024
                | Self::X25519Kyber512
                | Self::X25519Kyber768
                | Self::X448Kyber768
        )
    }

    /// A specific curve, finite field or PQC group.
    pub fn refers_to_specific_group(self) -> bool {
        self.refers_to_specific_curve()
            || self.refers_to_specific_finite_field()
            || self.refers_to_specific_pqc()
    }

    /// A curve usable for ECDH.
    pub fn refers_to_ecdh_curve(self) -> bool {
        self.refers_to_specific_curve()
    }

    /// A curve usable for signatures: any specific curve except the XDH ones.
    pub fn refers_to_ecdsa_curve(self) -> bool {
        self.refers_to_specific_curve() && !self.refers_to_xdh_curve()
    }

    /// X25519 or X448.
    pub fn refers_to_xdh_curve(self) -> bool {
        (X25519..=X448).contains(&u16::from(self))
    }

    /// Strength of the curve underlying this group.  Zero if there is none.
    ///
    /// Hybrid groups report the strength of their classical half.
    pub fn curve_bits(self) -> u32 {
        match self {
            Self::secp160k1 | Self::secp160r1 | Self::secp160r2 => 160,
            Self::sect163k1 | Self::sect163r1 | Self::sect163r2 => 163,
            Self::secp192k1 | Self::secp192r1 => 192,
            Self::sect193r1 | Self::sect193r2 => 193,
            Self::secp224k1 | Self::secp224r1 => 224,
            Self::sect233k1 | Self::sect233r1 => 233,
            Self::sect239k1 => 239,
            Self::X25519 | Self::X25519Kyber512 | Self::X25519Kyber768 => 252,
            Self::brainpoolP256r1
            | Self::brainpoolP256r1tls13
            | Self::curveSM2
            | Self::GC256A
            | Self::GC256B
            | Self::GC256C
            | Self::GC256D
            | Self::secp256k1
            | Self::secp256r1
            | Self::secp256Kyber512 => 256,
            Self::sect283k1 | Self::sect283r1 => 283,
            Self::brainpoolP384r1
            | Self::brainpoolP384r1tls13
            | Self::secp384r1
            | Self::secp384Kyber768 => 384,
            Self::sect409k1 | Self::sect409r1 => 409,
            Self::X448 | Self::X448Kyber768 => 446,
            Self::brainpoolP512r1
            | Self::brainpoolP512r1tls13
            | Self::GC512A
            | Self::GC512B
            | Self::GC512C => 512,
            Self::secp521r1 | Self::secp521Kyber1024 => 521,
            Self::sect571k1 | Self::sect571r1 => 571,
            _ => 0,
        }
    }

    /// Modulus size of a finite field group.  Zero for anything else.
    pub fn finite_field_bits(self) -> u32 {
        match self {
            Self::FFDHE2048 => 2048,
            Self::FFDHE3072 => 3072,
            Self::FFDHE4096 => 4096,
            Self::FFDHE6144 => 6144,
            Self::FFDHE8192 => 8192,
            _ => 0,
        }
    }

    /// Name of the underlying curve, for specific curves.
    pub fn curve_name(self) -> Option<&'static str> {
        match self.refers_to_specific_curve() {
            true => CURVE_NAMES
                .get(usize::from(u16::from(self) - SECT163K1))
                .copied(),
            false => None,
        }
    }

    /// Name of the finite field, for the RFC 7919 groups.
    pub fn finite_field_name(self) -> Option<&'static str> {
        match self.refers_to_specific_finite_field() {
            true => FINITE_FIELD_NAMES
                .get(usize::from(u16::from(self) - FFDHE2048))
                .copied(),
            false => None,
        }
    }

    /// Name of the post-quantum group.
    pub fn pqc_name(self) -> Option<&'static str> {
        Some(match self {
            Self::kyber512 => "kyber512",
            Self::kyber768 => "kyber768",
            Self::kyber1024 => "kyber1024",
            Self::secp256Kyber512 => "secp256Kyber512",
            Self::secp384Kyber768 => "secp384Kyber768",
            Self::secp521Kyber1024 => "secp521Kyber1024",
            Self::X25519Kyber512 => "x25519Kyber512",
            Self::X25519Kyber768 => "x25519Kyber768",
            Self::X448Kyber768 => "x448Kyber768",
            _ => return None,
        })
    }

    /// The name a crypto backend knows this group's parameters by.
    pub fn standard_name(self) -> Option<&'static str> {
        self.curve_name()
            .or_else(|| self.finite_field_name())
            .or_else(|| self.pqc_name())
    }

    /// The symbolic name of this group, as used in configuration.
    ///
    /// Private-use ids are `"PRIVATE"` and anything else unknown is `"UNKNOWN"`.
    pub fn name(self) -> &'static str {
        if self.is_private() {
            return "PRIVATE";
        }

        match self {
            Self::X25519 => "x25519",
            Self::X448 => "x448",
            Self::brainpoolP256r1tls13 => "brainpoolP256r1tls13",
            Self::brainpoolP384r1tls13 => "brainpoolP384r1tls13",
            Self::brainpoolP512r1tls13 => "brainpoolP512r1tls13",
            Self::GC256A => "GC256A",
            Self::GC256B => "GC256B",
            Self::GC256C => "GC256C",
            Self::GC256D => "GC256D",
            Self::GC512A => "GC512A",
            Self::GC512B => "GC512B",
            Self::GC512C => "GC512C",
            Self::curveSM2 => "curveSM2",
            Self::arbitrary_explicit_prime_curves => "arbitrary_explicit_prime_curves",
            Self::arbitrary_explicit_char2_curves => "arbitrary_explicit_char2_curves",
            _ => self.standard_name().unwrap_or("UNKNOWN"),
        }
    }

    /// `name(id)`, with the id in decimal.
    pub fn text(self) -> String {
        format!("{}({})", self.name(), u16::from(self))
    }
}
