enum_builder! {
    /// The `NamedGroup` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals,
    /// including the private-use ranges.
    ///
    /// Classification of a group (its family, strength, and which protocol
    /// versions may negotiate it) lives in [`crate::registry`].
    #[repr(u16)]
    pub enum NamedGroup {
        sect163k1 => 0x0001,
        sect163r1 => 0x0002,
        sect163r2 => 0x0003,
        sect193r1 => 0x0004,
        sect193r2 => 0x0005,
        sect233k1 => 0x0006,
        sect233r1 => 0x0007,
        sect239k1 => 0x0008,
        sect283k1 => 0x0009,
        sect283r1 => 0x000a,
        sect409k1 => 0x000b,
        sect409r1 => 0x000c,
        sect571k1 => 0x000d,
        sect571r1 => 0x000e,
        secp160k1 => 0x000f,
        secp160r1 => 0x0010,
        secp160r2 => 0x0011,
        secp192k1 => 0x0012,
        secp192r1 => 0x0013,
        secp224k1 => 0x0014,
        secp224r1 => 0x0015,
        secp256k1 => 0x0016,
        secp256r1 => 0x0017,
        secp384r1 => 0x0018,
        secp521r1 => 0x0019,
        /// <https://www.iana.org/go/rfc7027>
        brainpoolP256r1 => 0x001a,
        /// <https://www.iana.org/go/rfc7027>
        brainpoolP384r1 => 0x001b,
        /// <https://www.iana.org/go/rfc7027>
        brainpoolP512r1 => 0x001c,
        X25519 => 0x001d,
        X448 => 0x001e,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP256r1tls13 => 0x001f,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP384r1tls13 => 0x0020,
        /// <https://www.iana.org/go/rfc8734>
        brainpoolP512r1tls13 => 0x0021,
        GC256A => 0x0022,
        GC256B => 0x0023,
        GC256C => 0x0024,
        GC256D => 0x0025,
        GC512A => 0x0026,
        GC512B => 0x0027,
        GC512C => 0x0028,
        /// <https://www.iana.org/go/rfc8998>
        curveSM2 => 0x0029,
        FFDHE2048 => 0x0100,
        FFDHE3072 => 0x0101,
        FFDHE4096 => 0x0102,
        FFDHE6144 => 0x0103,
        FFDHE8192 => 0x0104,
        kyber512 => 0x023a,
        kyber768 => 0x023c,
        kyber1024 => 0x023d,
        X25519Kyber512 => 0x2f39,
        secp256Kyber512 => 0x2f3a,
        secp384Kyber768 => 0x2f3c,
        secp521Kyber1024 => 0x2f3d,
        X448Kyber768 => 0x2f90,
        X25519Kyber768 => 0x6399,
        /// Explicitly-encoded prime curves (RFC 4492).
        arbitrary_explicit_prime_curves => 0xff01,
        /// Explicitly-encoded characteristic-2 curves (RFC 4492).
        arbitrary_explicit_char2_curves => 0xff02,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // These tests are intended to provide coverage and
    // check panic-safety of relatively unused values.

    use super::*;
    use crate::msgs::codec::Codec;

    #[test]
    fn test_enums() {
        test_enum16::<NamedGroup>(NamedGroup::sect163k1, NamedGroup::curveSM2);
        test_enum16::<NamedGroup>(NamedGroup::FFDHE2048, NamedGroup::FFDHE8192);
        test_enum16::<NamedGroup>(
            NamedGroup::arbitrary_explicit_prime_curves,
            NamedGroup::arbitrary_explicit_char2_curves,
        );
    }

    #[test]
    fn named_group_wire_values() {
        assert_eq!(u16::from(NamedGroup::X25519), 29);
        assert_eq!(u16::from(NamedGroup::FFDHE2048), 256);
        assert_eq!(NamedGroup::from(0x6399), NamedGroup::X25519Kyber768);
        assert_eq!(NamedGroup::from(0xfe00), NamedGroup::Unknown(0xfe00));
        assert_eq!(NamedGroup::X25519.to_array(), [0x00, 0x1d]);
    }

    #[test]
    fn named_group_debug() {
        assert_eq!(format!("{:?}", NamedGroup::secp256r1), "secp256r1");
        assert_eq!(format!("{:?}", NamedGroup::Unknown(0x1234)), "NamedGroup(0x1234)");
        assert_eq!(NamedGroup::X448.as_str(), Some("X448"));
        assert_eq!(NamedGroup::Unknown(7).as_str(), None);
    }

    pub(crate) fn test_enum8<T: for<'a> Codec<'a>>(first: T, last: T) {
        let first_v = get8(&first);
        let last_v = get8(&last);

        for val in first_v..last_v + 1 {
            let mut buf = Vec::new();
            val.encode(&mut buf);
            assert_eq!(buf.len(), 1);

            let t = T::read_bytes(&buf).unwrap();
            assert_eq!(val, get8(&t));
            println!("{val:?}");
        }
    }

    pub(crate) fn test_enum16<T: for<'a> Codec<'a>>(first: T, last: T) {
        let first_v = get16(&first);
        let last_v = get16(&last);

        for val in first_v..last_v + 1 {
            let mut buf = Vec::new();
            val.encode(&mut buf);
            assert_eq!(buf.len(), 2);

            let t = T::read_bytes(&buf).unwrap();
            assert_eq!(val, get16(&t));
            println!("{val:?}");
        }
    }

    fn get8<T: for<'a> Codec<'a>>(enum_value: &T) -> u8 {
        let enc = enum_value.get_encoding();
        assert_eq!(enc.len(), 1);
        enc[0]
    }

    fn get16<T: for<'a> Codec<'a>>(enum_value: &T) -> u16 {
        let enc = enum_value.get_encoding();
        assert_eq!(enc.len(), 2);
        u16::from_be_bytes([enc[0], enc[1]])
    }
}
