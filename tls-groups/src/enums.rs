enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0002,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// The TLS minor version this version is equivalent to.
    ///
    /// DTLS versions map onto the TLS version they were derived from.  Returns
    /// `None` for SSLv2 and unknown values, which take no part in group negotiation.
    pub(crate) fn tls_equivalent(self) -> Option<u8> {
        Some(match self {
            Self::SSLv3 => 0,
            Self::TLSv1_0 => 1,
            Self::TLSv1_1 | Self::DTLSv1_0 => 2,
            Self::TLSv1_2 | Self::DTLSv1_2 => 3,
            Self::TLSv1_3 | Self::DTLSv1_3 => 4,
            _ => return None,
        })
    }

    /// Whether this version is TLS 1.3 (or its DTLS equivalent).
    pub fn is_tls13(self) -> bool {
        matches!(self.tls_equivalent(), Some(minor) if minor >= 4)
    }
}
