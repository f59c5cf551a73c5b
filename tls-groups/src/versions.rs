use crate::enums::ProtocolVersion;

/// The span of protocol versions a handshake may end up using.
///
/// A client offers every version it has enabled, so its range runs from the
/// earliest to the latest of those.  A server has already negotiated a single
/// version by the time it chooses groups, and uses that version as both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionRange {
    earliest: ProtocolVersion,
    latest: ProtocolVersion,
}

impl VersionRange {
    /// A range covering exactly `version`.
    pub fn single(version: ProtocolVersion) -> Self {
        Self {
            earliest: version,
            latest: version,
        }
    }

    /// The range spanned by `versions`.
    ///
    /// Versions with no TLS equivalent are ignored; returns `None` if nothing
    /// is left.
    pub fn spanning(versions: &[ProtocolVersion]) -> Option<Self> {
        let mut known = versions
            .iter()
            .copied()
            .filter_map(|v| v.tls_equivalent().map(|minor| (minor, v)));

        let first = known.next()?;
        let (earliest, latest) = known.fold((first, first), |(lo, hi), v| {
            (if v.0 < lo.0 { v } else { lo }, if v.0 > hi.0 { v } else { hi })
        });

        Some(Self {
            earliest: earliest.1,
            latest: latest.1,
        })
    }

    /// The earliest version in the range.
    pub fn earliest(&self) -> ProtocolVersion {
        self.earliest
    }

    /// The latest version in the range.
    pub fn latest(&self) -> ProtocolVersion {
        self.latest
    }

    /// Whether TLS 1.3 rules may apply to this handshake.
    pub fn post13_active(&self) -> bool {
        self.latest.is_tls13()
    }

    /// Whether TLS 1.2-and-earlier rules may apply to this handshake.
    pub fn pre13_active(&self) -> bool {
        !self.earliest.is_tls13()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_range_spans_offered_versions() {
        let range = VersionRange::spanning(&[
            ProtocolVersion::TLSv1_3,
            ProtocolVersion::TLSv1_2,
            ProtocolVersion::Unknown(0x7f1c),
        ])
        .unwrap();
        assert_eq!(range.earliest(), ProtocolVersion::TLSv1_2);
        assert_eq!(range.latest(), ProtocolVersion::TLSv1_3);
        assert!(range.post13_active());
        assert!(range.pre13_active());
    }

    #[test]
    fn server_range_is_a_single_version() {
        let range = VersionRange::single(ProtocolVersion::TLSv1_3);
        assert!(range.post13_active());
        assert!(!range.pre13_active());

        let range = VersionRange::single(ProtocolVersion::TLSv1_2);
        assert!(!range.post13_active());
        assert!(range.pre13_active());
    }

    #[test]
    fn no_known_versions() {
        assert_eq!(VersionRange::spanning(&[]), None);
        assert_eq!(
            VersionRange::spanning(&[ProtocolVersion::SSLv2]),
            None
        );
    }
}
