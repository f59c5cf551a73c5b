use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::ConnectionParams;
use crate::context::{create_candidates, GroupInfo, NegotiationContext};
use crate::enums::ProtocolVersion;
use crate::error::{ApiMisuse, Error};
use crate::log::{debug, trace};
use crate::msgs::codec::Codec;
use crate::msgs::enums::NamedGroup;
use crate::msgs::handshake::SupportedGroups;
use crate::versions::VersionRange;

/// Named-group state for one handshake.
///
/// The local list is fixed when this is built.  The peer's list is recorded
/// later, from the peer's `supported_groups` extension, and may be read from
/// any thread.
pub struct ConnectionGroups {
    local: Vec<Arc<GroupInfo>>,
    local_ecdsa: bool,
    peer: ArcSwap<Vec<Arc<GroupInfo>>>,
}

impl ConnectionGroups {
    /// Build the state for a client offering `active_versions`.
    pub fn for_client(
        context: &NegotiationContext,
        params: &ConnectionParams,
        active_versions: &[ProtocolVersion],
    ) -> Result<Self, Error> {
        let range = VersionRange::spanning(active_versions)
            .ok_or(ApiMisuse::NoActiveProtocolVersions)?;
        Ok(Self::new(context, params, range))
    }

    /// Build the state for a server that negotiated `version`.
    pub fn for_server(
        context: &NegotiationContext,
        params: &ConnectionParams,
        version: ProtocolVersion,
    ) -> Self {
        Self::new(context, params, VersionRange::single(version))
    }

    /// Build the state for a handshake spanning `range`.
    pub fn new(context: &NegotiationContext, params: &ConnectionParams, range: VersionRange) -> Self {
        let overridden;
        let candidates = match &params.named_groups {
            Some(names) => {
                overridden = create_candidates(context.index(), names, "ConnectionParams.named_groups");
                &overridden[..]
            }
            None => context.candidates(),
        };

        let constraints = params.algorithm_constraints.as_ref();
        let mut local: Vec<Arc<GroupInfo>> = Vec::with_capacity(candidates.len());
        for &candidate in candidates {
            let Some(info) = context.info(candidate) else {
                continue;
            };

            if local
                .iter()
                .any(|existing| existing.group() == candidate)
            {
                continue;
            }

            if info.is_active(constraints, &range) {
                local.push(Arc::clone(info));
            } else {
                trace!("{info} is not active for {range:?}");
            }
        }

        let local_ecdsa = local.iter().any(|info| {
            let group = info.group();
            group.refers_to_ecdsa_curve() || group.refers_to_specific_pqc()
        });

        Self {
            local,
            local_ecdsa,
            peer: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Record the groups the peer advertised.
    ///
    /// Ids that are not in the local list are dropped.  A later call replaces
    /// the earlier list.
    pub fn notify_peer_data(&self, groups: &[NamedGroup]) {
        let resolved: Vec<Arc<GroupInfo>> = groups
            .iter()
            .filter_map(|group| {
                self.local
                    .iter()
                    .find(|info| info.group() == *group)
                    .cloned()
            })
            .collect();

        let previous = self.peer.swap(Arc::new(resolved));
        if !previous.is_empty() {
            debug!("replacing previously recorded peer groups");
        }
    }

    /// Decode a `supported_groups` extension body and record it.
    pub fn notify_peer_extension(&self, body: &[u8]) -> Result<(), Error> {
        let SupportedGroups(groups) = SupportedGroups::read_bytes(body)?;
        self.notify_peer_data(&groups);
        Ok(())
    }

    /// The peer's recognised groups, in the peer's order.  Empty until recorded.
    pub fn peer(&self) -> Arc<Vec<Arc<GroupInfo>>> {
        self.peer.load_full()
    }

    /// The peer's list if we have one, otherwise our own.
    pub fn effective_peer(&self) -> Vec<Arc<GroupInfo>> {
        let peer = self.peer.load();
        match peer.is_empty() {
            true => self.local.clone(),
            false => Vec::clone(&peer),
        }
    }

    /// Whether `group` is in the local list.
    pub fn has_local(&self, group: NamedGroup) -> bool {
        self.local
            .iter()
            .any(|info| info.group() == group)
    }

    /// The local groups in preference order.
    pub fn local_groups(&self) -> Vec<NamedGroup> {
        self.local
            .iter()
            .map(|info| info.group())
            .collect()
    }

    /// Whether any local group can carry ECDSA (or is post-quantum).
    pub fn has_any_ecdsa_local(&self) -> bool {
        self.local_ecdsa
    }

    /// Our `supported_groups` extension body.
    pub fn supported_groups_extension(&self) -> Vec<u8> {
        SupportedGroups(self.local_groups()).get_encoding()
    }
}

impl core::fmt::Debug for ConnectionGroups {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConnectionGroups")
            .field("local", &self.local_groups())
            .field("local_ecdsa", &self.local_ecdsa)
            .field(
                "peer",
                &self
                    .peer
                    .load()
                    .iter()
                    .map(|info| info.group())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::crypto::{AlgorithmParameters, CryptoBackend};
    use crate::policy::DisabledAlgorithms;

    #[derive(Debug)]
    struct Everything;

    impl CryptoBackend for Everything {
        fn has_named_group(&self, _: NamedGroup) -> bool {
            true
        }

        fn named_group_parameters(&self, group: NamedGroup) -> Result<AlgorithmParameters, Error> {
            AlgorithmParameters::for_group(group).ok_or(Error::UnsupportedNamedGroup(group))
        }
    }

    fn context(names: &[&str]) -> NegotiationContext {
        NegotiationContext::new(
            false,
            Arc::new(Everything),
            &ContextConfig::default().with_named_groups(names.iter().copied()),
        )
    }

    #[test]
    fn tls13_server_drops_legacy_groups() {
        let ctx = context(&["x25519", "sect283k1", "ffdhe2048", "brainpoolP256r1", "secp256r1"]);
        let conn = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_3);
        assert_eq!(
            conn.local_groups(),
            vec![NamedGroup::X25519, NamedGroup::FFDHE2048, NamedGroup::secp256r1]
        );
        assert!(!conn.has_local(NamedGroup::sect283k1));
    }

    #[test]
    fn client_spanning_versions_keeps_both_kinds() {
        let ctx = context(&["brainpoolP256r1tls13", "brainpoolP256r1", "secp256r1"]);
        let conn = ConnectionGroups::for_client(
            &ctx,
            &ConnectionParams::default(),
            &[ProtocolVersion::TLSv1_2, ProtocolVersion::TLSv1_3],
        )
        .unwrap();
        assert_eq!(
            conn.local_groups(),
            vec![
                NamedGroup::brainpoolP256r1tls13,
                NamedGroup::brainpoolP256r1,
                NamedGroup::secp256r1
            ]
        );

        let tls12 = ConnectionGroups::for_client(
            &ctx,
            &ConnectionParams::default(),
            &[ProtocolVersion::TLSv1_2],
        )
        .unwrap();
        assert_eq!(
            tls12.local_groups(),
            vec![NamedGroup::brainpoolP256r1, NamedGroup::secp256r1]
        );
    }

    #[test]
    fn client_without_versions_is_misuse() {
        let ctx = context(&["x25519"]);
        assert_eq!(
            ConnectionGroups::for_client(&ctx, &ConnectionParams::default(), &[]).unwrap_err(),
            Error::ApiMisuse(ApiMisuse::NoActiveProtocolVersions)
        );
    }

    #[test]
    fn duplicates_keep_first_position() {
        let ctx = context(&["secp384r1", "x25519", "SECP384R1"]);
        let conn = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_3);
        assert_eq!(
            conn.local_groups(),
            vec![NamedGroup::secp384r1, NamedGroup::X25519]
        );
    }

    #[test]
    fn override_and_constraints() {
        let ctx = context(&["x25519"]);
        let params = ConnectionParams::default()
            .with_named_groups(["secp256r1", "x448", "ffdhe3072", "x25519"])
            .with_algorithm_constraints(Arc::new(DisabledAlgorithms::new(["XDH", "ffdhe3072"])));
        let conn = ConnectionGroups::for_server(&ctx, &params, ProtocolVersion::TLSv1_3);
        assert_eq!(conn.local_groups(), vec![NamedGroup::secp256r1]);
        assert!(conn.has_any_ecdsa_local());
    }

    #[test]
    fn ecdsa_flag() {
        let conn = ConnectionGroups::for_server(
            &context(&["x25519", "ffdhe2048"]),
            &ConnectionParams::default(),
            ProtocolVersion::TLSv1_3,
        );
        assert!(!conn.has_any_ecdsa_local());

        let conn = ConnectionGroups::for_server(
            &context(&["x25519Kyber768"]),
            &ConnectionParams::default(),
            ProtocolVersion::TLSv1_3,
        );
        assert!(conn.has_any_ecdsa_local());
    }

    #[test]
    fn peer_data_is_resolved_against_local() {
        let ctx = context(&["x25519", "secp256r1"]);
        let conn = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_3);
        assert!(conn.peer().is_empty());
        assert_eq!(conn.effective_peer().len(), 2);

        conn.notify_peer_data(&[NamedGroup::Unknown(0x1234), NamedGroup::secp256r1, NamedGroup::X448]);
        let peer = conn.peer();
        assert_eq!(peer.len(), 1);
        assert_eq!(peer[0].group(), NamedGroup::secp256r1);
        assert_eq!(conn.effective_peer().len(), 1);

        conn.notify_peer_data(&[NamedGroup::Unknown(0x1234)]);
        assert!(conn.peer().is_empty());
        assert_eq!(conn.effective_peer().len(), 2);
    }

    #[test]
    fn extension_round_trip() {
        let ctx = context(&["x25519", "secp256r1"]);
        let conn = ConnectionGroups::for_server(&ctx, &ConnectionParams::default(), ProtocolVersion::TLSv1_3);
        let body = conn.supported_groups_extension();
        assert_eq!(body, vec![0x00, 0x04, 0x00, 0x1d, 0x00, 0x17]);

        conn.notify_peer_extension(&[0x00, 0x04, 0x00, 0x17, 0xfe, 0x00])
            .unwrap();
        assert_eq!(conn.peer()[0].group(), NamedGroup::secp256r1);

        assert!(conn
            .notify_peer_extension(&[0x00, 0x04, 0x00])
            .is_err());
    }
}
