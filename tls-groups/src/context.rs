use core::fmt;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::ContextConfig;
use crate::crypto::kx::{KeyExchangeAlgorithm, SupportedKxGroup};
use crate::crypto::{AlgorithmParameters, CryptoBackend};
use crate::error::Error;
use crate::log::{debug, error, trace, warn};
use crate::msgs::enums::NamedGroup;
use crate::policy::{AlgorithmConstraints, CryptoPrimitive};
use crate::registry::{self, GroupDescriptor};
use crate::versions::VersionRange;

/// Groups offered when the configuration does not name any.
pub(crate) static DEFAULT_CANDIDATES: &[NamedGroup] = &[
    NamedGroup::X25519,
    NamedGroup::X448,
    NamedGroup::secp256r1,
    NamedGroup::secp384r1,
    NamedGroup::secp521r1,
    NamedGroup::brainpoolP256r1tls13,
    NamedGroup::brainpoolP384r1tls13,
    NamedGroup::brainpoolP512r1tls13,
    NamedGroup::FFDHE2048,
    NamedGroup::FFDHE3072,
    NamedGroup::FFDHE4096,
];

/// A registry entry together with what a particular context decided about it.
#[derive(Debug)]
pub struct GroupInfo {
    descriptor: &'static GroupDescriptor,
    parameters: Option<AlgorithmParameters>,
    enabled: bool,
}

impl GroupInfo {
    /// The fixed properties of this group.
    pub fn descriptor(&self) -> &'static GroupDescriptor {
        self.descriptor
    }

    /// The group's identifier.
    pub fn group(&self) -> NamedGroup {
        self.descriptor.group()
    }

    /// Parameters fetched from the backend, if the group is enabled.
    pub fn parameters(&self) -> Option<&AlgorithmParameters> {
        self.parameters.as_ref()
    }

    /// Whether this context may use the group at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Strength for `kind` of key exchange.
    pub fn bits(&self, kind: KeyExchangeAlgorithm) -> u32 {
        self.descriptor.bits(kind)
    }

    /// Whether a handshake spanning `range` and bound by `constraints` may use this group.
    pub(crate) fn is_active(&self, constraints: &dyn AlgorithmConstraints, range: &VersionRange) -> bool {
        self.enabled
            && ((range.post13_active() && self.descriptor.supported_post13())
                || (range.pre13_active() && self.descriptor.supported_pre13()))
            && self.is_permitted_by(constraints)
    }

    fn is_permitted_by(&self, constraints: &dyn AlgorithmConstraints) -> bool {
        let Some(standard_name) = self.descriptor.standard_name() else {
            return false;
        };

        constraints.permits(CryptoPrimitive::KeyAgreement, standard_name, None)
            && constraints.permits(
                CryptoPrimitive::KeyAgreement,
                self.descriptor.family().algorithm_name(),
                self.parameters.as_ref(),
            )
    }
}

impl fmt::Display for GroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor, f)
    }
}

/// Named-group state shared by every connection of one TLS context.
///
/// This is built once, and immutable afterwards.
pub struct NegotiationContext {
    index: BTreeMap<u16, Arc<GroupInfo>>,
    candidates: Vec<NamedGroup>,
    backend: Arc<dyn CryptoBackend>,
    fips: bool,
}

impl NegotiationContext {
    /// Build the context.
    ///
    /// In FIPS mode groups outside the FIPS set are not indexed at all, so they
    /// behave exactly like unknown ids.  Every other table entry is indexed,
    /// and enabled only if policy allows it and `backend` can supply its
    /// parameters.
    pub fn new(fips: bool, backend: Arc<dyn CryptoBackend>, config: &ContextConfig) -> Self {
        let mut index = BTreeMap::new();

        for descriptor in registry::ALL {
            let group = descriptor.group();
            if fips && !registry::is_fips_named_group(group) {
                continue;
            }

            let info = Self::add_named_group(descriptor, backend.as_ref(), config);
            index.insert(u16::from(group), Arc::new(info));
        }

        let candidates = match &config.named_groups {
            Some(names) => create_candidates(&index, names, "TLS_NAMED_GROUPS"),
            None => DEFAULT_CANDIDATES.to_vec(),
        };

        debug!(
            "named groups: {} indexed, candidates {:?}",
            index.len(),
            candidates
        );

        Self {
            index,
            candidates,
            backend,
            fips,
        }
    }

    fn add_named_group(
        descriptor: &'static GroupDescriptor,
        backend: &dyn CryptoBackend,
        config: &ContextConfig,
    ) -> GroupInfo {
        let group = descriptor.group();
        let disable = (config.disable_char2 && descriptor.is_char2())
            || (config.disable_ffdhe && descriptor.finite_field_bits() > 0);

        let mut enabled =
            !disable && descriptor.standard_name().is_some() && backend.has_named_group(group);

        let mut parameters = None;
        if enabled {
            match backend.named_group_parameters(group) {
                Ok(params) => parameters = Some(params),
                Err(_err) => {
                    debug!("disabling {descriptor}: {_err}");
                    enabled = false;
                }
            }
        } else {
            trace!("{descriptor} is not enabled");
        }

        GroupInfo {
            descriptor,
            parameters,
            enabled,
        }
    }

    /// This context's entry for `group`, if it is indexed.
    pub fn named_group(&self, group: NamedGroup) -> Option<&GroupInfo> {
        self.index
            .get(&u16::from(group))
            .map(Arc::as_ref)
    }

    /// The default candidate list for connections, in preference order.
    pub fn candidates(&self) -> &[NamedGroup] {
        &self.candidates
    }

    /// Whether this is a FIPS context.
    pub fn is_fips(&self) -> bool {
        self.fips
    }

    /// The key exchange implementation for an enabled `group`.
    pub fn kx_group(&self, group: NamedGroup) -> Result<&'static dyn SupportedKxGroup, Error> {
        match self.named_group(group) {
            Some(info) if info.is_enabled() => self
                .backend
                .kx_group(group)
                .ok_or(Error::UnsupportedNamedGroup(group)),
            _ => Err(Error::UnsupportedNamedGroup(group)),
        }
    }

    pub(crate) fn index(&self) -> &BTreeMap<u16, Arc<GroupInfo>> {
        &self.index
    }

    pub(crate) fn info(&self, group: NamedGroup) -> Option<&Arc<GroupInfo>> {
        self.index.get(&u16::from(group))
    }
}

impl fmt::Debug for NegotiationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegotiationContext")
            .field("fips", &self.fips)
            .field("indexed", &self.index.len())
            .field("candidates", &self.candidates)
            .field("backend", &self.backend)
            .finish()
    }
}

/// Resolve configured group names against `index`.
///
/// Names that are unknown, not indexed, or disabled are logged and dropped.
/// The result keeps the order of `names`.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub(crate) fn create_candidates(
    index: &BTreeMap<u16, Arc<GroupInfo>>,
    names: &[String],
    description: &str,
) -> Vec<NamedGroup> {
    let mut result = Vec::with_capacity(names.len());

    for name in names {
        let Some(descriptor) = registry::lookup_name(name) else {
            warn!("'{description}' contains unrecognised NamedGroup: {name}");
            continue;
        };

        let group = descriptor.group();
        match index.get(&u16::from(group)) {
            None => {
                warn!("'{description}' contains unsupported NamedGroup: {name}");
            }
            Some(info) if !info.is_enabled() => {
                warn!("'{description}' contains disabled NamedGroup: {name}");
            }
            Some(_) => result.push(group),
        }
    }

    if result.is_empty() {
        error!("'{description}' contained no usable NamedGroup values");
    }

    result
}
