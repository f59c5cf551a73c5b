#![allow(dead_code)]

pub use std::sync::Arc;

use tls_groups::{AlgorithmParameters, CryptoBackend, Error, NamedGroup, NegotiationContext};
use tls_groups::{ConnectionGroups, ConnectionParams, ContextConfig, ProtocolVersion};

/// Surface the crate's log output when a test fails.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

/// A backend that claims every group in the registry, except those it is told
/// to refuse.
#[derive(Debug, Default)]
pub struct TestBackend {
    /// Groups `has_named_group` answers `false` for.
    pub unsupported: Vec<NamedGroup>,
    /// Groups whose parameters cannot be fetched.
    pub failing_parameters: Vec<NamedGroup>,
}

impl TestBackend {
    pub fn without(unsupported: &[NamedGroup]) -> Self {
        Self {
            unsupported: unsupported.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing(failing_parameters: &[NamedGroup]) -> Self {
        Self {
            failing_parameters: failing_parameters.to_vec(),
            ..Self::default()
        }
    }
}

impl CryptoBackend for TestBackend {
    fn has_named_group(&self, group: NamedGroup) -> bool {
        !self.unsupported.contains(&group)
    }

    fn named_group_parameters(&self, group: NamedGroup) -> Result<AlgorithmParameters, Error> {
        if self.failing_parameters.contains(&group) {
            return Err(Error::CryptoOperation(format!("no parameters for {group:?}")));
        }

        AlgorithmParameters::for_group(group).ok_or(Error::UnsupportedNamedGroup(group))
    }
}

pub fn context_with(names: &[&str]) -> NegotiationContext {
    init_logging();
    NegotiationContext::new(
        false,
        Arc::new(TestBackend::default()),
        &ContextConfig::default().with_named_groups(names.iter().copied()),
    )
}

pub fn tls13_server(context: &NegotiationContext) -> ConnectionGroups {
    ConnectionGroups::for_server(context, &ConnectionParams::default(), ProtocolVersion::TLSv1_3)
}
