use core::fmt::Debug;
use std::collections::BTreeSet;

use crate::crypto::AlgorithmParameters;

/// The cryptographic operation a constraint check is about.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CryptoPrimitive {
    /// Key agreement, including the KEM-based groups.
    KeyAgreement,
}

/// Per-connection policy on which algorithms may be used.
///
/// Named groups are checked twice: once by their standard name with no
/// parameters, and once by their family name (`"EC"`, `"XDH"`,
/// `"DiffieHellman"`, `"PQC"`) with the backend's parameters.  Both checks
/// must pass.
pub trait AlgorithmConstraints: Send + Sync + Debug {
    /// Whether `algorithm` may be used for `primitive`.
    fn permits(
        &self,
        primitive: CryptoPrimitive,
        algorithm: &str,
        parameters: Option<&AlgorithmParameters>,
    ) -> bool;
}

/// Constraints that allow everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermitAll;

impl AlgorithmConstraints for PermitAll {
    fn permits(&self, _: CryptoPrimitive, _: &str, _: Option<&AlgorithmParameters>) -> bool {
        true
    }
}

/// Constraints that forbid a list of algorithm or group names.
///
/// Names are compared ignoring ASCII case.  A name matches either the
/// algorithm being checked or, when parameters are given, the standard name
/// inside them.
#[derive(Debug, Default, Clone)]
pub struct DisabledAlgorithms {
    names: BTreeSet<String>,
}

impl DisabledAlgorithms {
    /// Forbid each of `names`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_ascii_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Parse a comma separated list, such as `"X25519, ffdhe2048"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    fn contains(&self, name: &str) -> bool {
        self.names
            .contains(&name.to_ascii_lowercase())
    }
}

impl AlgorithmConstraints for DisabledAlgorithms {
    fn permits(
        &self,
        _primitive: CryptoPrimitive,
        algorithm: &str,
        parameters: Option<&AlgorithmParameters>,
    ) -> bool {
        if self.contains(algorithm) {
            return false;
        }

        match parameters {
            Some(params) => !self.contains(params.standard_name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgs::enums::NamedGroup;

    #[test]
    fn permit_all() {
        assert!(PermitAll.permits(CryptoPrimitive::KeyAgreement, "anything", None));
    }

    #[test]
    fn disabled_by_name() {
        let disabled = DisabledAlgorithms::parse(" x25519 , DiffieHellman,,");
        let ka = CryptoPrimitive::KeyAgreement;
        assert!(!disabled.permits(ka, "X25519", None));
        assert!(!disabled.permits(ka, "diffiehellman", None));
        assert!(disabled.permits(ka, "secp256r1", None));
        assert!(disabled.permits(ka, "EC", None));
    }

    #[test]
    fn disabled_by_parameters() {
        let disabled = DisabledAlgorithms::new(["secp384r1"]);
        let params = AlgorithmParameters::for_group(NamedGroup::secp384r1).unwrap();
        assert!(!disabled.permits(CryptoPrimitive::KeyAgreement, "EC", Some(&params)));

        let params = AlgorithmParameters::for_group(NamedGroup::secp256r1).unwrap();
        assert!(disabled.permits(CryptoPrimitive::KeyAgreement, "EC", Some(&params)));
    }
}
