use std::env;
use std::sync::Arc;

use crate::log::{debug, warn};
use crate::policy::{AlgorithmConstraints, PermitAll};

/// Preferred named groups, as a comma separated list of group names.
pub const ENV_NAMED_GROUPS: &str = "TLS_NAMED_GROUPS";
/// When `true`, binary-field curves are disabled.
pub const ENV_DISABLE_CHAR2: &str = "TLS_EC_DISABLE_CHAR2";
/// When `false`, finite field groups are disabled.
pub const ENV_ENABLE_FFDHE: &str = "TLS_ENABLE_FFDHE";

/// Policy applied when building a [`NegotiationContext`](crate::NegotiationContext).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextConfig {
    /// Group names in preference order.  `None` means the built-in default list.
    pub named_groups: Option<Vec<String>>,

    /// Disable every binary-field (characteristic 2) curve.
    pub disable_char2: bool,

    /// Disable every RFC 7919 finite field group.
    pub disable_ffdhe: bool,
}

impl ContextConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables leave the defaults in place.  Unparseable boolean
    /// values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Like [`ContextConfig::from_env()`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(list) = lookup(ENV_NAMED_GROUPS) {
            config.named_groups = parse_name_list(&list);
        }

        if let Some(disable) = lookup(ENV_DISABLE_CHAR2).and_then(|v| parse_bool(ENV_DISABLE_CHAR2, &v)) {
            config.disable_char2 = disable;
        }

        if let Some(enable) = lookup(ENV_ENABLE_FFDHE).and_then(|v| parse_bool(ENV_ENABLE_FFDHE, &v)) {
            config.disable_ffdhe = !enable;
        }

        debug!("context configuration: {config:?}");
        config
    }

    /// Set the preferred group names, in order.
    pub fn with_named_groups<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named_groups = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Disable or re-enable binary-field curves.
    pub fn with_disable_char2(mut self, disable: bool) -> Self {
        self.disable_char2 = disable;
        self
    }

    /// Disable or re-enable finite field groups.
    pub fn with_disable_ffdhe(mut self, disable: bool) -> Self {
        self.disable_ffdhe = disable;
        self
    }
}

/// Per-connection overrides applied when building a
/// [`ConnectionGroups`](crate::ConnectionGroups).
#[derive(Clone, Debug)]
pub struct ConnectionParams {
    /// Group names in preference order, replacing the context's list.
    pub named_groups: Option<Vec<String>>,

    /// Policy every local group must satisfy.
    pub algorithm_constraints: Arc<dyn AlgorithmConstraints>,
}

impl ConnectionParams {
    /// Replace the context's group preference list for this connection.
    pub fn with_named_groups<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named_groups = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Apply `constraints` to this connection.
    pub fn with_algorithm_constraints(mut self, constraints: Arc<dyn AlgorithmConstraints>) -> Self {
        self.algorithm_constraints = constraints;
        self
    }
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            named_groups: None,
            algorithm_constraints: Arc::new(PermitAll),
        }
    }
}

/// Split a comma separated list, trimming whitespace and one pair of
/// enclosing quotes.  A blank list is treated as unset.
fn parse_name_list(raw: &str) -> Option<Vec<String>> {
    let mut list = raw.trim();
    if list.len() >= 2 && list.starts_with('"') && list.ends_with('"') {
        list = list[1..list.len() - 1].trim();
    }

    if list.is_empty() {
        return None;
    }

    Some(
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
    )
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn parse_bool(name: &str, raw: &str) -> Option<bool> {
    match raw.trim() {
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => {
            warn!("ignoring {name}: {raw:?} is not a boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> ContextConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ContextConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn unset_environment_is_default() {
        assert_eq!(from_map(&[]), ContextConfig::default());
    }

    #[test]
    fn named_groups_list() {
        let config = from_map(&[(ENV_NAMED_GROUPS, " \"x25519, secp256r1 ,,ffdhe2048\" ")]);
        assert_eq!(
            config.named_groups,
            Some(vec![
                "x25519".to_string(),
                "secp256r1".to_string(),
                "ffdhe2048".to_string()
            ])
        );

        assert_eq!(from_map(&[(ENV_NAMED_GROUPS, "  ")]).named_groups, None);
        assert_eq!(from_map(&[(ENV_NAMED_GROUPS, "\"\"")]).named_groups, None);
    }

    #[test]
    fn flags() {
        let config = from_map(&[(ENV_DISABLE_CHAR2, "TRUE"), (ENV_ENABLE_FFDHE, "false")]);
        assert!(config.disable_char2);
        assert!(config.disable_ffdhe);

        let config = from_map(&[(ENV_DISABLE_CHAR2, "yes"), (ENV_ENABLE_FFDHE, "1")]);
        assert!(!config.disable_char2);
        assert!(!config.disable_ffdhe);
    }

    #[test]
    fn builder() {
        let config = ContextConfig::default()
            .with_named_groups(["x448"])
            .with_disable_char2(true)
            .with_disable_ffdhe(true);
        assert_eq!(config.named_groups, Some(vec!["x448".to_string()]));
        assert!(config.disable_char2 && config.disable_ffdhe);
    }
}
