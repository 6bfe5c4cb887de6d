//! Dispatcher configuration loaded from environment variables.

const DEFAULT_MAX_DEPTH: usize = 8;

/// Dispatcher configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DOMAIN_EVENTS_ENABLED` — run handlers on dispatch (default: `true`)
/// - `DOMAIN_EVENTS_MAX_DEPTH` — maximum nested dispatch depth (default: `8`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub enabled: bool,
    pub max_depth: usize,
}

impl DispatchConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let enabled = lookup("DOMAIN_EVENTS_ENABLED")
            .map(|v| {
                !matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "false" | "0" | "off" | "no"
                )
            })
            .unwrap_or(defaults.enabled);

        let max_depth = lookup("DOMAIN_EVENTS_MAX_DEPTH")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|depth| *depth > 0)
            .unwrap_or(defaults.max_depth);

        Self { enabled, max_depth }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = DispatchConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_empty_lookup_uses_defaults() {
        let config = DispatchConfig::from_lookup(|_| None);
        assert_eq!(config, DispatchConfig::default());
    }

    #[test]
    fn test_disable_flag_values() {
        for value in ["false", "0", "OFF", " no "] {
            let config = DispatchConfig::from_lookup(lookup_from(&[(
                "DOMAIN_EVENTS_ENABLED",
                value,
            )]));
            assert!(!config.enabled, "{value} should disable dispatch");
        }

        let config = DispatchConfig::from_lookup(lookup_from(&[("DOMAIN_EVENTS_ENABLED", "true")]));
        assert!(config.enabled);
    }

    #[test]
    fn test_max_depth_parsing() {
        let config = DispatchConfig::from_lookup(lookup_from(&[("DOMAIN_EVENTS_MAX_DEPTH", "3")]));
        assert_eq!(config.max_depth, 3);

        let config = DispatchConfig::from_lookup(lookup_from(&[("DOMAIN_EVENTS_MAX_DEPTH", "0")]));
        assert_eq!(config.max_depth, 8);

        let config =
            DispatchConfig::from_lookup(lookup_from(&[("DOMAIN_EVENTS_MAX_DEPTH", "deep")]));
        assert_eq!(config.max_depth, 8);
    }
}
