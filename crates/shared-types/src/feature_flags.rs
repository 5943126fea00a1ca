use serde::{Deserialize, Serialize};

/// Flags controlling demo-only affordances.
///
/// Every field defaults to `false`; the app decides at startup which demo
/// controls to switch on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Shows the manual role-toggle button on the dashboards. A demo
    /// control for exercising the role redirect, not an authorization
    /// mechanism.
    #[serde(default)]
    pub role_toggle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_flags_all_off() {
        let flags = FeatureFlags::default();
        assert!(!flags.role_toggle);
    }

    #[test]
    fn deserialize_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn serialize_roundtrip() {
        let flags = FeatureFlags { role_toggle: true };
        let json = serde_json::to_string(&flags).unwrap();
        let parsed: FeatureFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, parsed);
    }
}
