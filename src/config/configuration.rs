//! The serialized session record.

use serde::{Deserialize, Serialize};

use crate::models::{OrganizationFields, SpaceFields};

/// Session state persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Schema version for migration.
    pub version: u32,

    /// Target API endpoint, e.g. `https://api.example.com`.
    pub api_endpoint: String,

    /// Version reported by the API at `api` time.
    pub api_version: String,

    /// Token endpoint used by `auth`.
    pub authorization_endpoint: String,

    /// Base URL of the log service.
    pub logging_endpoint: String,

    pub access_token: String,
    pub refresh_token: String,

    /// Accept invalid TLS certificates from every endpoint.
    pub skip_ssl_validation: bool,

    pub organization_fields: OrganizationFields,
    pub space_fields: SpaceFields,
    pub username: String,
}

impl Configuration {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            api_endpoint: String::new(),
            api_version: String::new(),
            authorization_endpoint: String::new(),
            logging_endpoint: String::new(),
            access_token: String::new(),
            refresh_token: String::new(),
            skip_ssl_validation: false,
            organization_fields: OrganizationFields::default(),
            space_fields: SpaceFields::default(),
            username: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_session() {
        let config = Configuration::default();
        assert_eq!(config.version, Configuration::CURRENT_VERSION);
        assert!(config.access_token.is_empty());
        assert!(config.organization_fields.is_empty());
        assert!(config.space_fields.is_empty());
        assert!(!config.skip_ssl_validation);
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        let config: Configuration =
            serde_yaml::from_str("api_endpoint: https://api.example.com\n").unwrap();
        assert_eq!(config.api_endpoint, "https://api.example.com");
        assert_eq!(config.version, Configuration::CURRENT_VERSION);
        assert!(config.space_fields.is_empty());
    }

    #[test]
    fn yaml_round_trip_keeps_target() {
        let mut config = Configuration::default();
        config.organization_fields = OrganizationFields::new("org-guid", "my-org");
        config.space_fields = SpaceFields::new("space-guid", "my-space");

        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Configuration = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded, config);
    }
}
