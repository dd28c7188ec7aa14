use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============ Record ============

/// A provider-agnostic DNS resource record.
///
/// `name` is relative to the zone (`"www"`, `"_acme-challenge"`, `"@"` for the
/// apex). `id` is assigned by the provider: it is empty on records that have
/// not been created yet and set on every record a provider returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-specific record identifier; empty when not yet created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Record type (`"A"`, `"TXT"`, ...). Passed to the provider unchanged.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name relative to the zone.
    pub name: String,
    /// Record data (address, target host, text, ...).
    pub value: String,
    /// Time to live. Providers store whole seconds only.
    #[serde(with = "crate::utils::duration_secs")]
    pub ttl: Duration,
}

impl Record {
    /// Builds a record that has not been created yet (empty ID).
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Sets the provider ID, e.g. to target an existing record with
    /// [`set_records`](crate::DnsProvider::set_records).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

// ============ Configuration ============

/// Default Linode API base URL.
pub const DEFAULT_API_URL: &str = "https://api.linode.com";
/// Default Linode API version.
pub const DEFAULT_API_VERSION: &str = "v4";

/// Linode provider configuration.
///
/// Deserializes from the usual provider config object:
///
/// ```json
/// { "api_token": "...", "api_url": "http://localhost:8080", "api_version": "v4beta" }
/// ```
///
/// `api_url` and `api_version` are optional overrides, mostly useful for
/// testing against a mock endpoint.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LinodeConfig {
    /// Personal access token with `domains:read_write` scope.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_token: String,
    /// Base URL override (default [`DEFAULT_API_URL`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// API version override (default [`DEFAULT_API_VERSION`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl std::fmt::Debug for LinodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinodeConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl LinodeConfig {
    /// Creates a configuration with the given token and default endpoint.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_url: None,
            api_version: None,
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Overrides the API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Reads `LINODE_API_TOKEN`, `LINODE_API_URL` and `LINODE_API_VERSION`.
    ///
    /// Unset and empty variables are treated alike. The result is validated.
    pub fn from_env() -> Result<Self, CredentialValidationError> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let config = Self {
            api_token: var("LINODE_API_TOKEN").unwrap_or_default(),
            api_url: var("LINODE_API_URL"),
            api_version: var("LINODE_API_VERSION"),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the token is present and the overrides are well formed.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        if self.api_token.trim().is_empty() {
            return Err(CredentialValidationError::MissingField {
                field: "api_token".to_string(),
                label: "API Token".to_string(),
            });
        }

        if let Some(url) = non_blank(self.api_url.as_deref())
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(CredentialValidationError::InvalidFormat {
                field: "api_url".to_string(),
                label: "API URL".to_string(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }

        if let Some(version) = non_blank(self.api_version.as_deref())
            && version.contains('/')
        {
            return Err(CredentialValidationError::InvalidFormat {
                field: "api_version".to_string(),
                label: "API Version".to_string(),
                reason: format!("'{version}' is not a version segment"),
            });
        }

        Ok(())
    }

    /// The versioned endpoint all request paths are appended to,
    /// e.g. `https://api.linode.com/v4`.
    ///
    /// Blank overrides fall back to the defaults.
    pub fn endpoint(&self) -> String {
        let base = non_blank(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/');
        let version = non_blank(self.api_version.as_deref()).unwrap_or(DEFAULT_API_VERSION);
        format!("{base}/{version}")
    }
}

/// An override counts only when it has non-whitespace content.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validation error for provider configuration.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required field is missing or blank.
    #[error("Missing required field: {label}")]
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field has an invalid format.
    #[error("{label}: {reason}")]
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_json_uses_type_key_and_whole_seconds() {
        let record = Record::new("TXT", "_acme-challenge", "abc123", Duration::from_secs(300));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "TXT",
                "name": "_acme-challenge",
                "value": "abc123",
                "ttl": 300
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn with_id_sets_provider_id() {
        let record = Record::new("A", "www", "192.0.2.1", Duration::from_secs(60)).with_id("17");
        assert_eq!(record.id, "17");
    }

    #[test]
    fn config_deserializes_go_style_keys() {
        let config: LinodeConfig = serde_json::from_str(
            r#"{"api_token":"tok","api_url":"http://127.0.0.1:9000","api_version":"v4beta"}"#,
        )
        .unwrap();
        assert_eq!(config.api_token, "tok");
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/v4beta");
    }

    #[test]
    fn endpoint_defaults() {
        let config = LinodeConfig::new("tok");
        assert_eq!(config.endpoint(), "https://api.linode.com/v4");

        let config = LinodeConfig::new("tok").with_api_url("https://mock.local/");
        assert_eq!(config.endpoint(), "https://mock.local/v4");
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let config: LinodeConfig =
            serde_json::from_str(r#"{"api_token":"tok","api_url":"","api_version":""}"#).unwrap();
        assert_eq!(config.endpoint(), "https://api.linode.com/v4");
        assert!(config.validate().is_ok());

        let config: LinodeConfig = serde_json::from_str(
            r#"{"api_token":"tok","api_url":"http://127.0.0.1:9000","api_version":"  "}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/v4");
    }

    #[test]
    fn validate_rejects_missing_token() {
        let err = LinodeConfig::new("  ").validate().unwrap_err();
        assert!(matches!(
            err,
            CredentialValidationError::MissingField { ref field, .. } if field == "api_token"
        ));
        assert_eq!(err.to_string(), "Missing required field: API Token");
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let err = LinodeConfig::new("tok")
            .with_api_url("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            CredentialValidationError::InvalidFormat { ref field, .. } if field == "api_url"
        ));
    }

    #[test]
    fn validate_rejects_version_with_slash() {
        let err = LinodeConfig::new("tok")
            .with_api_version("v4/extra")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            CredentialValidationError::InvalidFormat { ref field, .. } if field == "api_version"
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", LinodeConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
