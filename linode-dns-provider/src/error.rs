use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Operation errors
///
/// The record operations report failures with the variants below. The `Remote*` variants
/// and [`ZoneLookup`](Self::ZoneLookup) wrap the transport/API level error that caused them
/// in `source`:
/// - [`DomainNotFound`](Self::DomainNotFound): no remote domain matches the zone
/// - [`ZoneLookup`](Self::ZoneLookup): listing domains failed
/// - [`RemoteList`](Self::RemoteList) / [`RemoteCreate`](Self::RemoteCreate) /
///   [`RemoteUpdate`](Self::RemoteUpdate) / [`RemoteDelete`](Self::RemoteDelete)
/// - [`InvalidRecordId`](Self::InvalidRecordId): a record ID is not numeric
///
/// No variant is retried automatically.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("[{provider}] Rate limited{}", retry_suffix(.retry_after))]
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API token is missing, invalid or expired.
    #[error("[{provider}] Invalid credentials{}", message_suffix(.raw_message))]
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The token lacks the scope required for the requested operation.
    #[error("[{provider}] Permission denied{}", message_suffix(.raw_message))]
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS record was not found.
    #[error("[{provider}] Record '{record_id}' not found")]
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (e.g. bad TTL value, malformed target).
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body or header.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The provider could not be set up from its configuration.
    #[error("[{provider}] Invalid configuration: {detail}")]
    InvalidConfig {
        /// Provider that produced the error.
        provider: String,
        /// What is wrong with the configuration.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    #[error("[{provider}] {raw_message}")]
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code (HTTP status) from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },

    /// No remote domain matches the zone.
    #[error("[{provider}] Domain '{domain}' not found{}", message_suffix(.raw_message))]
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name (or domain ID) that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The zone could not be resolved because listing domains failed.
    #[error("[{provider}] Could not look up domain for zone '{zone}': {source}")]
    ZoneLookup {
        /// Provider that produced the error.
        provider: String,
        /// Zone being resolved.
        zone: String,
        /// Underlying API error.
        source: Box<ProviderError>,
    },

    /// Listing the records of a domain failed.
    #[error("[{provider}] Could not list records of domain {domain_id}: {source}")]
    RemoteList {
        /// Provider that produced the error.
        provider: String,
        /// Remote domain ID.
        domain_id: u64,
        /// Underlying API error.
        source: Box<ProviderError>,
    },

    /// Creating a record failed.
    #[error("[{provider}] Could not create record '{record_name}': {source}")]
    RemoteCreate {
        /// Provider that produced the error.
        provider: String,
        /// Relative name of the record being created.
        record_name: String,
        /// Underlying API error.
        source: Box<ProviderError>,
    },

    /// Updating a record failed.
    #[error("[{provider}] Could not update record {record_id}: {source}")]
    RemoteUpdate {
        /// Provider that produced the error.
        provider: String,
        /// Remote record ID.
        record_id: u64,
        /// Underlying API error.
        source: Box<ProviderError>,
    },

    /// Deleting a record failed.
    #[error("[{provider}] Could not delete record {record_id}: {source}")]
    RemoteDelete {
        /// Provider that produced the error.
        provider: String,
        /// Remote record ID.
        record_id: u64,
        /// Underlying API error.
        source: Box<ProviderError>,
    },

    /// A record ID is not in the provider's numeric format.
    #[error("[{provider}] Invalid record ID '{record_id}'")]
    InvalidRecordId {
        /// Provider that produced the error.
        provider: String,
        /// The offending ID as given.
        record_id: String,
    },
}

#[allow(clippy::ref_option)]
fn message_suffix(raw_message: &Option<String>) -> String {
    raw_message
        .as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

#[allow(clippy::ref_option)]
fn retry_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

impl ProviderError {
    /// Whether the error is an expected outcome (bad input, missing resource)
    /// rather than a fault. Used to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`. Wrapping variants defer to
    /// their `source`. **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials { .. }
            | Self::PermissionDenied { .. }
            | Self::RecordNotFound { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidConfig { .. }
            | Self::DomainNotFound { .. }
            | Self::InvalidRecordId { .. } => true,
            Self::ZoneLookup { source, .. }
            | Self::RemoteList { source, .. }
            | Self::RemoteCreate { source, .. }
            | Self::RemoteUpdate { source, .. }
            | Self::RemoteDelete { source, .. } => source.is_expected(),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::RateLimited { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. }
            | Self::Unknown { .. } => false,
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
