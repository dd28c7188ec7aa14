use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::Record;

/// Raw API error (internal)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code. Linode has no business codes, so this is the HTTP status.
    pub code: Option<String>,
    /// Raw error message
    pub message: String,
    /// Rejected request field (Linode's `errors[].field`)
    pub field: Option<String>,
}

impl RawApiError {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn field(mut self, field: Option<String>) -> Self {
        self.field = field;
        self
    }
}

/// Extra context used when mapping errors (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record ID, for `RecordNotFound`
    pub record_id: Option<String>,
    /// Domain name or ID, for `DomainNotFound`
    pub domain: Option<String>,
}

/// Maps raw API errors onto [`ProviderError`] (internal)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Maps a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut for a serialization error.
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for errors with no better mapping.
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Record-level DNS provider.
///
/// Zones are plain DNS names; a trailing dot is optional. Record names are
/// relative to the zone, with `@` for the apex.
///
/// Batch operations process records one at a time and stop at the first
/// failure. Records already applied remotely at that point stay applied and
/// the error does not say which ones they were; re-list the zone to
/// reconcile.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Lists all records in the zone, in the order the provider returns them.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates every record in the zone. Input IDs are ignored. Returns the
    /// created records, carrying their provider-assigned IDs.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Creates records with an empty ID and updates the others by ID.
    /// Returns the records as stored after the create/update.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Deletes the records by ID. Returns the input records that were deleted.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
