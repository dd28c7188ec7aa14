//! Linode error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{LinodeClient, PROVIDER_NAME};

/// Linode error mapping
///
/// Linode has no business error codes: the HTTP status carries the kind and
/// `errors[].field` names the rejected request field.
/// Reference: <https://techdocs.akamai.com/linode-api/reference/errors>
impl ProviderErrorMapper for LinodeClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 401: missing, invalid or expired token
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 403: token lacks the domains:read_write scope
            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: record or domain does not exist
            Some("404") => {
                if let Some(record_id) = context.record_id {
                    ProviderError::RecordNotFound {
                        provider: self.provider_name().to_string(),
                        record_id,
                        raw_message: Some(raw.message),
                    }
                } else if let Some(domain) = context.domain {
                    ProviderError::DomainNotFound {
                        provider: self.provider_name().to_string(),
                        domain,
                        raw_message: Some(raw.message),
                    }
                } else {
                    self.unknown_error(raw)
                }
            }

            // 400: validation error on a specific field (ttl_sec, target, name, type ...)
            Some("400") if raw.field.is_some() => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: raw.field.unwrap_or_default(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
