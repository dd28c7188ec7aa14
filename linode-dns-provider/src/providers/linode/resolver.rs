//! Zone name to Linode domain ID resolution

use crate::error::{ProviderError, Result};
use crate::providers::common::trim_trailing_dot;

use super::types::Domain;
use super::{LinodeClient, PROVIDER_NAME};

/// Returns the ID of the domain whose name equals `zone` exactly, ignoring a
/// trailing dot on `zone`.
pub(crate) fn find_domain_in(domains: &[Domain], zone: &str) -> Option<u64> {
    let name = trim_trailing_dot(zone);
    domains.iter().find(|d| d.domain == name).map(|d| d.id)
}

impl LinodeClient {
    /// Resolves `zone` to its Linode domain ID.
    ///
    /// The listing is narrowed server-side with a name filter, but the match
    /// is still checked locally on every returned page.
    pub(crate) async fn find_domain_id(&self, zone: &str) -> Result<u64> {
        let name = trim_trailing_dot(zone);
        let domains = self
            .list_domains(Some(name))
            .await
            .map_err(|e| ProviderError::ZoneLookup {
                provider: PROVIDER_NAME.to_string(),
                zone: zone.to_string(),
                source: Box::new(e),
            })?;

        match find_domain_in(&domains, zone) {
            Some(id) => {
                log::debug!("[{PROVIDER_NAME}] Resolved zone {name} to domain {id}");
                Ok(id)
            }
            None => Err(ProviderError::DomainNotFound {
                provider: PROVIDER_NAME.to_string(),
                domain: name.to_string(),
                raw_message: Some(format!(
                    "no match among {} domain(s) returned",
                    domains.len()
                )),
            }),
        }
    }
}
