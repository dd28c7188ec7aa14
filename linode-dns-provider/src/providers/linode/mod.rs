//! Linode DNS Provider

mod convert;
mod error;
mod http;
mod provider;
mod resolver;
/// Linode API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{CredentialValidationError, LinodeConfig};
use crate::utils::log_sanitizer::mask_token;

/// Provider identifier used in errors and logs.
pub(crate) const PROVIDER_NAME: &str = "linode";
/// Largest `page_size` the Linode API accepts.
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// Linode API client bound to one endpoint and token.
pub(crate) struct LinodeClient {
    pub(crate) client: Client,
    /// `{api_url}/{api_version}`
    pub(crate) endpoint: String,
    pub(crate) api_token: String,
}

impl LinodeClient {
    pub(crate) fn new(config: &LinodeConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        log::debug!(
            "[{PROVIDER_NAME}] Initializing client for {endpoint} (token {})",
            mask_token(&config.api_token)
        );
        Ok(Self {
            client: create_http_client(PROVIDER_NAME)?,
            endpoint,
            api_token: config.api_token.clone(),
        })
    }
}

/// Linode DNS provider implementation.
///
/// Authenticates with a personal access token (`Authorization: Bearer`).
/// The HTTP client is built on first use, not in the constructor.
///
/// All operations on one instance are serialized: each holds an exclusive
/// lock for its full duration, including every remote call of a batch.
///
/// # Construction
///
/// ```rust,no_run
/// use linode_dns_provider::{LinodeConfig, LinodeProvider};
///
/// let provider = LinodeProvider::new(LinodeConfig::new("your-api-token"));
/// ```
pub struct LinodeProvider {
    pub(crate) config: LinodeConfig,
    /// Lazily-built client; the lock also serializes operations.
    pub(crate) client: Mutex<Option<LinodeClient>>,
}

impl LinodeProvider {
    /// Creates a provider. No network activity happens until the first operation.
    pub fn new(config: LinodeConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
        }
    }

    /// Creates a provider from `LINODE_API_TOKEN` / `LINODE_API_URL` /
    /// `LINODE_API_VERSION`.
    pub fn from_env() -> std::result::Result<Self, CredentialValidationError> {
        LinodeConfig::from_env().map(Self::new)
    }

    /// The configuration this provider was created with.
    pub fn config(&self) -> &LinodeConfig {
        &self.config
    }

    /// Builds the client into `slot` unless a previous call already did.
    pub(crate) fn ensure_client<'a>(
        &self,
        slot: &'a mut Option<LinodeClient>,
    ) -> Result<&'a LinodeClient> {
        let client = match slot.take() {
            Some(client) => client,
            None => LinodeClient::new(&self.config)?,
        };
        Ok(slot.insert(client))
    }
}
