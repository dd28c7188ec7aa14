//! # linode-dns-provider
//!
//! Record-level DNS management for domains hosted on the
//! [Linode DNS Manager](https://techdocs.akamai.com/linode-api/reference/get-domains).
//!
//! A zone is addressed by its DNS name (`"example.com"` or `"example.com."`);
//! the provider resolves it to Linode's numeric domain ID on every call.
//! Record names are relative to the zone with `@` for the apex.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use linode_dns_provider::{DnsProvider, LinodeConfig, LinodeProvider, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = LinodeProvider::new(LinodeConfig::new("your-api-token"));
//!
//!     // Publish an ACME challenge
//!     let challenge = Record::new("TXT", "_acme-challenge", "token", Duration::from_secs(300));
//!     let created = provider.append_records("example.com.", &[challenge]).await?;
//!
//!     for record in provider.list_records("example.com.").await? {
//!         println!("{} {} {} -> {}", record.id, record.record_type, record.name, record.value);
//!     }
//!
//!     // ...and clean it up again
//!     provider.delete_records("example.com.", &created).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError). Batch
//! operations stop at the first failing record and do not roll back the
//! records already applied. Nothing is retried.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::DnsProvider;

pub use types::{
    CredentialValidationError, DEFAULT_API_URL, DEFAULT_API_VERSION, LinodeConfig, Record,
};

pub use providers::LinodeProvider;
