//! `DnsProvider` implementation for Linode

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::Record;

use super::convert::{merge_into, parse_record_id, to_record, to_record_options};
use super::{LinodeProvider, PROVIDER_NAME};

/// Logs a batch that stopped part way. Records before `applied` stay applied.
fn log_batch_abort(operation: &str, zone: &str, applied: usize, total: usize, err: &ProviderError) {
    if err.is_expected() {
        log::warn!(
            "[{PROVIDER_NAME}] {operation} in {zone} stopped after {applied}/{total} record(s): {err}"
        );
    } else {
        log::error!(
            "[{PROVIDER_NAME}] {operation} in {zone} stopped after {applied}/{total} record(s): {err}"
        );
    }
}

impl LinodeProvider {
    /// Lists the names of every domain on the account, in API order.
    ///
    /// Errors from the domain listing are returned as-is.
    pub async fn list_zones(&self) -> Result<Vec<String>> {
        let mut slot = self.client.lock().await;
        let client = self.ensure_client(&mut slot)?;

        let domains = client.list_domains(None).await?;
        log::debug!("[{PROVIDER_NAME}] Found {} domain(s)", domains.len());
        Ok(domains.into_iter().map(|d| d.domain).collect())
    }
}

#[async_trait]
impl DnsProvider for LinodeProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        let mut slot = self.client.lock().await;
        let client = self.ensure_client(&mut slot)?;

        let domain_id = client.find_domain_id(zone).await?;
        let remote = client
            .list_domain_records(domain_id)
            .await
            .map_err(|e| ProviderError::RemoteList {
                provider: PROVIDER_NAME.to_string(),
                domain_id,
                source: Box::new(e),
            })?;

        log::debug!(
            "[{PROVIDER_NAME}] Listed {} record(s) in {zone}",
            remote.len()
        );
        Ok(remote.iter().map(|r| to_record(zone, r)).collect())
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut slot = self.client.lock().await;
        let client = self.ensure_client(&mut slot)?;

        let domain_id = client.find_domain_id(zone).await?;
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let options = to_record_options(zone, record);
            let remote = match client.create_domain_record(domain_id, &options).await {
                Ok(remote) => remote,
                Err(e) => {
                    let err = ProviderError::RemoteCreate {
                        provider: PROVIDER_NAME.to_string(),
                        record_name: record.name.clone(),
                        source: Box::new(e),
                    };
                    log_batch_abort("append", zone, created.len(), records.len(), &err);
                    return Err(err);
                }
            };
            log::info!(
                "[{PROVIDER_NAME}] Created {} record {} in {zone} (id {})",
                remote.record_type.as_str(),
                record.name,
                remote.id
            );
            created.push(to_record(zone, &remote));
        }
        Ok(created)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut slot = self.client.lock().await;
        let client = self.ensure_client(&mut slot)?;

        let domain_id = client.find_domain_id(zone).await?;
        let mut applied = Vec::with_capacity(records.len());
        for record in records {
            let options = to_record_options(zone, record);

            if record.id.is_empty() {
                match client.create_domain_record(domain_id, &options).await {
                    Ok(remote) => {
                        log::info!(
                            "[{PROVIDER_NAME}] Created {} record {} in {zone} (id {})",
                            remote.record_type.as_str(),
                            record.name,
                            remote.id
                        );
                        applied.push(to_record(zone, &remote));
                    }
                    Err(e) => {
                        let err = ProviderError::RemoteCreate {
                            provider: PROVIDER_NAME.to_string(),
                            record_name: record.name.clone(),
                            source: Box::new(e),
                        };
                        log_batch_abort("set", zone, applied.len(), records.len(), &err);
                        return Err(err);
                    }
                }
                continue;
            }

            let record_id = match parse_record_id(record) {
                Ok(id) => id,
                Err(err) => {
                    log_batch_abort("set", zone, applied.len(), records.len(), &err);
                    return Err(err);
                }
            };
            match client.update_domain_record(domain_id, record_id, &options).await {
                Ok(remote) => {
                    log::info!("[{PROVIDER_NAME}] Updated record {record_id} in {zone}");
                    let mut updated = record.clone();
                    merge_into(zone, &mut updated, &remote);
                    applied.push(updated);
                }
                Err(e) => {
                    let err = ProviderError::RemoteUpdate {
                        provider: PROVIDER_NAME.to_string(),
                        record_id,
                        source: Box::new(e),
                    };
                    log_batch_abort("set", zone, applied.len(), records.len(), &err);
                    return Err(err);
                }
            }
        }
        Ok(applied)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut slot = self.client.lock().await;
        let client = self.ensure_client(&mut slot)?;

        let domain_id = client.find_domain_id(zone).await?;
        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            let result = match parse_record_id(record) {
                Ok(record_id) => client
                    .delete_domain_record(domain_id, record_id)
                    .await
                    .map(|()| record_id)
                    .map_err(|e| ProviderError::RemoteDelete {
                        provider: PROVIDER_NAME.to_string(),
                        record_id,
                        source: Box::new(e),
                    }),
                Err(err) => Err(err),
            };

            match result {
                Ok(record_id) => {
                    log::info!("[{PROVIDER_NAME}] Deleted record {record_id} from {zone}");
                    deleted.push(record.clone());
                }
                Err(err) => {
                    log_batch_abort("delete", zone, deleted.len(), records.len(), &err);
                    return Err(err);
                }
            }
        }
        Ok(deleted)
    }
}
