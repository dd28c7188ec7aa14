//! Record translation between [`Record`] and Linode domain records.
//!
//! Linode stores names relative to the domain with an empty name for the
//! apex; generic records use `@` for the apex. TTLs are whole seconds on
//! both sides once they have been through the API.

use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::providers::common::relative_name;
use crate::types::Record;

use super::PROVIDER_NAME;
use super::types::{DomainRecord, DomainRecordOptions};

/// Name as Linode stores it: relative to the zone, apex as `""`.
pub(crate) fn remote_name(name: &str, zone: &str) -> String {
    match relative_name(name, zone) {
        apex if apex == "@" => String::new(),
        relative => relative,
    }
}

/// TTL in whole seconds, sub-second part truncated.
pub(crate) fn ttl_seconds(ttl: Duration) -> u32 {
    u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX)
}

/// Request body for creating or updating `record` in `zone`. Any ID on the
/// record is not part of the body.
pub(crate) fn to_record_options(zone: &str, record: &Record) -> DomainRecordOptions {
    DomainRecordOptions {
        record_type: record.record_type.clone().into(),
        name: remote_name(&record.name, zone),
        target: record.value.clone(),
        ttl_sec: ttl_seconds(record.ttl),
    }
}

/// Converts a Linode record into a fresh [`Record`].
pub(crate) fn to_record(zone: &str, remote: &DomainRecord) -> Record {
    let mut record = Record::default();
    merge_into(zone, &mut record, remote);
    record
}

/// Overwrites the mapped fields of `existing` with `remote`, leaving any
/// other state on `existing` untouched.
pub(crate) fn merge_into(zone: &str, existing: &mut Record, remote: &DomainRecord) {
    existing.id = remote.id.to_string();
    existing.record_type = remote.record_type.as_str().to_string();
    existing.name = relative_name(&remote.name, zone);
    existing.value.clone_from(&remote.target);
    existing.ttl = Duration::from_secs(u64::from(remote.ttl_sec));
}

/// Parses the provider ID of `record`.
pub(crate) fn parse_record_id(record: &Record) -> Result<u64> {
    record
        .id
        .parse::<u64>()
        .map_err(|_| ProviderError::InvalidRecordId {
            provider: PROVIDER_NAME.to_string(),
            record_id: record.id.clone(),
        })
}
