//! `Duration` <-> whole-second integer serde helper
//!
//! - serialize: `Duration` -> seconds (sub-second part truncated)
//! - deserialize: non-negative integer seconds -> `Duration`

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Serializes as whole seconds.
pub fn serialize<S>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(ttl.as_secs())
}

/// Deserializes from whole seconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
