//! Linode API 类型定义
//!
//! Reference: <https://techdocs.akamai.com/linode-api/reference/get-domains>

use serde::{Deserialize, Serialize};

/// Linode 分页响应
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// Linode 错误响应 `{"errors": [{"reason": "...", "field": "..."}]}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorReason>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorReason {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// Linode Domain 结构
#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub domain: String,
}

/// Linode DNS 记录类型
///
/// 未知类型原样保存在 [`Other`](Self::Other) 中，交由 API 校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DomainRecordType {
    A,
    Aaaa,
    Ns,
    Mx,
    Cname,
    Txt,
    Srv,
    Ptr,
    Caa,
    Other(String),
}

impl DomainRecordType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ptr => "PTR",
            Self::Caa => "CAA",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for DomainRecordType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "NS" => Self::Ns,
            "MX" => Self::Mx,
            "CNAME" => Self::Cname,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "PTR" => Self::Ptr,
            "CAA" => Self::Caa,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for DomainRecordType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<DomainRecordType> for String {
    fn from(value: DomainRecordType) -> Self {
        match value {
            DomainRecordType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

/// Linode Domain Record 结构（响应）
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct DomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: DomainRecordType,
    /// 相对于 domain 的名称，apex 为空字符串
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub ttl_sec: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub port: Option<u32>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// 创建/更新记录的请求体（`DomainRecordCreateOptions` / `DomainRecordUpdateOptions`）
///
/// 不包含 ID：ID 只出现在 URL 中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecordOptions {
    #[serde(rename = "type")]
    pub record_type: DomainRecordType,
    pub name: String,
    pub target: String,
    pub ttl_sec: u32,
}
