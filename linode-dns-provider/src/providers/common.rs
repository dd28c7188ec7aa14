//! Provider 公共工具函数

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 每个 API 请求携带的 User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 创建 HTTP Client
///
/// 不设置请求超时：调用方需要截止时间时自行用 `tokio::time::timeout` 包裹。
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::InvalidConfig {
            provider: provider.to_string(),
            detail: format!("failed to build HTTP client: {e}"),
        })
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn trim_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// 将记录名称转换为相对于 zone 的名称
/// 如: "www.example.com." + "example.com" -> "www"
/// 如: "www" + "example.com." -> "www"
/// 如: "example.com" / "" / "@" + "example.com" -> "@"
pub fn relative_name(name: &str, zone: &str) -> String {
    let name = trim_trailing_dot(name);
    let zone = trim_trailing_dot(zone);

    if name.is_empty() || name == "@" || name == zone {
        "@".to_string()
    } else if let Some(subdomain) = name
        .strip_suffix(zone)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|sub| !sub.is_empty())
    {
        subdomain.to_string()
    } else {
        name.to_string()
    }
}
