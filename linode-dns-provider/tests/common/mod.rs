//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use httpmock::MockServer;
use linode_dns_provider::{DnsProvider, LinodeConfig, LinodeProvider, Record};
use serde_json::{Value, json};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

// ============ Mock server 辅助函数 ============

pub const TEST_TOKEN: &str = "test-token";

/// 指向 mock server 的 Provider（默认 `v4` 版本）
pub fn mock_provider(server: &MockServer) -> LinodeProvider {
    LinodeProvider::new(LinodeConfig::new(TEST_TOKEN).with_api_url(server.base_url()))
}

/// 解析 `name` 时发送的 `X-Filter` 头
pub fn domain_filter(name: &str) -> String {
    json!({ "domain": name }).to_string()
}

/// Linode 分页响应
pub fn page(data: Vec<Value>, page: u32, pages: u32) -> Value {
    let results = data.len();
    json!({ "data": data, "page": page, "pages": pages, "results": results })
}

pub fn domain_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "domain": name,
        "type": "master",
        "status": "active",
        "soa_email": "admin@example.com",
    })
}

pub fn record_json(id: u64, record_type: &str, name: &str, target: &str, ttl_sec: u32) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "target": target,
        "priority": 0,
        "weight": 0,
        "port": 0,
        "service": null,
        "protocol": null,
        "ttl_sec": ttl_sec,
        "tag": null,
        "created": "2018-01-01T00:01:01",
        "updated": "2018-01-01T00:01:01",
    })
}

pub fn error_json(field: Option<&str>, reason: &str) -> Value {
    match field {
        Some(field) => json!({ "errors": [{ "field": field, "reason": reason }] }),
        None => json!({ "errors": [{ "reason": reason }] }),
    }
}

// ============ 真实 API 辅助函数 ============

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: LinodeProvider,
    pub zone: String,
}

impl TestContext {
    /// 从 `LINODE_API_TOKEN` / `TEST_DOMAIN` 创建测试上下文
    pub fn linode() -> Option<Self> {
        let zone = env::var("TEST_DOMAIN").ok()?;
        let provider = LinodeProvider::from_env().ok()?;
        Some(Self { provider, zone })
    }

    /// 名称唯一、尚未创建的 TXT 记录
    pub fn test_record(&self, value: &str) -> Record {
        Record::new(
            "TXT",
            generate_test_record_name(),
            value,
            Duration::from_secs(300),
        )
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.list_records(&self.zone).await {
            let stale: Vec<Record> = records
                .into_iter()
                .filter(|r| r.name.starts_with("_test-"))
                .collect();
            let _ = self.provider.delete_records(&self.zone, &stale).await;
        }
    }
}
