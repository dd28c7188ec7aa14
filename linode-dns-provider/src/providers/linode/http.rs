//! Linode HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::{Domain, DomainRecord, DomainRecordOptions, ErrorEnvelope, Page};
use super::{LinodeClient, MAX_PAGE_SIZE};

impl LinodeClient {
    // ==================== 辅助方法 ====================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint)
    }

    /// 添加认证头（token 为空时不发送）
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        if self.api_token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.api_token)
        }
    }

    /// 统一处理 Linode 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // 尝试解析结构化错误
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(response_text)
            && !envelope.errors.is_empty()
        {
            let field = envelope.errors.iter().find_map(|e| e.field.clone());
            let message = envelope
                .errors
                .iter()
                .map(|e| match &e.field {
                    Some(field) => format!("{field}: {}", e.reason),
                    None => e.reason.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("[{}] API error (HTTP {status}): {message}", self.provider_name());
            return Err(self.map_error(
                RawApiError::with_code(status.to_string(), message).field(field),
                ctx,
            ));
        }

        // 回退到通用错误
        Err(self.map_error(
            RawApiError::with_code(status.to_string(), format!("HTTP {status}: {response_text}")),
            ctx,
        ))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let (status, response_text) =
            HttpUtils::execute_request(self.authorized(request), self.provider_name(), method, url)
                .await?;
        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 GET 请求，逐页拉取直到最后一页
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&serde_json::Value>,
        ctx: &ErrorContext,
    ) -> Result<Vec<T>> {
        let filter = filter
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| self.serialization_error(e))?;

        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let url = format!("{}?page={page}&page_size={MAX_PAGE_SIZE}", self.url(path));
            let mut request = self.client.get(&url);
            if let Some(filter) = &filter {
                log::debug!("[{}] X-Filter: {filter}", self.provider_name());
                request = request.header("X-Filter", filter.as_str());
            }

            let response: Page<T> = self.send(request, "GET", &url, ctx.clone()).await?;
            log::debug!(
                "[{}] Page {}/{} of {path}: {} item(s)",
                self.provider_name(),
                response.page,
                response.pages,
                response.data.len()
            );
            items.extend(response.data);

            if page >= response.pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    // ==================== API 方法 ====================

    /// `GET /domains`，可选按域名 `X-Filter` 过滤
    pub(crate) async fn list_domains(&self, name_filter: Option<&str>) -> Result<Vec<Domain>> {
        let filter = name_filter.map(|name| serde_json::json!({ "domain": name }));
        self.get_all_pages("/domains", filter.as_ref(), &ErrorContext::default())
            .await
    }

    /// `GET /domains/{domain_id}/records`
    pub(crate) async fn list_domain_records(&self, domain_id: u64) -> Result<Vec<DomainRecord>> {
        let ctx = ErrorContext {
            domain: Some(domain_id.to_string()),
            ..Default::default()
        };
        self.get_all_pages(&format!("/domains/{domain_id}/records"), None, &ctx)
            .await
    }

    /// `POST /domains/{domain_id}/records`
    pub(crate) async fn create_domain_record(
        &self,
        domain_id: u64,
        options: &DomainRecordOptions,
    ) -> Result<DomainRecord> {
        let url = self.url(&format!("/domains/{domain_id}/records"));
        self.send_with_body(self.client.post(&url), "POST", &url, options, ErrorContext {
            domain: Some(domain_id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// `PUT /domains/{domain_id}/records/{record_id}`
    pub(crate) async fn update_domain_record(
        &self,
        domain_id: u64,
        record_id: u64,
        options: &DomainRecordOptions,
    ) -> Result<DomainRecord> {
        let url = self.url(&format!("/domains/{domain_id}/records/{record_id}"));
        self.send_with_body(self.client.put(&url), "PUT", &url, options, ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(domain_id.to_string()),
        })
        .await
    }

    /// `DELETE /domains/{domain_id}/records/{record_id}`
    pub(crate) async fn delete_domain_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        let url = self.url(&format!("/domains/{domain_id}/records/{record_id}"));
        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(domain_id.to_string()),
        };
        let (status, response_text) = HttpUtils::execute_request(
            self.authorized(self.client.delete(&url)),
            self.provider_name(),
            "DELETE",
            &url,
        )
        .await?;
        self.handle_response_error(status, &response_text, ctx)
    }

    /// 执行带 JSON body 的请求（POST/PUT）
    async fn send_with_body<T, B>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!(
            "[{}] Request Body: {}",
            self.provider_name(),
            truncate_for_log(&payload)
        );

        let request = request
            .header("Content-Type", "application/json")
            .body(payload);
        self.send(request, method, url, ctx).await
    }
}
