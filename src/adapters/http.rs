use crate::config::PurgeConfig;
use crate::domain::model::{Alias, AliasPage, DeletionResult};
use crate::domain::ports::AliasService;
use crate::utils::error::{PurgeError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

/// 遠端服務使用的驗證標頭名稱
pub const AUTH_HEADER: &str = "Authentication";

/// `aliases` 缺少或為 null 時視為空頁
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    aliases: Option<Vec<serde_json::Value>>,
}

/// 以 reqwest 實作的別名服務客戶端，每個請求只發送一次、不重試
pub struct HttpAliasClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpAliasClient {
    pub fn new(config: &PurgeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base().to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(PurgeError::HttpStatusError {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl AliasService for HttpAliasClient {
    async fn list_aliases(&self, page_id: u32) -> Result<AliasPage> {
        let url = format!("{}/v2/aliases", self.base_url);
        tracing::info!("Requesting aliases for page {}", page_id);

        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .query(&[("page_id", page_id)])
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let body: ListResponse = Self::ensure_success(response)?.json().await?;
        let items = body.aliases.unwrap_or_default();

        // 缺少 id 或 email 的項目跳過並計數，不中斷整頁
        let mut page = AliasPage::new(Vec::with_capacity(items.len()));
        for item in items {
            match serde_json::from_value::<Alias>(item.clone()) {
                Ok(alias) => page.aliases.push(alias),
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Skipping malformed alias on page {}: {} ({})",
                        page_id,
                        item,
                        e
                    );
                    page.skipped += 1;
                }
            }
        }

        tracing::info!(
            "Successfully retrieved {} aliases for page {} ({} skipped)",
            page.aliases.len(),
            page_id,
            page.skipped
        );
        Ok(page)
    }

    async fn delete_alias(&self, alias_id: i64) -> Result<DeletionResult> {
        let url = format!("{}/aliases/{}", self.base_url, alias_id);
        tracing::info!("Attempting to delete alias ID: {}", alias_id);

        let response = self
            .client
            .delete(&url)
            .header(AUTH_HEADER, &self.api_key)
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let body = Self::ensure_success(response)?.text().await?;
        let raw = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));

        let result = DeletionResult::from_response(raw);
        if result.deleted {
            tracing::info!("Successfully deleted alias ID: {}", alias_id);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> HttpAliasClient {
        let config = PurgeConfig::new("test-key", &server.base_url(), &["test+"]);
        HttpAliasClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_aliases_sends_auth_header_and_page() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/aliases")
                .query_param("page_id", "3")
                .header("Authentication", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "aliases": [
                        {"id": 1, "email": "test+a@x.com", "enabled": true},
                        {"id": 2, "email": "other@x.com"}
                    ]
                }));
        });

        let page = client_for(&server).list_aliases(3).await.unwrap();
        let aliases = &page.aliases;

        api_mock.assert();
        assert_eq!(page.skipped, 0);
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0].id, 1);
        assert_eq!(aliases[0].email, "test+a@x.com");
        assert_eq!(aliases[1].email, "other@x.com");
    }

    #[tokio::test]
    async fn test_list_aliases_skips_malformed_items() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/aliases");
            then.status(200).json_body(serde_json::json!({
                "aliases": [
                    {"id": 1},
                    {"email": "no-id@x.com"},
                    {"id": 3, "email": "test+ok@x.com"}
                ]
            }));
        });

        let page = client_for(&server).list_aliases(0).await.unwrap();
        assert_eq!(page.aliases, vec![Alias::new(3, "test+ok@x.com")]);
        assert_eq!(page.skipped, 2);
        assert!(!page.is_exhausted());
    }

    #[tokio::test]
    async fn test_list_aliases_page_of_only_malformed_items_is_not_exhausted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/aliases");
            then.status(200).json_body(serde_json::json!({
                "aliases": [{"id": 1, "email": null}]
            }));
        });

        let page = client_for(&server).list_aliases(0).await.unwrap();
        assert!(page.aliases.is_empty());
        assert_eq!(page.skipped, 1);
        assert!(!page.is_exhausted());
    }

    #[tokio::test]
    async fn test_list_aliases_without_aliases_key_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/aliases");
            then.status(200).json_body(serde_json::json!({}));
        });

        let page = client_for(&server).list_aliases(0).await.unwrap();
        assert!(page.is_exhausted());
    }

    #[tokio::test]
    async fn test_list_aliases_null_aliases_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/aliases");
            then.status(200).json_body(serde_json::json!({"aliases": null}));
        });

        let page = client_for(&server).list_aliases(0).await.unwrap();
        assert!(page.is_exhausted());
    }

    #[tokio::test]
    async fn test_list_aliases_error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/aliases");
            then.status(500);
        });

        let err = client_for(&server).list_aliases(0).await.unwrap_err();
        assert!(matches!(
            err,
            PurgeError::HttpStatusError { status, .. } if status.as_u16() == 500
        ));
    }

    #[tokio::test]
    async fn test_delete_alias_parses_deleted_flag() {
        let server = MockServer::start();
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/aliases/7")
                .header("Authentication", "test-key");
            then.status(200).json_body(serde_json::json!({"deleted": true}));
        });

        let result = client_for(&server).delete_alias(7).await.unwrap();

        delete_mock.assert();
        assert!(result.deleted);
        assert_eq!(result.raw, serde_json::json!({"deleted": true}));
    }

    #[tokio::test]
    async fn test_delete_alias_non_json_body_is_not_deleted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/aliases/8");
            then.status(200).body("ok");
        });

        let result = client_for(&server).delete_alias(8).await.unwrap();
        assert!(!result.deleted);
        assert_eq!(result.raw, serde_json::Value::String("ok".to_string()));
    }

    #[tokio::test]
    async fn test_delete_alias_not_found_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/aliases/9");
            then.status(404)
                .json_body(serde_json::json!({"error": "Unknown error"}));
        });

        let result = client_for(&server).delete_alias(9).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_api_error() {
        // 沒有服務監聽的埠
        let config = PurgeConfig::new("k", "http://127.0.0.1:9", &["test+"]);
        let client = HttpAliasClient::new(&config).unwrap();

        let err = client.list_aliases(0).await.unwrap_err();
        assert!(matches!(err, PurgeError::ApiError(_)));
    }
}
