use crate::domain::model::{AliasPage, DeletionResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait AliasService: Send + Sync {
    async fn list_aliases(&self, page_id: u32) -> Result<AliasPage>;
    async fn delete_alias(&self, alias_id: i64) -> Result<DeletionResult>;
}

/// 摘要輸出的目的地
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 每處理一個別名後的節流等待
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}
