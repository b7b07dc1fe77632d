use crate::config::PurgeConfig;
use crate::core::matcher::matches;
use crate::domain::model::{RunSummary, Termination};
use crate::domain::ports::{AliasService, Pacer, Storage};
use crate::utils::error::Result;
use serde::Serialize;
use std::time::Duration;

/// 逐頁掃描別名，刪除符合遮罩者，最後寫出摘要
pub struct Purger<A: AliasService, S: Storage, P: Pacer> {
    service: A,
    storage: S,
    pacer: P,
    masks: Vec<String>,
    pacing_delay: Duration,
    output_path: String,
}

impl<A: AliasService, S: Storage, P: Pacer> Purger<A, S, P> {
    pub fn new(
        service: A,
        storage: S,
        pacer: P,
        masks: Vec<String>,
        pacing_delay: Duration,
        output_path: String,
    ) -> Self {
        Self {
            service,
            storage,
            pacer,
            masks,
            pacing_delay,
            output_path,
        }
    }

    pub fn from_config(service: A, storage: S, pacer: P, config: &PurgeConfig) -> Self {
        Self::new(
            service,
            storage,
            pacer,
            config.masks(),
            config.pacing_delay(),
            config.output_path.clone(),
        )
    }

    pub fn masks(&self) -> &[String] {
        &self.masks
    }

    /// 掃描到第一個空頁（或列表失敗）為止，並寫出摘要。只有寫檔失敗會回傳錯誤
    pub async fn run(&self) -> Result<RunSummary> {
        let summary = self.scan().await;
        self.persist(&summary).await?;
        Ok(summary)
    }

    async fn scan(&self) -> RunSummary {
        let mut page_id: u32 = 0;
        let mut deleted_aliases = Vec::new();

        let termination = loop {
            let page = match self.service.list_aliases(page_id).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!("❌ Error retrieving aliases for page {}: {}", page_id, e);
                    tracing::error!("💡 {}", e.recovery_suggestion());
                    break Termination::ListFailed {
                        page_id,
                        reason: e.to_string(),
                    };
                }
            };

            if page.is_exhausted() {
                if page_id == 0 {
                    tracing::info!("No aliases found.");
                } else {
                    tracing::info!("No more aliases to process.");
                }
                break Termination::Exhausted;
            }

            for alias in &page.aliases {
                if matches(&alias.email, &self.masks) {
                    tracing::info!("Alias {} matches mask. Deleting...", alias.email);
                    match self.service.delete_alias(alias.id).await {
                        Ok(result) if result.deleted => {
                            tracing::info!("✅ Alias {} successfully deleted.", alias.email);
                            deleted_aliases.push(alias.email.clone());
                        }
                        Ok(result) => {
                            tracing::error!(
                                "❌ Failed to delete alias {}. Response: {}",
                                alias.email,
                                result.raw
                            );
                        }
                        Err(e) => {
                            tracing::error!("❌ Failed to delete alias {}: {}", alias.email, e);
                        }
                    }
                } else {
                    tracing::info!("Alias {} does not match any mask.", alias.email);
                }

                self.pacer.pause(self.pacing_delay).await;
            }

            page_id += 1;
            tracing::info!("Moving to the next page: {}", page_id);
        };

        let total_deleted = deleted_aliases.len();
        tracing::info!("📊 Total aliases deleted: {}", total_deleted);
        tracing::info!("📊 Pages processed: {}", page_id);

        RunSummary {
            deleted_aliases,
            total_deleted,
            pages_processed: page_id,
            termination,
        }
    }

    async fn persist(&self, summary: &RunSummary) -> Result<()> {
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        summary.serialize(&mut serializer)?;

        self.storage.write_file(&self.output_path, &data).await?;
        tracing::info!("📁 Deletion results saved to {}", self.output_path);
        Ok(())
    }
}
