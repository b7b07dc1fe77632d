use serde::{Deserialize, Serialize};

/// 遠端服務管理的別名。除了 `id` 與 `email` 之外的欄位原樣保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub id: i64,
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Alias {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// 一頁列表結果。`skipped` 是無法解析而被略過的項目數
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasPage {
    pub aliases: Vec<Alias>,
    pub skipped: usize,
}

impl AliasPage {
    pub fn new(aliases: Vec<Alias>) -> Self {
        Self {
            aliases,
            skipped: 0,
        }
    }

    /// 服務端回傳的原始列表為空時才代表已無更多別名
    pub fn is_exhausted(&self) -> bool {
        self.aliases.is_empty() && self.skipped == 0
    }
}

/// 單次刪除的結果與服務端原始回應
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionResult {
    pub deleted: bool,
    pub raw: serde_json::Value,
}

impl DeletionResult {
    pub fn from_response(raw: serde_json::Value) -> Self {
        let deleted = raw
            .get("deleted")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);
        Self { deleted, raw }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// 遇到空頁
    Exhausted,
    /// 列表請求失敗，掃描提前結束
    ListFailed { page_id: u32, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub deleted_aliases: Vec<String>,
    pub total_deleted: usize,
    pub pages_processed: u32,
    #[serde(skip)]
    pub termination: Termination,
}
