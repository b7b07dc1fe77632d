use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_path, validate_range, validate_secret, validate_url, Validate,
};
use clap::Parser;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "deletion_result.json";
pub const CONFIG_ERROR_EXIT_CODE: i32 = 1;

/// 說明與版本輸出屬正常結束，其餘解析錯誤一律視為設定錯誤
pub fn parse_failure_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        CONFIG_ERROR_EXIT_CODE
    } else {
        0
    }
}

#[derive(Clone, Parser)]
#[command(name = "alias-purge")]
#[command(about = "Delete email aliases whose address starts with one of the configured masks")]
pub struct PurgeConfig {
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "API_URL")]
    pub api_url: String,

    #[arg(long, env = "MASKS", value_delimiter = ',', required = true)]
    pub masks: Vec<String>,

    #[arg(long, env = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, env = "PACING_DELAY_MS", default_value = "1000")]
    pub pacing_delay_ms: u64,

    #[arg(long, env = "LOG_JSON", help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PurgeConfig {
    pub fn new(api_key: &str, api_url: &str, masks: &[&str]) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
            masks: masks.iter().map(|m| m.to_string()).collect(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            request_timeout_secs: 10,
            pacing_delay_ms: 1000,
            json_logs: false,
            verbose: false,
        }
    }

    /// 去除前後空白並丟棄空字串：空遮罩是所有地址的前綴
    pub fn masks(&self) -> Vec<String> {
        self.masks
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

impl fmt::Debug for PurgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurgeConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("masks", &self.masks)
            .field("output_path", &self.output_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("pacing_delay_ms", &self.pacing_delay_ms)
            .field("json_logs", &self.json_logs)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Validate for PurgeConfig {
    fn validate(&self) -> Result<()> {
        validate_secret("api_key", &self.api_key)?;
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_list("masks", &self.masks())?;
        validate_path("output_path", &self.output_path)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
