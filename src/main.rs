use alias_purge::config::parse_failure_exit_code;
use alias_purge::utils::error::CONFIG_HINT;
use alias_purge::utils::{logger, validation::Validate};
use alias_purge::{HttpAliasClient, LocalStorage, PurgeConfig, Purger, TokioPacer};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match PurgeConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let exit_code = parse_failure_exit_code(&e);
            if exit_code == 0 {
                e.exit();
            }
            logger::init_cli_logger(false);
            tracing::error!("❌ Configuration error: {}", e.render().to_string().trim_end());
            tracing::error!("💡 Suggestion: {}", CONFIG_HINT);
            std::process::exit(exit_code);
        }
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting alias deletion process...");
    tracing::debug!("Config: {:?}", config);

    // 設定錯誤時不發出任何網路請求
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let client = HttpAliasClient::new(&config)?;
    let storage = LocalStorage::new(".");
    let purger = Purger::from_config(client, storage, TokioPacer, &config);
    tracing::info!("🎯 Masks: {}", purger.masks().join(", "));

    match purger.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Alias deletion process completed: {} deleted over {} pages",
                summary.total_deleted,
                summary.pages_processed
            );
        }
        Err(e) => {
            tracing::error!("❌ Failed to save deletion results: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
