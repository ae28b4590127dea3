//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use booking_assistant::adapters::catalog::{FixtureCatalog, JsonCatalog};
use booking_assistant::adapters::persistence::JsonConversationLog;
use booking_assistant::adapters::ui::tui::TuiInputPort;
use booking_assistant::ports::{CatalogPort, ConversationLogPort, InputPort};
use booking_assistant::shared::config::AppConfig;
use booking_assistant::usecases::{AssistantService, SearchService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    booking_assistant::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;
    let data_dir_abs = data_path
        .canonicalize()
        .unwrap_or_else(|_| data_path.clone());
    info!(path = %data_dir_abs.display(), "data directory");

    // --- Catalog source: JSON file if configured, otherwise built-in fixtures ---
    let catalog: Arc<dyn CatalogPort> = match &cfg.catalog_path {
        Some(path) => Arc::new(
            JsonCatalog::load(path)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        ),
        None => {
            let delay_ms = cfg.catalog_delay_ms_or_default();
            info!(delay_ms, "serving built-in storefront catalog");
            Arc::new(FixtureCatalog::with_delay(delay_ms))
        }
    };

    // --- Conversation log (capped, persisted as JSON) ---
    let log: Option<Arc<dyn ConversationLogPort>> = if cfg.is_log_enabled() {
        let capacity = cfg.log_capacity_or_default();
        let log = JsonConversationLog::new(data_path.join("conversation_log.json"), capacity);
        log.load().await.map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(capacity, "conversation log enabled");
        Some(Arc::new(log))
    } else {
        warn!("conversation log disabled (BOOKING_ASSISTANT_LOG_ENABLED=false)");
        None
    };

    // --- Services ---
    let max_results = cfg.max_results_or_default();
    let search = Arc::new(SearchService::with_max_results(catalog, max_results));
    let assistant = Arc::new(AssistantService::new(search, log));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        assistant,
        cfg.language_or_default(),
        data_path.join("exports"),
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
