use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shelfwatch::application::services::{InventoryStore, ThemeService};
use shelfwatch::domain::keybinding::KeyMap;
use shelfwatch::infrastructure::{AppConfig, CliArgs, JsonInventoryStorage, StorageManager};
use shelfwatch::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs, storage: &StorageManager) -> Result<AppConfig> {
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

async fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let config = load_config(args, &storage)?;

    init_logging(&config)?;

    info!(version = shelfwatch::VERSION, "Starting Shelfwatch");

    let data_dir = config
        .effective_data_dir()
        .ok_or_else(|| eyre!("Could not determine a data directory; pass --data-dir"))?;

    let mut keymap = KeyMap::default();
    let rejected = keymap.apply_overrides(&config.keybindings);
    for (key, error) in &rejected {
        warn!(key = %key, error = %error, "Ignoring keybinding override");
    }

    let store = InventoryStore::load(Arc::new(JsonInventoryStorage::new(&data_dir))).await;
    let theme_service = ThemeService::load(Arc::new(storage)).await;

    let options = AppOptions {
        accent_color: config.theme.accent_color.clone(),
        default_sort: config.ui.default_sort,
        notification_duration: config.notification_duration(),
        keymap,
    };

    let mut app = App::new(store, theme_service, options);
    if !rejected.is_empty() {
        app.warn_on_start(format!(
            "Ignored {} invalid keybinding(s), see log",
            rejected.len()
        ));
    }

    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app().await?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
