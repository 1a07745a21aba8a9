//! Campus Admin - Desktop dashboard for university administration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use campus_admin::client::ApiClient;
use campus_admin::config::{API_URL_ENV, AppConfig, ConfigLoadResult};
use campus_admin::ui::{App, SetupApp, SetupWizard};

/// Desktop dashboard for university administration.
#[derive(Parser)]
#[command(name = "campus-admin")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

/// Application launch mode.
enum LaunchMode {
    /// Normal operation with valid config.
    Normal(AppConfig),
    /// Setup wizard for first run or invalid config.
    Setup(SetupWizard, Option<String>),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The guard flushes the log file on drop
    let _log_guard = init_logging(&AppConfig::config_dir().join("logs"));

    tracing::info!("Campus Admin starting...");

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        (None, false) => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let env_url = std::env::var(API_URL_ENV).ok();

    let launch_mode = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(mut config) => {
            tracing::info!("Config loaded successfully");
            config.apply_overrides(env_url, cli.api_url);
            LaunchMode::Normal(config)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, starting setup wizard");
            let mut config = AppConfig::default();
            config.apply_overrides(env_url, cli.api_url);
            LaunchMode::Setup(SetupWizard::new(config), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            let mut config = AppConfig::default();
            config.apply_overrides(env_url, cli.api_url);
            LaunchMode::Setup(SetupWizard::new(config), Some(e.to_string()))
        }
    };

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    match launch_mode {
        LaunchMode::Normal(config) => run_main_app(config, config_path, rt),
        LaunchMode::Setup(wizard, error) => run_setup_wizard(wizard, error, config_path, rt),
    }
}

/// Console output plus a daily rolling log file.
///
/// Falls back to console only when the log directory cannot be created.
fn init_logging(log_dir: &Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer();

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        tracing_subscriber::registry().with(filter).with(console).init();
        tracing::warn!("Log directory {:?} unavailable: {}", log_dir, e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(log_dir, "campus-admin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Some(guard)
}

/// Run the setup wizard.
fn run_setup_wizard(
    wizard: SetupWizard,
    initial_error: Option<String>,
    config_path: PathBuf,
    rt: tokio::runtime::Runtime,
) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Admin - Setup")
            .with_inner_size([600.0, 500.0])
            .with_min_inner_size([500.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Campus Admin - Setup",
        options,
        Box::new(|_cc| Ok(Box::new(SetupApp::new(wizard, initial_error, config_path, rt)))),
    )
    .map_err(|e| anyhow::anyhow!("Setup wizard failed: {e}"))
}

/// Run the main application.
fn run_main_app(config: AppConfig, config_path: PathBuf, rt: tokio::runtime::Runtime) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Admin")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    let client = ApiClient::new(&config.api).context("Failed to build API client")?;
    tracing::info!("API endpoint: {}", client.base_url());

    eframe::run_native(
        "Campus Admin",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(client, config, config_path, rt)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application failed: {e}"))
}
