//! Main entry point for the ReportCard application
//! Sets up logging, configuration and the Tokio runtime, then starts egui.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use reportcard::infra::app_config::{self, AppConfig};
use reportcard::ui::app::{APP_TITLE, AppServices, ReportCardApp};

/// Global Tokio runtime handle for async operations throughout the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "reportcard", version, about = "Dialogue practice report cards")]
struct Args {
    /// Backend base URL, e.g. http://localhost:3010
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token for the signed-in user
    #[arg(long)]
    token: Option<String>,

    /// Read reports from a JSON file instead of the backend
    #[arg(long, value_name = "FILE")]
    reports: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Persist the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = self.api_url {
            config.api_base_url = url;
        }
        if let Some(token) = self.token {
            config.access_token = Some(token);
        }
        if let Some(path) = self.reports {
            config.reports_file = Some(path);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (print_config, save_config) = (args.print_config, args.save_config);
    let config = args.apply(app_config::load_config());

    if save_config {
        let path = app_config::config_path();
        app_config::save_config_to(&path, &config)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("saved config to {}", path.display());
        return Ok(());
    }

    if print_config {
        let mut redacted = config.clone();
        if redacted.access_token.is_some() {
            redacted.access_token = Some("<redacted>".to_string());
        }
        print!("{}", toml::to_string_pretty(&redacted)?);
        return Ok(());
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create Tokio runtime")?;
    let rt = RUNTIME.get_or_init(|| rt);
    let _guard = rt.enter();

    let services = AppServices::from_config(&config)
        .with_context(|| format!("invalid api_base_url {:?}", config.api_base_url))?;
    log::info!("config loaded from {}", app_config::config_path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ReportCardApp::new_egui(cc, services)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run {APP_TITLE}: {e}"))
}
