use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3010";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Bearer token handed to the API. Signed out when unset.
    pub access_token: Option<String>,
    /// Read reports from this JSON file instead of the API.
    pub reports_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            reports_file: None,
        }
    }
}

impl AppConfig {
    /// Applies `REPORTCARD_API_URL` and `REPORTCARD_TOKEN` on top of the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("REPORTCARD_API_URL")
            && !url.trim().is_empty()
        {
            self.api_base_url = url;
        }
        if let Ok(token) = std::env::var("REPORTCARD_TOKEN")
            && !token.trim().is_empty()
        {
            self.access_token = Some(token);
        }
        self
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path()).with_env_overrides()
}

pub fn load_config_from(path: &std::path::Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config_to(path: &std::path::Path, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("REPORTCARD_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("REPORTCARD_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("ReportCard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("ReportCard");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("reportcard");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".config").join("reportcard");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".reportcard")
}
