use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env variable with an explicit path to config.toml
pub const CONFIG_ENV: &str = "SALES_DASHBOARD_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Parameters of the synthetic tables built at startup
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Rows of the global (multi-country) table
    pub rows: usize,
    pub seed: u64,
    /// Rows of the single-country table
    pub uae_rows: usize,
    pub uae_seed: u64,
    /// Upper bound for per-request `rows` overrides
    pub max_rows: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            seed: 42,
            uae_rows: 100,
            uae_seed: 42,
            max_rows: 100_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "filtered_sales.csv".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[dataset]
rows = 100
seed = 42
uae_rows = 100
uae_seed = 42
max_rows = 100000

[export]
file_name = "filtered_sales.csv"
"#;

/// Candidate config locations, most specific first
fn config_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn load_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. `SALES_DASHBOARD_CONFIG`
/// 2. Next to the executable
/// 3. Current directory
/// 4. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    for path in config_candidates() {
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            return load_from(&path);
        }
        tracing::debug!("config.toml not found at: {}", path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load the configuration once and keep it for the lifetime of the process
pub fn initialize_config() -> anyhow::Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = load_config()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// File name offered for CSV downloads
pub fn export_file_name() -> String {
    CONFIG
        .get()
        .map(|c| c.export.file_name.clone())
        .unwrap_or_else(|| ExportConfig::default().file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.dataset, DatasetConfig::default());
        assert_eq!(config.export.file_name, "filtered_sales.csv");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[dataset]\nseed = 7\n").unwrap();
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.dataset.rows, 100);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[server]\nport = \"not a number\"\n").is_err());
    }
}
