use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_layout_path")]
    pub path: String,
}

/// Default line-of-sight query the CLI runs when no cells are given on the
/// command line.
#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub source_x: i32,
    #[serde(default)]
    pub source_y: i32,
    #[serde(default)]
    pub target_x: i32,
    #[serde(default)]
    pub target_y: i32,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

fn default_layout_path() -> String {
    "grid_layout.txt".to_string()
}
fn default_snapshot_path() -> String {
    "grid_snapshot.json".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            path: default_layout_path(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            source_x: 0,
            source_y: 0,
            target_x: 0,
            target_y: 0,
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_snapshot_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            query: QueryConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
