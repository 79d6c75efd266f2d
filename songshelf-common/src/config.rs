//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the root folder (API tier)
pub const ROOT_FOLDER_ENV: &str = "SONGSHELF_ROOT";

/// Environment variable naming the downstream API base URL (web tier)
pub const API_URL_ENV: &str = "SONGSHELF_API_URL";

/// Default base URL of the catalog API, matching its default listen port
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5741";

/// Optional settings read from the per-module TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Folder holding songshelf.db (API tier)
    pub root_folder: Option<String>,
    /// Base URL of the catalog API (web tier)
    pub api_base_url: Option<String>,
    /// Listen port override
    pub listen_port: Option<u16>,
}

impl TomlConfig {
    /// Load the config file for `module` ("catalog-api" or "web"), or
    /// defaults if no file exists. A file that exists but does not parse is
    /// an error; silent fallback there would mask typos.
    pub fn load(module: &str) -> Result<Self> {
        let Some(path) = config_file_path(module) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Resolve the root folder holding the database file.
pub fn resolve_root_folder(cli_arg: Option<&str>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.root_folder {
        return PathBuf::from(path);
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Resolve the base URL of the catalog API consumed by the web tier's
/// HTTP client. A trailing slash is stripped so paths can be appended.
pub fn resolve_api_base_url(cli_arg: Option<&str>, config: &TomlConfig) -> String {
    let url = if let Some(url) = cli_arg {
        url.to_string()
    } else if let Ok(url) = std::env::var(API_URL_ENV) {
        url
    } else if let Some(url) = &config.api_base_url {
        url.clone()
    } else {
        DEFAULT_API_BASE_URL.to_string()
    };

    url.trim_end_matches('/').to_string()
}

/// Ensure the root folder exists and return the database path inside it.
pub fn database_path(root_folder: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(root_folder)?;
    Ok(root_folder.join("songshelf.db"))
}

/// Per-module config file location: ~/.config/songshelf/<module>.toml,
/// falling back to /etc/songshelf/<module>.toml on Linux.
fn config_file_path(module: &str) -> Option<PathBuf> {
    let file_name = format!("{}.toml", module);

    if let Some(dir) = dirs::config_dir() {
        let user_config = dir.join("songshelf").join(&file_name);
        if user_config.exists() {
            return Some(user_config);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/songshelf").join(&file_name);
        if system_config.exists() {
            return Some(system_config);
        }
    }

    // Default to the user path so callers can report where a file would go
    dirs::config_dir().map(|d| d.join("songshelf").join(file_name))
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("songshelf"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/songshelf"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("songshelf"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/songshelf"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("songshelf"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\songshelf"))
    } else {
        PathBuf::from("./songshelf_data")
    }
}
