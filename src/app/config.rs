//! Alarm status configuration
//!
//! Settings are read from TOML. The file location is taken from
//! `ALARMSTATUS_CONFIG`, falling back to `config.toml` in the platform
//! config directory. A missing file means defaults.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "ALARMSTATUS_CONFIG";

const DEFAULT_LOG_FILTER: &str =
    "alarmstatus=info,aws_config=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmStatusConfig {
    /// AWS region; the SDK default chain applies when unset
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AlarmStatusConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AlarmStatusConfig {
    /// Default config file location for this platform
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "alarmstatus")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `ALARMSTATUS_CONFIG` or the default location
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match path {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AlarmStatusConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Build the AWS SDK config for the configured region and profile
    pub async fn load_sdk_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        loader.load().await
    }
}
