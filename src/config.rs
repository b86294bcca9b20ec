use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{FailurePolicy, MessageId, MissingLocalePolicy};

pub const CONFIG_FILE_NAME: &str = ".catalintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_signatures_file")]
    pub signatures_file: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Locale order; the position of a locale is its index.
    #[serde(default)]
    pub locales: Vec<String>,
    /// Highest message id to verify. Derived from the loaded files when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_id: Option<MessageId>,
    #[serde(default)]
    pub fail_fast: bool,
    #[serde(default)]
    pub missing_locales: MissingLocalePolicy,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_signatures_file() -> String {
    "./signatures.json".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            signatures_file: default_signatures_file(),
            primary_locale: default_primary_locale(),
            locales: Vec::new(),
            max_id: None,
            fail_fast: false,
            missing_locales: MissingLocalePolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_id == Some(0) {
            bail!("Invalid 'maxId': message ids start at 1");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.is_empty() {
                bail!("Invalid 'locales': empty locale name");
            }
            if !seen.insert(locale.as_str()) {
                bail!("Invalid 'locales': \"{}\" is listed twice", locale);
            }
        }

        Ok(())
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Collect
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
