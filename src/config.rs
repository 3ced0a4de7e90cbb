use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::settings::{GenerationSettings, ImageType, Platform};

/// Top-level configuration for stock-meta.
///
/// Holds the generation settings shared by every file in a batch and the
/// export behavior. Missing sections and keys take their defaults.
///
/// # Loading
///
/// ```rust,no_run
/// use stock_meta::config::Config;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.generation.keywords_count = 40;
/// config.generation.negative_keywords_text = "blurry, text".into();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title, description, keyword, and prompt settings.
    pub generation: GenerationSettings,
    /// Export format and destination.
    pub export: ExportConfig,
}

/// Export behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Fixed output format. `None` follows the batch recommendation.
    pub format: Option<ExportFormat>,
    /// Generate an AI-image prompt for every file.
    pub include_prompts: bool,
    /// Directory to write exports into. `None` prints to stdout.
    pub output_dir: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: None,
            include_prompts: true,
            output_dir: None,
        }
    }
}

/// Per-run values that take precedence over the loaded config.
///
/// `None` and `false` leave the config value untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub platform: Option<Platform>,
    pub image_type: Option<ImageType>,
    pub title_length: Option<usize>,
    pub keywords_count: Option<usize>,
    pub negative_keywords_text: Option<String>,
    pub format: Option<ExportFormat>,
    pub no_prompt: bool,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Fold per-run overrides into this config, then clamp the limits.
    pub fn apply(&mut self, overrides: &Overrides) {
        let generation = &mut self.generation;
        if let Some(platform) = overrides.platform {
            generation.platform = platform;
        }
        if let Some(image_type) = overrides.image_type {
            generation.image_type = image_type;
        }
        if let Some(n) = overrides.title_length {
            generation.title_length = n;
        }
        if let Some(n) = overrides.keywords_count {
            generation.keywords_count = n;
        }
        if let Some(ref list) = overrides.negative_keywords_text {
            generation.negative_keywords_text = list.clone();
        }
        *generation = generation.clamped();

        if overrides.format.is_some() {
            self.export.format = overrides.format;
        }
        if overrides.no_prompt {
            self.export.include_prompts = false;
        }
        if let Some(ref dir) = overrides.output_dir {
            self.export.output_dir = Some(dir.display().to_string());
        }
    }

    /// Resolve the config file path, in the same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    ///
    /// A missing file yields the defaults. Length limits outside their
    /// allowed ranges are clamped with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let mut config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;

        let clamped = config.generation.clamped();
        if clamped != config.generation {
            log::warn!("Some generation limits were out of range and have been clamped");
            config.generation = clamped;
        }

        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}
