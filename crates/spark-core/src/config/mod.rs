//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Spark configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ui: UiConfig,
    pub timing: TimingConfig,
}

/// UI preferences persisted across runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub dark_mode: bool,
}

/// Mock-latency timers, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub execute_delay_ms: u64,
    pub suggest_debounce_ms: u64,
    pub submit_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig { dark_mode: false },
            timing: TimingConfig {
                execute_delay_ms: 1500,
                suggest_debounce_ms: 300,
                submit_reset_ms: 3000,
            },
        }
    }
}

impl TimingConfig {
    /// Delay used by the mock executor before fabricating results
    pub fn execute_delay(&self) -> Duration {
        Duration::from_millis(self.execute_delay_ms)
    }

    /// Debounce window for suggestion recomputation
    pub fn suggest_debounce(&self) -> Duration {
        Duration::from_millis(self.suggest_debounce_ms)
    }

    /// Delay before a submitted contribution form resets
    pub fn submit_reset(&self) -> Duration {
        Duration::from_millis(self.submit_reset_ms)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("SPARK_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("spark")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Flip the persisted dark-mode flag and write it back
    pub fn toggle_dark_mode(&mut self) -> anyhow::Result<bool> {
        self.ui.dark_mode = !self.ui.dark_mode;
        self.save()?;
        Ok(self.ui.dark_mode)
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "ui.dark_mode" => Ok(self.ui.dark_mode.to_string()),
            "timing.execute_delay_ms" => Ok(self.timing.execute_delay_ms.to_string()),
            "timing.suggest_debounce_ms" => Ok(self.timing.suggest_debounce_ms.to_string()),
            "timing.submit_reset_ms" => Ok(self.timing.submit_reset_ms.to_string()),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `spark config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "ui.dark_mode" => {
                self.ui.dark_mode = value
                    .parse()
                    .with_context(|| format!("Invalid dark_mode value: {}", value))?;
            }
            "timing.execute_delay_ms" => {
                self.timing.execute_delay_ms = value
                    .parse()
                    .with_context(|| format!("Invalid execute_delay_ms value: {}", value))?;
            }
            "timing.suggest_debounce_ms" => {
                self.timing.suggest_debounce_ms = value
                    .parse()
                    .with_context(|| format!("Invalid suggest_debounce_ms value: {}", value))?;
            }
            "timing.submit_reset_ms" => {
                self.timing.submit_reset_ms = value
                    .parse()
                    .with_context(|| format!("Invalid submit_reset_ms value: {}", value))?;
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `spark config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = vec![
            "ui.dark_mode",
            "timing.execute_delay_ms",
            "timing.suggest_debounce_ms",
            "timing.submit_reset_ms",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
