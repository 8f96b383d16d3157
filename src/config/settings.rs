//! Configuration settings for the simulation

use crate::error::ConfigurationError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    #[serde(default)]
    pub pattern: PatternConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: i64,
    pub columns: i64,
    pub edge_policy: EdgePolicy,
}

/// How neighbor lookups treat coordinates that fall off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Opposite edges are connected on both axes.
    #[default]
    Toroidal,
    /// Off-grid neighbors do not exist and are never counted.
    Bounded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Absent means "pick one from the clock at startup".
    pub seed: Option<i64>,
    pub threshold: f64,
}

/// A fixed initial pattern. When present it replaces random initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternConfig {
    pub file: Option<PathBuf>,
    pub cells: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub fps: u32,
    pub max_generations: Option<u64>,
    pub renderer: RendererKind,
    #[serde(default)]
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Terminal,
    Json,
    None,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            edge_policy: EdgePolicy::Toroidal,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            threshold: 0.2,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 20,
            max_generations: None,
            renderer: RendererKind::Terminal,
            stop_when_stable: false,
        }
    }
}

impl SeedConfig {
    /// The configured seed, or one derived from the current time.
    pub fn resolve(&self) -> i64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as i64)
                .unwrap_or_default()
        })
    }
}

impl PatternConfig {
    pub fn is_set(&self) -> bool {
        self.file.is_some() || self.cells.is_some()
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        if let Some(base) = path.parent() {
            settings.resolve_paths_from(base);
        }
        Ok(settings)
    }

    /// Anchor a relative pattern file at `base`, the directory of the config file
    pub fn resolve_paths_from(&mut self, base: &Path) {
        if let Some(file) = self.pattern.file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Fix the seed used for random initialization.
    ///
    /// Returns the seed when it had to be generated from the clock, so the
    /// caller can report it and the run can be repeated. Returns `None` when a
    /// seed was configured or a pattern replaces random initialization.
    pub fn pin_seed(&mut self) -> Option<i64> {
        if self.seed.seed.is_some() || self.pattern.is_set() {
            return None;
        }
        let seed = self.seed.resolve();
        self.seed.seed = Some(seed);
        Some(seed)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.grid.rows <= 0 || self.grid.columns <= 0 {
            return Err(ConfigurationError::InvalidDimensions {
                rows: self.grid.rows,
                columns: self.grid.columns,
            });
        }

        if !(0.0..=1.0).contains(&self.seed.threshold) {
            return Err(ConfigurationError::InvalidThreshold(self.seed.threshold));
        }

        if self.display.fps == 0 {
            return Err(ConfigurationError::InvalidFps(self.display.fps));
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.grid.columns = columns;
        }
        if let Some(edge_policy) = cli_overrides.edge_policy {
            self.grid.edge_policy = edge_policy;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seed.seed = Some(seed);
        }
        if let Some(threshold) = cli_overrides.threshold {
            self.seed.threshold = threshold;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            // A file on the command line beats any literal cells from the config.
            self.pattern.file = Some(pattern.clone());
            self.pattern.cells = None;
        }
        if let Some(fps) = cli_overrides.fps {
            self.display.fps = fps;
        }
        if let Some(generations) = cli_overrides.generations {
            self.display.max_generations = Some(generations);
        }
        if let Some(renderer) = cli_overrides.renderer {
            self.display.renderer = renderer;
        }
        if cli_overrides.stop_when_stable {
            self.display.stop_when_stable = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<i64>,
    pub columns: Option<i64>,
    pub edge_policy: Option<EdgePolicy>,
    pub seed: Option<i64>,
    pub threshold: Option<f64>,
    pub pattern: Option<PathBuf>,
    pub fps: Option<u32>,
    pub generations: Option<u64>,
    pub renderer: Option<RendererKind>,
    pub stop_when_stable: bool,
}
