//! Configuration file handling for folio.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file means defaults; a malformed one is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use folio_core::{FieldConfig, MAX_PARTICLES, Section};
use log::debug;
use serde::{Deserialize, Serialize};

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Per-section tweaks applied on top of the built-in preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_divisor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_distance: Option<f64>,
}

impl SectionOverride {
    /// Apply the set fields to `base`. Non-positive values are ignored and
    /// `max_count` is clamped to [`MAX_PARTICLES`].
    pub fn apply(&self, base: FieldConfig) -> FieldConfig {
        let positive = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        FieldConfig {
            max_count: self
                .max_count
                .map_or(base.max_count, |count| count.min(MAX_PARTICLES)),
            density_divisor: positive(self.density_divisor).unwrap_or(base.density_divisor),
            max_speed: positive(self.max_speed).unwrap_or(base.max_speed),
            connection_distance: positive(self.connection_distance)
                .unwrap_or(base.connection_distance),
            ..base
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Time between refreshes in milliseconds.
    pub frame_interval_ms: u64,
    /// Virtual pixels per terminal column.
    pub cell_width_px: f64,
    /// Virtual pixels per terminal row.
    pub cell_height_px: f64,
    /// Fixed seed for reproducible layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Draw the hero's code rain layer.
    pub code_rain: bool,
    /// Name shown in the hero heading.
    pub name: String,
    /// Hero tagline, typed out on start.
    pub tagline: String,
    /// Delay between typed tagline characters in milliseconds.
    pub typing_interval_ms: u64,
    /// Log level for the log file (`off`, `error`, ..., `trace`).
    pub log_level: String,
    /// Per-section field overrides.
    pub sections: BTreeMap<Section, SectionOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            seed: None,
            code_rain: true,
            name: String::new(),
            tagline: "Full Stack Developer & ML Enthusiast".to_string(),
            typing_interval_ms: 100,
            log_level: "info".to_string(),
            sections: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Platform directories for folio, if a home directory exists.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "folio")
    }

    /// Default config file path.
    pub fn path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).wrap_err("failed to serialize config")?;
        fs::write(path, text)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(eyre!("frame_interval_ms must be at least 1"));
        }
        if !(self.cell_width_px > 0.0 && self.cell_height_px > 0.0) {
            return Err(eyre!("cell_width_px and cell_height_px must be positive"));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    /// Field tuning for `section` with any overrides applied.
    pub fn field_config(&self, section: Section) -> FieldConfig {
        let base = section.field_config();
        match self.sections.get(&section) {
            Some(tweak) => tweak.apply(base),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("seed = 42\ncode_rain = false\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(!config.code_rain);
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.tagline, "Full Stack Developer & ML Enthusiast");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("colour = \"red\"\n").is_err());
        assert!(Config::parse("[sections.hero]\nspeed = 1.0\n").is_err());
        assert!(Config::parse("[sections.footer]\nmax_count = 1\n").is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::parse("frame_interval_ms = 0\n").is_err());
        assert!(Config::parse("cell_width_px = 0.0\n").is_err());
    }

    #[test]
    fn test_section_overrides() {
        let config = Config::parse(
            "[sections.hero]\nmax_count = 20\nconnection_distance = 60.0\n\
             [sections.about]\ndensity_divisor = -1.0\n",
        )
        .unwrap();

        let hero = config.field_config(Section::Hero);
        assert_eq!(hero.max_count, 20);
        assert_eq!(hero.connection_distance, 60.0);
        assert_eq!(hero.density_divisor, FieldConfig::HERO.density_divisor);
        assert_eq!(hero.particle_color, FieldConfig::HERO.particle_color);

        // Non-positive overrides fall back to the preset
        assert_eq!(config.field_config(Section::About), FieldConfig::ABOUT);
        assert_eq!(config.field_config(Section::Skills), FieldConfig::SKILLS);
    }

    #[test]
    fn test_oversized_max_count_is_clamped() {
        let config =
            Config::parse("[sections.hero]\nmax_count = 100000\ndensity_divisor = 1.0\n").unwrap();
        let hero = config.field_config(Section::Hero);
        assert_eq!(hero.max_count, MAX_PARTICLES);
        assert_eq!(hero.particle_count(1920.0, 1080.0), MAX_PARTICLES);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("folio-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);

        let mut config = Config {
            seed: Some(7),
            name: "Ada".to_string(),
            ..Config::default()
        };
        config.sections.insert(
            Section::Contact,
            SectionOverride {
                max_count: Some(10),
                ..SectionOverride::default()
            },
        );
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("folio-config-test-missing").join(CONFIG_FILE);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = std::env::temp_dir().join(format!("folio-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "frame_interval_ms = \"fast\"").unwrap();

        assert!(Config::load_from(&path).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
