//! Configuration for FCMKit
//!
//! Holds every value the converter used to hard-code: the file header
//! metadata, the cut-machine parameters, the thumbnail, and the encoder
//! policy. Supports JSON and TOML files, chosen by extension.
//!
//! Configuration is organized into logical sections:
//! - File settings (identification metadata, cut data, thumbnail)
//! - Encoder settings (fixed-point scale, arc handling, travel weighting)

use fcmkit_core::DEFAULT_SCALE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use crate::thumbnail::blank_bitmap;

/// How elliptical arc commands are treated by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcPolicy {
    /// Drop the arc from the output and log a warning
    Drop,
    /// Fail the conversion
    Reject,
}

impl Default for ArcPolicy {
    fn default() -> Self {
        Self::Drop
    }
}

impl fmt::Display for ArcPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for ArcPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("Unknown arc policy: {}", s)),
        }
    }
}

/// Cut-machine parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutDataSettings {
    /// Cutting mat identifier
    pub mat_id: u32,
    /// Cuttable width in fixed-point units
    pub cut_width: u32,
    /// Cuttable height in fixed-point units
    pub cut_height: u32,
    /// Seam allowance width in fixed-point units
    pub seam_allowance_width: u32,
}

impl Default for CutDataSettings {
    fn default() -> Self {
        Self {
            mat_id: 0,
            cut_width: 29667,
            cut_height: 29880,
            seam_allowance_width: 2000,
        }
    }
}

/// Thumbnail embedded in the file header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSettings {
    /// Width in thumbnail blocks
    pub block_width: u8,
    /// Height in thumbnail blocks
    pub block_height: u8,
    /// Raw image bytes (base64 in config files)
    #[serde(with = "fcmkit_core::serde_base64")]
    pub data: Vec<u8>,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            block_width: 3,
            block_height: 3,
            data: blank_bitmap(88, 88),
        }
    }
}

/// File header metadata and cut data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_content_id")]
    pub content_id: u32,
    #[serde(default)]
    pub short_name: String,
    #[serde(default = "blank_name")]
    pub long_name: String,
    #[serde(default = "blank_name")]
    pub author_name: String,
    #[serde(default = "blank_name")]
    pub copyright: String,
    #[serde(default)]
    pub cut_data: CutDataSettings,
    #[serde(default)]
    pub thumbnail: ThumbnailSettings,
}

fn default_content_id() -> u32 {
    400000002
}

// Stock header strings are a single space.
fn blank_name() -> String {
    " ".to_string()
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            content_id: default_content_id(),
            short_name: String::new(),
            long_name: blank_name(),
            author_name: blank_name(),
            copyright: blank_name(),
            cut_data: CutDataSettings::default(),
            thumbnail: ThumbnailSettings::default(),
        }
    }
}

/// Encoder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderSettings {
    /// Fixed-point steps per document unit
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Arc command handling
    #[serde(default)]
    pub arc_policy: ArcPolicy,
    /// Weight applied to vertical displacement when ordering paths
    #[serde(default = "default_travel_y_weight")]
    pub travel_y_weight: f64,
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}
fn default_travel_y_weight() -> f64 {
    10.0
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            arc_policy: ArcPolicy::default(),
            travel_y_weight: default_travel_y_weight(),
        }
    }
}

/// Complete converter configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File header settings
    #[serde(default)]
    pub file: FileSettings,
    /// Encoder settings
    #[serde(default)]
    pub encoder: EncoderSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config dir>/fcmkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fcmkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the explicit config file if given, else the platform file if it
    /// exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::of(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.encoder.scale.is_finite() && self.encoder.scale > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "encoder.scale".to_string(),
                value: self.encoder.scale.to_string(),
            });
        }

        if !(self.encoder.travel_y_weight.is_finite() && self.encoder.travel_y_weight > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "encoder.travel_y_weight".to_string(),
                value: self.encoder.travel_y_weight.to_string(),
            });
        }

        let cut = &self.file.cut_data;
        if cut.cut_width == 0 || cut.cut_height == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "file.cut_data".to_string(),
                reason: "cut area must be > 0".to_string(),
            });
        }

        if self.file.thumbnail.data.is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "file.thumbnail.data".to_string(),
                reason: "thumbnail must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
