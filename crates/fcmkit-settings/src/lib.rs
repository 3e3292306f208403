//! FCMKit Settings Crate
//!
//! Handles converter configuration: cut-file header metadata, cut-machine
//! parameters, the embedded thumbnail, and encoder policy.

pub mod config;
pub mod error;
pub mod thumbnail;

pub use config::{
    ArcPolicy, Config, CutDataSettings, EncoderSettings, FileSettings, ThumbnailSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use thumbnail::blank_bitmap;
