//! Persisted JSON settings for the module.
//!
//! The host keeps credentials next to a global section with the download
//! quality and cover options:
//!
//! ```json
//! {
//!     "username": "",
//!     "password": "",
//!     "global": {
//!         "download_quality": "high",
//!         "covers": { "main_resolution": 1400 }
//!     }
//! }
//! ```

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::io::Read;
use std::str::FromStr;

// Use internal modules
use crate::quality::{
    resolve_cover_resolution, resolve_quality, InvalidConfiguration, QualityPreference,
    QualityTier,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub global: GlobalSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default = "default_download_quality")]
    pub download_quality: String,
    #[serde(default)]
    pub covers: CoverSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverSettings {
    #[serde(default = "default_main_resolution")]
    pub main_resolution: u32,
}

fn default_download_quality() -> String {
    "high".to_owned()
}

const fn default_main_resolution() -> u32 {
    1400
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            download_quality: default_download_quality(),
            covers: CoverSettings::default(),
        }
    }
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            main_resolution: default_main_resolution(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            global: GlobalSettings::default(),
        }
    }
}

impl FromStr for Settings {
    type Err = serde_json::Error;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(json)
    }
}

impl Settings {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// The configured `download_quality`, parsed but not yet resolved.
    pub fn quality_preference(&self) -> Result<QualityPreference, InvalidConfiguration> {
        self.global.download_quality.parse()
    }

    /// Resolves `download_quality` to the tier handed to the download endpoint.
    pub fn quality_tier(&self) -> Result<QualityTier, InvalidConfiguration> {
        Ok(resolve_quality(self.quality_preference()?))
    }

    /// The configured cover resolution, clamped to the supported range.
    pub fn cover_resolution(&self) -> u32 {
        resolve_cover_resolution(self.global.covers.main_resolution)
    }
}
