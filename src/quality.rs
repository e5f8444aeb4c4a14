//! Download quality resolution and cover resolution clamping.
//!
//! The `download_quality` configuration string resolves to one of the fixed
//! codec tiers Beatsource serves; the requested cover size is bounded to the
//! range of square resolutions the image CDN supports.

// Use 3rd party
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Use built-in library
use std::fmt;
use std::str::FromStr;

// Use internal modules
use crate::model::Codec;

/// Smallest square cover resolution the service serves.
pub const MIN_COVER_RESOLUTION: u32 = 100;
/// Largest square cover resolution the service serves.
pub const MAX_COVER_RESOLUTION: u32 = 1400;

/// `download_quality` is not one of the six recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid download_quality {0:?}, expected one of: hifi, lossless, high, medium, low, minimum")]
pub struct InvalidConfiguration(pub String);

/// The six `download_quality` strings accepted in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreference {
    Hifi,
    Lossless,
    High,
    Medium,
    Low,
    Minimum,
}

impl FromStr for QualityPreference {
    type Err = InvalidConfiguration;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hifi" => Ok(Self::Hifi),
            "lossless" => Ok(Self::Lossless),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "minimum" => Ok(Self::Minimum),
            other => Err(InvalidConfiguration(other.to_owned())),
        }
    }
}

/// Concrete encodings the catalog can deliver a track in.
///
/// `Flac` and `Aac256` need a Link Professional subscription; the download
/// endpoint rejects them otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// FLAC, 16-bit / 44.1 kHz.
    Flac,
    /// AAC at 256 kbit/s.
    Aac256,
    /// AAC at 128 kbit/s.
    Aac128,
}

impl QualityTier {
    pub const fn codec(self) -> Codec {
        match self {
            Self::Flac => Codec::Flac,
            Self::Aac256 | Self::Aac128 => Codec::Aac,
        }
    }

    /// Nominal bitrate in kbit/s. FLAC is variable; 1411 is the uncompressed
    /// CD-audio rate commonly reported for the lossless tier.
    pub const fn bitrate_kbps(self) -> u32 {
        match self {
            Self::Flac => 1411,
            Self::Aac256 => 256,
            Self::Aac128 => 128,
        }
    }

    pub const fn bit_depth(self) -> Option<u8> {
        match self {
            Self::Flac => Some(16),
            Self::Aac256 | Self::Aac128 => None,
        }
    }

    pub const fn sample_rate_khz(self) -> f32 {
        44.1
    }

    /// Value of the `quality` query parameter on the download endpoint.
    pub const fn api_param(self) -> &'static str {
        match self {
            Self::Flac => "lossless",
            Self::Aac256 => "high",
            Self::Aac128 => "medium",
        }
    }

    pub const fn requires_link_professional(self) -> bool {
        match self {
            Self::Flac | Self::Aac256 => true,
            Self::Aac128 => false,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flac => write!(f, "FLAC 16-bit/44.1kHz"),
            Self::Aac256 => write!(f, "AAC 256 kbit/s"),
            Self::Aac128 => write!(f, "AAC 128 kbit/s"),
        }
    }
}

/// Maps a quality preference to the tier the catalog is asked for.
///
/// Total over the enum: hifi and lossless collapse to FLAC, high stands
/// alone at AAC 256, and medium, low and minimum collapse to AAC 128.
pub const fn resolve_quality(preference: QualityPreference) -> QualityTier {
    match preference {
        QualityPreference::Hifi | QualityPreference::Lossless => QualityTier::Flac,
        QualityPreference::High => QualityTier::Aac256,
        QualityPreference::Medium | QualityPreference::Low | QualityPreference::Minimum => {
            QualityTier::Aac128
        }
    }
}

/// Bounds a requested square cover size to what the image CDN serves.
///
/// Sizes above 1400 are clamped down rather than rejected; sizes below 100
/// are clamped up, since the service does not render smaller images.
pub const fn resolve_cover_resolution(requested: u32) -> u32 {
    if requested > MAX_COVER_RESOLUTION {
        MAX_COVER_RESOLUTION
    } else if requested < MIN_COVER_RESOLUTION {
        MIN_COVER_RESOLUTION
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preference_resolves_to_its_tier() {
        assert_eq!(resolve_quality(QualityPreference::Hifi), QualityTier::Flac);
        assert_eq!(resolve_quality(QualityPreference::Lossless), QualityTier::Flac);
        assert_eq!(resolve_quality(QualityPreference::High), QualityTier::Aac256);
        assert_eq!(resolve_quality(QualityPreference::Medium), QualityTier::Aac128);
        assert_eq!(resolve_quality(QualityPreference::Low), QualityTier::Aac128);
        assert_eq!(resolve_quality(QualityPreference::Minimum), QualityTier::Aac128);
    }

    #[test]
    fn aliases_collapse_to_the_same_tier() {
        assert_eq!(
            resolve_quality(QualityPreference::Hifi),
            resolve_quality(QualityPreference::Lossless)
        );
        assert_eq!(
            resolve_quality(QualityPreference::Medium),
            resolve_quality(QualityPreference::Low)
        );
        assert_eq!(
            resolve_quality(QualityPreference::Low),
            resolve_quality(QualityPreference::Minimum)
        );
    }

    #[test]
    fn preference_parses_from_settings_strings() {
        assert_eq!("hifi".parse::<QualityPreference>().unwrap(), QualityPreference::Hifi);
        assert_eq!("minimum".parse::<QualityPreference>().unwrap(), QualityPreference::Minimum);
    }

    #[test]
    fn unknown_preference_is_invalid_configuration() {
        let err = "ultra".parse::<QualityPreference>().unwrap_err();
        assert_eq!(err, InvalidConfiguration("ultra".to_owned()));
        assert!("HIFI".parse::<QualityPreference>().is_err());
        assert!("".parse::<QualityPreference>().is_err());
    }

    #[test]
    fn tier_descriptors() {
        assert_eq!(QualityTier::Flac.codec(), crate::model::Codec::Flac);
        assert_eq!(QualityTier::Flac.bit_depth(), Some(16));
        assert_eq!(QualityTier::Aac256.bitrate_kbps(), 256);
        assert_eq!(QualityTier::Aac128.bit_depth(), None);
        assert_eq!(QualityTier::Flac.api_param(), "lossless");
        assert_eq!(QualityTier::Aac256.api_param(), "high");
        assert_eq!(QualityTier::Aac128.api_param(), "medium");
    }

    #[test]
    fn resolution_clamps_at_both_ends() {
        assert_eq!(resolve_cover_resolution(1400), 1400);
        assert_eq!(resolve_cover_resolution(2000), 1400);
        assert_eq!(resolve_cover_resolution(100), 100);
        assert_eq!(resolve_cover_resolution(64), 100);
        assert_eq!(resolve_cover_resolution(0), 100);
        assert_eq!(resolve_cover_resolution(500), 500);
    }

    #[test]
    fn resolution_clamp_is_idempotent() {
        for requested in [0, 50, 100, 101, 1399, 1400, 1401, 10_000, u32::MAX].iter() {
            let once = resolve_cover_resolution(*requested);
            assert_eq!(resolve_cover_resolution(once), once);
        }
    }

    #[test]
    fn resolution_clamp_is_monotonic() {
        let samples = [0u32, 99, 100, 101, 700, 1399, 1400, 1401, u32::MAX];
        for window in samples.windows(2) {
            assert!(resolve_cover_resolution(window[0]) <= resolve_cover_resolution(window[1]));
        }
    }
}
