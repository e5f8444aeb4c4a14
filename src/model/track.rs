// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::Artist;
use crate::model::release::Release;
use crate::model::{Genre, Key};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub mix_name: Option<String>,
    pub slug: Option<String>,
    pub isrc: Option<String>,
    pub length_ms: Option<u64>,
    pub bpm: Option<u16>,
    pub number: Option<u16>,
    pub publish_date: Option<String>,
    pub catalog_number: Option<String>,
    pub exclusive: Option<bool>,
    pub preorder: Option<bool>,
    pub is_available_for_streaming: Option<bool>,
    pub genre: Option<Genre>,
    pub sub_genre: Option<Genre>,
    pub key: Option<Key>,
    pub artists: Option<Vec<Artist>>,
    pub release: Option<Release>,
}

/// Response from the stream and download endpoints. `location` is a
/// short-lived URL the caller fetches the media from.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub location: Option<String>,
}

impl Track {
    /// Display name with the mix name appended, the way the storefront shows it.
    pub fn full_name(&self) -> Option<String> {
        let name = self.name.as_ref()?;
        match self.mix_name.as_ref() {
            Some(mix) => Some(format!("{} ({})", name, mix)),
            None => Some(name.to_owned()),
        }
    }

    pub fn duration_seconds(&self) -> Option<u64> {
        self.length_ms.map(|ms| ms / 1000)
    }
}
