pub mod account;
pub mod artist;
pub mod chart;
pub mod label;
pub mod playlist;
pub mod release;
pub mod track;

use serde::{Deserialize, Serialize};

/// Audio codecs offered by the Beatsource catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Codec {
    Aac,
    Flac,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: Option<u64>,
    pub uri: Option<String>,
    pub dynamic_uri: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: Option<u64>,
    pub name: Option<String>,
}

/// Musical key as reported by the catalog, e.g. "A Minor".
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    pub id: Option<u64>,
    pub name: Option<String>,
}
