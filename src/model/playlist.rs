// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::Image;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub updated_date: Option<String>,
    pub track_count: Option<u32>,
    pub release_images: Option<Vec<Image>>,
}

/// Playlist endpoints nest each track under an "item" wrapper.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: Option<u64>,
    pub position: Option<u32>,
    pub track: Option<crate::model::track::Track>,
}
