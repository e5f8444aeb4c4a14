// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::Artist;
use crate::model::label::Label;
use crate::model::Image;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub publish_date: Option<String>,
    pub upc: Option<String>,
    pub catalog_number: Option<String>,
    pub track_count: Option<u32>,
    pub exclusive: Option<bool>,
    pub artists: Option<Vec<Artist>>,
    pub label: Option<Label>,
    pub image: Option<Image>,
}

impl Release {
    /// Four-digit release year taken from the publish date, when present.
    pub fn release_year(&self) -> Option<&str> {
        self.publish_date.as_deref().and_then(|date| date.get(..4))
    }
}
