//! Endpoint functions related to curated charts

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult, Paged};
use crate::model::chart::Chart;
use crate::model::track::Track;

pub struct Charts<'a>(pub &'a Beatsource);

impl Charts<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Chart> {
        let url = format!("/catalog/charts/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Chart>(&result)
    }

    pub async fn tracks(&self, id: &str, page: u32) -> ClientResult<Paged<Track>> {
        let url = format!("/catalog/charts/{}/tracks", id);
        self.0.get_paged::<Track>(&url, page).await
    }

    /// Every track of the chart, following pagination. Unlike playlists,
    /// chart responses carry tracks directly rather than item envelopes.
    pub async fn all_tracks(&self, id: &str) -> ClientResult<Vec<Track>> {
        let url = format!("/catalog/charts/{}/tracks", id);
        self.0.get_all::<Track>(&url).await
    }
}
