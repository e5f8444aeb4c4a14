//! Endpoint functions related to artists

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult, Paged};
use crate::model::artist::Artist;
use crate::model::track::Track;

pub struct Artists<'a>(pub &'a Beatsource);

impl Artists<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Artist> {
        let url = format!("/catalog/artists/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Artist>(&result)
    }

    pub async fn tracks(&self, id: &str, page: u32) -> ClientResult<Paged<Track>> {
        let url = format!("/catalog/artists/{}/tracks", id);
        self.0.get_paged::<Track>(&url, page).await
    }

    /// The artist's full catalog, following pagination.
    pub async fn all_tracks(&self, id: &str) -> ClientResult<Vec<Track>> {
        let url = format!("/catalog/artists/{}/tracks", id);
        self.0.get_all::<Track>(&url).await
    }
}
