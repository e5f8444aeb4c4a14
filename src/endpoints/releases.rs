//! Endpoint functions related to releases (albums)

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult, Paged};
use crate::model::release::Release;
use crate::model::track::Track;

pub struct Releases<'a>(pub &'a Beatsource);

impl Releases<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Release> {
        let url = format!("/catalog/releases/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Release>(&result)
    }

    pub async fn tracks(&self, id: &str, page: u32) -> ClientResult<Paged<Track>> {
        let url = format!("/catalog/releases/{}/tracks", id);
        self.0.get_paged::<Track>(&url, page).await
    }

    /// Every track of the release, following pagination.
    pub async fn all_tracks(&self, id: &str) -> ClientResult<Vec<Track>> {
        let url = format!("/catalog/releases/{}/tracks", id);
        self.0.get_all::<Track>(&url).await
    }
}
