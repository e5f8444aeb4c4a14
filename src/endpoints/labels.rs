//! Endpoint functions related to labels

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult, Paged};
use crate::model::label::Label;
use crate::model::release::Release;
use crate::model::track::Track;

pub struct Labels<'a>(pub &'a Beatsource);

impl Labels<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Label> {
        let url = format!("/catalog/labels/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Label>(&result)
    }

    pub async fn releases(&self, id: &str, page: u32) -> ClientResult<Paged<Release>> {
        let url = format!("/catalog/labels/{}/releases", id);
        self.0.get_paged::<Release>(&url, page).await
    }

    pub async fn tracks(&self, id: &str, page: u32) -> ClientResult<Paged<Track>> {
        let url = format!("/catalog/labels/{}/tracks", id);
        self.0.get_paged::<Track>(&url, page).await
    }
}
