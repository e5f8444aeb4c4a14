//! Endpoint functions related to user playlists

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult, Paged};
use crate::model::playlist::{Playlist, PlaylistItem};
use crate::model::track::Track;

pub struct Playlists<'a>(pub &'a Beatsource);

impl Playlists<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Playlist> {
        let url = format!("/catalog/playlists/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Playlist>(&result)
    }

    pub async fn items(&self, id: &str, page: u32) -> ClientResult<Paged<PlaylistItem>> {
        let url = format!("/catalog/playlists/{}/tracks", id);
        self.0.get_paged::<PlaylistItem>(&url, page).await
    }

    /// All tracks of the playlist in order, unwrapped from their item
    /// envelopes. Items without a track are dropped.
    pub async fn all_tracks(&self, id: &str) -> ClientResult<Vec<Track>> {
        let url = format!("/catalog/playlists/{}/tracks", id);
        let items = self.0.get_all::<PlaylistItem>(&url).await?;
        Ok(items.into_iter().filter_map(|item| item.track).collect())
    }
}
