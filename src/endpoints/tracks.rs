//! Endpoint functions related to tracks

use std::collections::HashMap;

use crate::client::{Beatsource, ClientResult};
use crate::model::track::{Download, Track};
use crate::quality::QualityTier;

pub struct Tracks<'a>(pub &'a Beatsource);

impl Tracks<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Track> {
        let url = format!("/catalog/tracks/{}", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Track>(&result)
    }

    /// The 128k preview stream (an .m3u8 playlist).
    pub async fn stream(&self, id: &str) -> ClientResult<Download> {
        let url = format!("/catalog/tracks/{}/stream", id);
        let result = self.0.get(&url, &HashMap::new()).await?;
        Beatsource::convert_result::<Download>(&result)
    }

    /// The full-quality download at the resolved tier. The API rejects tiers
    /// the account's subscription does not cover.
    pub async fn download(&self, id: &str, tier: QualityTier) -> ClientResult<Download> {
        let url = format!("/catalog/tracks/{}/download", id);
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert("quality".to_owned(), tier.api_param().to_owned());
        let result = self.0.get(&url, &params).await?;
        Beatsource::convert_result::<Download>(&result)
    }
}
