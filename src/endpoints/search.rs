//! Endpoint functions related to search

use std::collections::HashMap;

use serde::Deserialize;

use crate::client::{Beatsource, ClientResult};
use crate::model::artist::Artist;
use crate::model::chart::Chart;
use crate::model::release::Release;
use crate::model::track::Track;

/// Catalog object kinds the search endpoint accepts as a `type` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Tracks,
    Releases,
    Artists,
    Charts,
}

impl SearchType {
    const fn api_param(self) -> &'static str {
        match self {
            Self::Tracks => "tracks",
            Self::Releases => "releases",
            Self::Artists => "artists",
            Self::Charts => "charts",
        }
    }
}

#[derive(Default, Debug, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub charts: Vec<Chart>,
}

pub struct Search<'a>(pub &'a Beatsource);

impl Search<'_> {
    pub async fn find(
        &self,
        query: &str,
        search_type: SearchType,
        per_page: Option<u16>,
    ) -> ClientResult<SearchResults> {
        let url = "/catalog/search";
        let per_page = if let Some(per_page) = per_page { per_page } else { 20 };
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert("q".to_owned(), query.to_owned());
        params.insert("type".to_owned(), search_type.api_param().to_owned());
        params.insert("per_page".to_owned(), per_page.to_string());
        let result = self.0.get(&url, &params).await?;
        Beatsource::convert_result::<SearchResults>(&result)
    }
}
