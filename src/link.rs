//! Parsing of beatsource.com links into catalog media references.

// Use 3rd party
use regex::Regex;
use thiserror::Error;

// Use built-in library
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse beatsource url: {0}")]
pub struct LinkError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Track,
    Release,
    Artist,
    Playlist,
    Chart,
}

/// A catalog object referenced by a storefront URL, e.g.
/// `https://www.beatsource.com/track/sweet-caroline/11575544`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub media_type: MediaType,
    pub id: String,
}

impl FromStr for MediaLink {
    type Err = LinkError;

    fn from_str(link: &str) -> Result<Self, Self::Err> {
        // Optional two-letter country segment, slug segments, trailing numeric id.
        let pattern = Regex::new(
            r"https?://(?:www\.)?beatsource\.com/(?:[a-z]{2}/)?(?P<type>track|release|artist|playlists?|chart)(?:/[^/?]+)*/(?P<id>\d+)(?:$|[/?])",
        )
        .map_err(|_| LinkError(link.to_owned()))?;

        let captures = pattern.captures(link).ok_or_else(|| LinkError(link.to_owned()))?;

        let media_type = match &captures["type"] {
            "track" => MediaType::Track,
            "release" => MediaType::Release,
            "artist" => MediaType::Artist,
            "playlist" | "playlists" => MediaType::Playlist,
            "chart" => MediaType::Chart,
            _ => return Err(LinkError(link.to_owned())),
        };

        Ok(Self {
            media_type,
            id: captures["id"].to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_track_links() {
        let link: MediaLink = "https://www.beatsource.com/track/sweet-caroline/11575544"
            .parse()
            .unwrap();
        assert_eq!(link.media_type, MediaType::Track);
        assert_eq!(link.id, "11575544");
    }

    #[test]
    fn parses_release_links_with_country_segment() {
        let link: MediaLink = "https://www.beatsource.com/de/release/some-album/2291405"
            .parse()
            .unwrap();
        assert_eq!(link.media_type, MediaType::Release);
        assert_eq!(link.id, "2291405");
    }

    #[test]
    fn parses_artist_and_chart_links() {
        let link: MediaLink = "https://beatsource.com/artist/dj-somebody/10871".parse().unwrap();
        assert_eq!(link.media_type, MediaType::Artist);

        let link: MediaLink = "https://www.beatsource.com/chart/peak-hour/12345".parse().unwrap();
        assert_eq!(link.media_type, MediaType::Chart);
    }

    #[test]
    fn singular_and_plural_playlist_paths_are_equivalent() {
        let singular: MediaLink =
            "https://www.beatsource.com/playlist/warmup/998877".parse().unwrap();
        let plural: MediaLink =
            "https://www.beatsource.com/playlists/warmup/998877".parse().unwrap();
        assert_eq!(singular, plural);
        assert_eq!(singular.media_type, MediaType::Playlist);
    }

    #[test]
    fn parses_links_with_query_string() {
        let link: MediaLink = "https://www.beatsource.com/track/moments/8705613?src=share"
            .parse()
            .unwrap();
        assert_eq!(link.id, "8705613");
    }

    #[test]
    fn rejects_foreign_and_malformed_links() {
        assert!("https://www.beatport.com/track/something/123".parse::<MediaLink>().is_err());
        assert!("https://www.beatsource.com/genre/house".parse::<MediaLink>().is_err());
        assert!("not a url".parse::<MediaLink>().is_err());
    }
}
