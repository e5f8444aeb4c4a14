// Use 3rd party
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[cfg(test)]
use mockito;

// Use built-in library
use std::borrow::Cow;
use std::collections::HashMap;

// Use internal modules
use crate::auth::BeatsourceCredentials;
use crate::model::account::Account;

pub(crate) const USER_AGENT: &str = "rsbeatsource/0.1";
const PER_PAGE: u32 = 100;

// Possible errors returned from the `rsbeatsource` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request unauthorized")]
    Unauthorized,
    #[error("territory restricted")]
    RegionLocked,
    #[error("beatsource error: {0}")]
    Api(#[from] ApiError),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("query parse error: {0}")]
    ParseQuery(#[from] serde_urlencoded::de::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    StatusCode(StatusCode),
}

impl ClientError {
    pub(crate) async fn from_response(response: Response) -> Self {
        match response.status() {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            status @ StatusCode::FORBIDDEN => match response.json::<ApiError>().await {
                Ok(api) if api.detail.contains("Territory") => Self::RegionLocked,
                Ok(api) => api.into(),
                Err(_) => status.into(),
            },
            status @ StatusCode::NOT_FOUND | status @ StatusCode::BAD_REQUEST => response
                .json::<ApiError>()
                .await
                .map_or_else(|_| status.into(), Into::into),
            status => status.into(),
        }
    }
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

#[derive(Debug, Error, Deserialize)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Paged envelope wrapping every catalog list response.
#[derive(Default, Debug, Deserialize)]
pub struct Paged<T> {
    pub count: Option<u32>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub per_page: Option<u32>,
    pub results: Vec<T>,
}

// Beatsource API
pub struct Beatsource {
    client: Client,
    credentials: BeatsourceCredentials,
}

impl Beatsource {
    /// # Panics
    ///
    /// Panics when the credentials carry no session. Obtain one with
    /// [`BeatsourceCredentials::create_session`] first.
    #[must_use]
    pub fn new(credentials: BeatsourceCredentials) -> Self {
        if credentials.session.is_none() {
            panic!("You need an authenticated credential to use Beatsource");
        };

        Self {
            client: Client::new(),
            credentials,
        }
    }

    pub fn credentials(&self) -> &BeatsourceCredentials {
        &self.credentials
    }

    fn access_token(&self) -> String {
        match &self.credentials.session {
            Some(session) => session.access_token.to_owned(),
            None => panic!("A session needs to be obtained before using Beatsource"),
        }
    }

    pub(crate) fn base_url() -> String {
        #[cfg(not(test))]
        let base_url = "https://api.beatsource.com/v4".to_owned();
        #[cfg(test)]
        let base_url = mockito::server_url();

        base_url
    }

    async fn api_call(
        &self,
        method: Method,
        url: &str,
        query: Option<&HashMap<String, String>>,
    ) -> ClientResult<Response> {
        let mut url: Cow<str> = url.into();
        if !url.starts_with("http") {
            url = [Self::base_url().as_str(), url.as_ref()].concat().into();
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            format!("Bearer {}", self.access_token())
                .parse()
                .map_err(|_| ClientError::Auth("access token is not a valid header value".to_owned()))?,
        );
        headers.insert("user-agent", USER_AGENT.parse().expect("static user agent"));

        debug!("{} {}", method, url);

        let response = {
            let builder = self
                .client
                .request(method, &url.into_owned())
                .headers(headers);

            let builder = if let Some(query) = query {
                builder.query(query)
            } else {
                builder
            };

            builder.send().await.map_err(ClientError::from)?
        };

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub(crate) async fn get(
        &self,
        url: &str,
        params: &HashMap<String, String>,
    ) -> ClientResult<String> {
        self.api_call(Method::GET, url, Some(params))
            .await?
            .text()
            .await
            .map_err(Into::into)
    }

    /// One page of a catalog listing.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        url: &str,
        page: u32,
    ) -> ClientResult<Paged<T>> {
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert("page".to_owned(), page.to_string());
        params.insert("per_page".to_owned(), PER_PAGE.to_string());
        let result = self.get(url, &params).await?;
        Self::convert_result::<Paged<T>>(&result)
    }

    /// Walks a catalog listing until `count` items have been fetched.
    pub(crate) async fn get_all<T: DeserializeOwned>(&self, url: &str) -> ClientResult<Vec<T>> {
        let first = self.get_paged::<T>(url, 1).await?;
        let count = first.count.unwrap_or(first.results.len() as u32);
        let mut items = first.results;

        // The page range is fixed up front from the reported count, so a
        // server whose count stays ahead of what it serves cannot keep the
        // walk alive.
        let last_page = count.saturating_sub(1) / PER_PAGE + 1;
        for page in 2..=last_page {
            let paged = self.get_paged::<T>(url, page).await?;
            if paged.results.is_empty() {
                break;
            }
            items.extend(paged.results);
            if items.len() as u32 >= count {
                break;
            }
        }

        Ok(items)
    }

    /// Introspects the access token, reporting the account's subscription.
    pub async fn account(&self) -> ClientResult<Account> {
        let result = self.get("/auth/o/introspect", &HashMap::new()).await?;
        Self::convert_result::<Account>(&result)
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::auth::{BeatsourceCredentials, Session};
    use crate::model::account::Subscription;
    use mockito::{mock, Matcher, Mock};

    use std::time::{Duration, SystemTime};

    #[tokio::test]
    async fn client_get() {
        let _mock = mock("GET", "/catalog/ping")
            .with_status(200)
            .with_body(r#"{"result": "ok"}"#)
            .create();

        let response = client().get("/catalog/ping", &HashMap::new()).await.unwrap();
        assert_eq!(response, r#"{"result": "ok"}"#);
    }

    #[tokio::test]
    async fn client_account() {
        let _mock = mock("GET", "/auth/o/introspect")
            .with_status(200)
            .with_body_from_file("tests/files/account.json")
            .create();

        let account = client().account().await.unwrap();
        assert_eq!(account.subscription, Some(Subscription::LinkProfessional));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_its_own_variant() {
        let _mock = mock("GET", "/catalog/tracks/1")
            .with_status(401)
            .with_body(r#"{"detail": "Invalid token."}"#)
            .create();

        let result = client().get("/catalog/tracks/1", &HashMap::new()).await;
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn territory_restriction_maps_to_region_locked() {
        let _mock = mock("GET", "/catalog/releases/42")
            .with_status(403)
            .with_body(r#"{"detail": "Territory Restricted."}"#)
            .create();

        let result = client().get("/catalog/releases/42", &HashMap::new()).await;
        assert!(matches!(result, Err(ClientError::RegionLocked)));
    }

    #[tokio::test]
    async fn not_found_carries_the_api_detail() {
        let _mock = mock("GET", "/catalog/tracks/0")
            .with_status(404)
            .with_body(r#"{"detail": "Not found."}"#)
            .create();

        let err = client().get("/catalog/tracks/0", &HashMap::new()).await.unwrap_err();
        match err {
            ClientError::Api(api) => assert_eq!(api.detail, "Not found."),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_all_walks_every_page() {
        let _page_one = mock("GET", "/catalog/releases/7/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(101, 1..=100))
            .create();
        let _page_two = mock("GET", "/catalog/releases/7/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(101, 101..=101))
            .create();

        let tracks = client()
            .get_all::<crate::model::track::Track>("/catalog/releases/7/tracks")
            .await
            .unwrap();
        assert_eq!(tracks.len(), 101);
        assert_eq!(tracks[100].id, Some(101));
    }

    #[tokio::test]
    async fn get_all_stops_at_the_reported_page_range() {
        // Count claims 250 items, but the server runs dry on page three and
        // would serve page four again; the walk must not ask for it.
        let _page_one = mock("GET", "/catalog/charts/9/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(250, 1..=100))
            .create();
        let _page_two = mock("GET", "/catalog/charts/9/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(250, 101..=200))
            .create();
        let _page_three = mock("GET", "/catalog/charts/9/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "3".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(250, 201..=230))
            .create();
        let page_four = mock("GET", "/catalog/charts/9/tracks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "4".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(page_body(250, 201..=230))
            .expect(0)
            .create();

        let tracks = client()
            .get_all::<crate::model::track::Track>("/catalog/charts/9/tracks")
            .await
            .unwrap();
        assert_eq!(tracks.len(), 230);
        page_four.assert();
    }

    fn page_body(count: u32, ids: std::ops::RangeInclusive<u32>) -> String {
        let results: Vec<String> = ids.map(|id| format!(r#"{{"id": {}}}"#, id)).collect();
        format!(
            r#"{{"count": {}, "per_page": 100, "results": [{}]}}"#,
            count,
            results.join(",")
        )
    }

    pub(crate) fn mock_request_success_from_file(
        method: &str,
        path: &str,
        file_path: &str,
    ) -> Mock {
        mock(method, path)
            .with_status(200)
            .with_body_from_file(file_path)
            .create()
    }

    pub(crate) fn client() -> Beatsource {
        Beatsource::new(credentials())
    }

    fn credentials() -> BeatsourceCredentials {
        let session = Session {
            access_token: "access-token-1".to_owned(),
            refresh_token: "refresh-token-1".to_owned(),
            expires: SystemTime::now() + Duration::from_secs(3600),
        };
        BeatsourceCredentials::new("myuser@example.com", "somepassword").with_session(session)
    }
}
