// Use 3rd party
use log::{debug, error};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

// Use built-in library
use std::collections::HashMap;
use std::time::{Duration, SystemTime};

// Use internal modules
use crate::client::{Beatsource, ClientError, ClientResult, USER_AGENT};

// Client id registered for the Serato DJ Lite integration; the authorize
// step redirects to its custom scheme instead of a web callback.
const CLIENT_ID: &str = "ryZ8LuyQVPqbK2mBX2Hwt4qSMtnWuTYSqBPO92yQ";

#[derive(Clone, Debug)]
pub struct BeatsourceCredentials {
    pub username: String,
    pub password: String,
    pub session: Option<Session>,
}

/// Tokens obtained from the authorization flow. The host persists these
/// between runs and restores them with [`BeatsourceCredentials::with_session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires: SystemTime,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires
    }

    fn from_token_response(token: TokenResponse, previous_refresh: Option<String>) -> Self {
        let refresh_token = token
            .refresh_token
            .or(previous_refresh)
            .unwrap_or_default();
        Self {
            access_token: token.access_token,
            refresh_token,
            expires: SystemTime::now() + Duration::from_secs(token.expires_in),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    // The token endpoint omits this on some refresh responses.
    refresh_token: Option<String>,
    expires_in: u64,
}

impl BeatsourceCredentials {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Runs the full login flow: credentials to session cookie, cookie to
    /// authorization code, code to tokens.
    #[must_use = "the session lives on the returned credentials"]
    pub async fn create_session(mut self) -> ClientResult<Self> {
        debug!("no session found, logging in as {}", self.username);
        let client = auth_client()?;

        login(&client, &self.username, &self.password).await?;
        let code = authorize(&client).await?;
        let token = exchange_code(&client, &code).await?;

        self.session = Some(Session::from_token_response(token, None));
        Ok(self)
    }

    /// Trades the refresh token for a new access token. Falls back to the
    /// full login flow when the refresh token has been revoked.
    #[must_use = "the session lives on the returned credentials"]
    pub async fn refresh_session(mut self) -> ClientResult<Self> {
        let session = match self.session.take() {
            Some(session) => session,
            None => return self.create_session().await,
        };

        debug!("access token expired, refreshing");
        let client = auth_client()?;

        let mut form: HashMap<&str, &str> = HashMap::new();
        form.insert("client_id", CLIENT_ID);
        form.insert("refresh_token", &session.refresh_token);
        form.insert("grant_type", "refresh_token");

        let response = client
            .post(&token_url())
            .form(&form)
            .send()
            .await
            .map_err(ClientError::from)?;

        if !response.status().is_success() {
            // Revoked or stale refresh token, start over with a fresh login.
            error!("token refresh failed with {}, re-authenticating", response.status());
            return self.create_session().await;
        }

        let token: TokenResponse = response.json().await.map_err(ClientError::from)?;
        self.session = Some(Session::from_token_response(
            token,
            Some(session.refresh_token),
        ));
        Ok(self)
    }
}

fn auth_client() -> ClientResult<Client> {
    // The login step hands back a sessionid cookie the authorize step needs,
    // and the authorize step answers with a 302 we must not follow.
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .user_agent(USER_AGENT)
        .build()
        .map_err(Into::into)
}

fn token_url() -> String {
    format!("{}/auth/o/token/", Beatsource::base_url())
}

async fn login(client: &Client, username: &str, password: &str) -> ClientResult<()> {
    let mut payload: HashMap<&str, &str> = HashMap::new();
    payload.insert("username", username);
    payload.insert("password", password);

    let url = format!("{}/auth/login/", Beatsource::base_url());
    let response = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(ClientError::from)?;

    match response.status() {
        status if status.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => Err(ClientError::Auth(
            "login rejected, check username and password in settings".to_owned(),
        )),
        status => Err(ClientError::StatusCode(status)),
    }
}

async fn authorize(client: &Client) -> ClientResult<String> {
    let url = format!("{}/auth/o/authorize/", Beatsource::base_url());
    let query = [("client_id", CLIENT_ID), ("response_type", "code")];

    let response = client
        .get(&url)
        .query(&query)
        .send()
        .await
        .map_err(ClientError::from)?;

    if response.status() != StatusCode::FOUND {
        error!("authorize step answered {} instead of a redirect", response.status());
        return Err(ClientError::Auth(
            "authorize step did not redirect with a code".to_owned(),
        ));
    }

    let location = response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ClientError::Auth("authorize redirect carried no location".to_owned()))?;

    code_from_location(location)
}

/// Pulls the `code` parameter out of the redirect target, e.g.
/// `seratodjlite://beatsource?code=abc123`.
fn code_from_location(location: &str) -> ClientResult<String> {
    let query = location
        .splitn(2, '?')
        .nth(1)
        .ok_or_else(|| ClientError::Auth(format!("no query in redirect location {:?}", location)))?;

    let params: HashMap<String, String> = serde_urlencoded::from_str(query)?;
    params
        .get("code")
        .map(String::to_owned)
        .ok_or_else(|| ClientError::Auth(format!("no code in redirect location {:?}", location)))
}

async fn exchange_code(client: &Client, code: &str) -> ClientResult<TokenResponse> {
    let mut form: HashMap<&str, &str> = HashMap::new();
    form.insert("client_id", CLIENT_ID);
    form.insert("code", code);
    form.insert("grant_type", "authorization_code");

    let response = client
        .post(&token_url())
        .form(&form)
        .send()
        .await
        .map_err(ClientError::from)?;

    if !response.status().is_success() {
        return Err(ClientError::Auth(format!(
            "token exchange failed with status {}",
            response.status()
        )));
    }

    response.json().await.map_err(Into::into)
}
