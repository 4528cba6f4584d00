use crate::config::Config;
use crate::error::SearchError;
use crate::model::{ApiResponse, Hero};
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;

pub const USER_AGENT: &str = concat!("superhero-explorer/", env!("CARGO_PKG_VERSION"));
const REDACTED: &str = "REDACTED";

/// Builds `<base>/<token>/search/<query>`, percent-escaping each segment so a
/// query containing `/`, `?` or `#` still addresses the search endpoint.
pub fn search_url(base_url: &str, token: &str, query: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("invalid API base URL {base_url}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("API base URL cannot carry a path: {base_url}"))?
        .pop_if_empty()
        .push(token)
        .push("search")
        .push(query);
    Ok(url)
}

/// Maps a fetch outcome onto what the search screen shows.
pub fn interpret(outcome: Result<ApiResponse>) -> Result<Vec<Hero>, SearchError> {
    match outcome {
        Ok(envelope) => envelope.into_heroes().ok_or(SearchError::NotFound),
        Err(err) => Err(SearchError::Transport(err.to_string())),
    }
}

/// Seam between the search screen and the network.
pub trait HeroSearch: Send + Sync + 'static {
    /// Blocks until the request finishes; call from a background thread.
    fn search_heroes(&self, query: &str) -> Result<Vec<Hero>, SearchError>;
}

pub struct SuperheroService {
    client: Client,
    base_url: String,
    access_token: String,
}

impl SuperheroService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn fetch(&self, query: &str) -> Result<ApiResponse> {
        let url = search_url(&self.base_url, &self.access_token, query)?;
        log::debug!("GET {}", self.loggable_url(query));

        let envelope = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<ApiResponse>())
            .map_err(reqwest::Error::without_url)?;

        if let Some(reason) = envelope.error.as_deref() {
            log::debug!("API reported {:?}: {reason}", envelope.response);
        }
        Ok(envelope)
    }

    /// The request URL with the token segment replaced.
    fn loggable_url(&self, query: &str) -> String {
        search_url(&self.base_url, REDACTED, query)
            .map(String::from)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

impl HeroSearch for SuperheroService {
    fn search_heroes(&self, query: &str) -> Result<Vec<Hero>, SearchError> {
        let query = query.trim();
        log::info!("searching heroes for {query:?}");

        let result = interpret(self.fetch(query));
        match &result {
            Ok(heroes) => log::info!("{} heroes found for {query:?}", heroes.len()),
            Err(SearchError::NotFound) => log::warn!("no heroes found for {query:?}"),
            Err(err) => log::warn!("search for {query:?} failed: {err}"),
        }
        result
    }
}
