//! Movie search service and its transport seam.
//!
//! The service wraps a single REST GET endpoint and tracks pagination through
//! one mutable "last response" slot. The transport is a trait so tests can
//! script responses without a socket.

use crate::config::ApiConfig;
use crate::movies::model::MovieApiResponse;
use thiserror::Error;

const SEARCH_PATH: &str = "3/search/movie";
const FIRST_PAGE: u32 = 1;

/// Errors surfaced by a search fetch.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP request itself failed (connection, timeout, non-2xx status).
    #[error("Search request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a valid search payload.
    #[error("Failed to decode search response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// One-shot search call against the movie database.
#[allow(async_fn_in_trait)]
pub trait SearchTransport {
    async fn search(&self, title: &str, page: u32) -> Result<MovieApiResponse, SearchError>;
}

/// `reqwest`-backed transport issuing
/// `GET <base>/3/search/movie?query=<title>&page=<n>&api_key=<key>`.
pub struct HttpSearchTransport {
    client: reqwest::Client,
    search_url: String,
    api_key: String,
}

impl HttpSearchTransport {
    pub fn new(api: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build search client");

        let search_url = format!("{}/{}", api.base_url.trim_end_matches('/'), SEARCH_PATH);

        Self {
            client,
            search_url,
            api_key: api.api_key.clone(),
        }
    }
}

impl SearchTransport for HttpSearchTransport {
    async fn search(&self, title: &str, page: u32) -> Result<MovieApiResponse, SearchError> {
        tracing::debug!(%title, page, "issuing search request");

        let page_param = page.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("query", title),
                ("page", page_param.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| SearchError::Transport { source })?
            .error_for_status()
            .map_err(|source| SearchError::Transport { source })?;

        let body = response
            .text()
            .await
            .map_err(|source| SearchError::Transport { source })?;

        // Decode separately from the transfer so decode failures are
        // distinguishable from wire failures.
        serde_json::from_str(&body).map_err(|source| SearchError::Decode { source })
    }
}

/// Paginated search over a transport.
///
/// Holds exactly one mutable "last response" slot; a new first-page fetch
/// replaces the session wholesale. Not safe for concurrent overlapping
/// fetches: whichever completion runs last overwrites the slot.
pub struct MovieSearchService<T: SearchTransport> {
    transport: T,
    last_response: Option<MovieApiResponse>,
}

impl<T: SearchTransport> MovieSearchService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            last_response: None,
        }
    }

    /// The most recent response, if any fetch has succeeded this session.
    pub fn last_response(&self) -> Option<&MovieApiResponse> {
        self.last_response.as_ref()
    }

    /// Whether the current session has another page to fetch.
    pub fn has_next_page(&self) -> bool {
        self.last_response
            .as_ref()
            .and_then(|r| r.next_page())
            .is_some()
    }

    /// Fetches page 1 for `title`, starting a new search session.
    ///
    /// The held slot is overwritten with the outcome: the new response on
    /// success, empty on failure.
    pub async fn fetch_first_page(
        &mut self,
        title: &str,
    ) -> Result<Option<MovieApiResponse>, SearchError> {
        match self.transport.search(title, FIRST_PAGE).await {
            Ok(response) => {
                tracing::info!(
                    %title,
                    movies = response.movies.len(),
                    total_pages = response.total_pages,
                    "first page fetched"
                );
                self.last_response = Some(response);
                Ok(self.last_response.clone())
            }
            Err(err) => {
                self.last_response = None;
                Err(err)
            }
        }
    }

    /// Fetches the page after the held response.
    ///
    /// When pagination is exhausted (or nothing has been fetched yet) this is
    /// a no-op success returning the held response without a transport call.
    /// On failure the slot is left unchanged so the caller can retry.
    pub async fn fetch_next_page(
        &mut self,
        title: &str,
    ) -> Result<Option<MovieApiResponse>, SearchError> {
        let Some(page) = self.last_response.as_ref().and_then(|r| r.next_page()) else {
            tracing::debug!(%title, "pagination exhausted, returning held response");
            return Ok(self.last_response.clone());
        };

        let response = self.transport.search(title, page).await?;
        tracing::info!(%title, page, movies = response.movies.len(), "next page fetched");
        self.last_response = Some(response);
        Ok(self.last_response.clone())
    }
}
