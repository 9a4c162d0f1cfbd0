//! List view-model: the state machine behind the movies list screen.
//!
//! State is published through `tokio::sync::watch` cells so the view receives
//! every change as it happens. The view-model is reusable across arbitrarily
//! many searches; each first-page intent resets the session.

use tokio::sync::{mpsc, watch};

use crate::movies::{MovieApiResponse, MovieSearchService, SearchError, SearchTransport};
use crate::routing::{Action, PresentationStyle};
use crate::ui::cells::{CellConfiguration, MoviesListCellFactory};

/// User-facing informational text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub description: String,
}

impl Message {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Shown before any search has been made.
    pub fn welcome() -> Self {
        Self::new(
            "Hello!",
            "We can find any film you search. Just type something in the search field!",
        )
    }

    /// Shown when a search is submitted with an empty title.
    pub fn empty_search_warning() -> Self {
        Self::new(
            "Something went wrong",
            "We can't search films without a name. Please type something.",
        )
    }

    /// Shown when a search completes with no matches.
    pub fn no_results() -> Self {
        Self::new("Something went wrong", "We could not find any movies.")
    }
}

/// Fetch intents driven by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchIntent {
    /// First appearance of the screen; publishes the welcome message.
    Initial,
    /// New search session for `title`, starting at page 1.
    FirstPage { title: String },
    /// Continue the current session with the next page.
    NextPage { title: String },
}

enum PageKind {
    First,
    Next,
}

/// Orchestrates fetches and owns the observable state of the list screen.
pub struct MoviesListViewModel<T: SearchTransport> {
    service: MovieSearchService<T>,
    factory: MoviesListCellFactory,
    is_loading: watch::Sender<bool>,
    error: watch::Sender<Option<SearchError>>,
    message: watch::Sender<Option<Message>>,
    rows: watch::Sender<Vec<CellConfiguration>>,
    actions: mpsc::UnboundedSender<Action>,
}

impl<T: SearchTransport> MoviesListViewModel<T> {
    pub fn new(service: MovieSearchService<T>, actions: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            service,
            factory: MoviesListCellFactory::new(),
            is_loading: watch::Sender::new(false),
            error: watch::Sender::new(None),
            message: watch::Sender::new(None),
            rows: watch::Sender::new(Vec::new()),
            actions,
        }
    }

    /// Observable loading flag.
    pub fn watch_is_loading(&self) -> watch::Receiver<bool> {
        self.is_loading.subscribe()
    }

    /// Observable most recent fetch error.
    pub fn watch_error(&self) -> watch::Receiver<Option<SearchError>> {
        self.error.subscribe()
    }

    /// Observable user-facing message.
    pub fn watch_message(&self) -> watch::Receiver<Option<Message>> {
        self.message.subscribe()
    }

    /// Observable row list.
    pub fn watch_rows(&self) -> watch::Receiver<Vec<CellConfiguration>> {
        self.rows.subscribe()
    }

    /// The rows currently held, in display order.
    pub fn rows(&self) -> &[CellConfiguration] {
        self.factory.configurations()
    }

    /// Drives the state machine with one fetch intent.
    pub async fn fetch_data(&mut self, intent: FetchIntent) {
        match intent {
            FetchIntent::Initial => {
                self.message.send_replace(Some(Message::welcome()));
            }
            FetchIntent::FirstPage { title } => {
                if title.trim().is_empty() {
                    self.message
                        .send_replace(Some(Message::empty_search_warning()));
                    return;
                }

                self.is_loading.send_replace(true);
                let result = self.service.fetch_first_page(&title).await;
                self.apply_fetch_result(result, PageKind::First);
            }
            FetchIntent::NextPage { title } => {
                // Without a next page the service would hand back the held
                // response, which is already rendered; re-appending it would
                // duplicate rows.
                if !self.service.has_next_page() {
                    tracing::debug!(%title, "next page requested with pagination exhausted");
                    return;
                }

                let result = self.service.fetch_next_page(&title).await;
                self.apply_fetch_result(result, PageKind::Next);
            }
        }
    }

    /// Emits a "show details" action for the movie at `index`.
    ///
    /// Loading rows and out-of-range indices are no-ops.
    pub fn select_row(&self, index: usize) {
        let Some(movie) = self.factory.movie_at(index) else {
            return;
        };

        let action = Action::ShowMovieDetails {
            movie: movie.clone(),
            style: PresentationStyle::Modal,
        };

        if self.actions.send(action).is_err() {
            tracing::debug!(index, "action channel closed, dropping selection");
        }
    }

    fn apply_fetch_result(
        &mut self,
        result: Result<Option<MovieApiResponse>, SearchError>,
        kind: PageKind,
    ) {
        match result {
            Ok(Some(response)) if !response.movies.is_empty() => {
                let rows = match kind {
                    PageKind::First => self.factory.generate_initial(&response),
                    PageKind::Next => self.factory.generate_appending_next_page(&response),
                };
                self.rows.send_replace(rows.to_vec());
                self.is_loading.send_replace(false);
            }
            Ok(_) => {
                self.factory.clear();
                self.rows.send_replace(Vec::new());
                self.is_loading.send_replace(false);
                self.message.send_replace(Some(Message::no_results()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                self.is_loading.send_replace(false);
                self.error.send_replace(Some(err));
            }
        }
    }
}
