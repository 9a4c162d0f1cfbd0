//! CineSearch: a movie-search application core.
//!
//! Searches a TMDb-compatible movie database by title, paginates results,
//! and routes "show details" navigation through an action-responder chain.
//!
//! # Architecture
//!
//! ```text
//! View (console binary, or anything else)
//!   │  intents / row selection        ▲ watch cells (loading, error,
//!   ▼                                 │ message, rows)
//! MoviesListViewModel ── fetches ──► MovieSearchService ──► SearchTransport
//!   │ actions (mpsc)
//!   ▼
//! ResponderChain: MoviesListCoordinator ──► AppRouter ──► Presenter
//! ```
//!
//! The core never renders; views observe the view-model's watch cells and
//! implement [`routing::Presenter`] for the details screen.

pub mod app;
pub mod config;
pub mod logging;
pub mod movies;
pub mod routing;
pub mod ui;
