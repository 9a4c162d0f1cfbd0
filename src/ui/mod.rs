//! View-facing layer: row descriptors and the list view-model.

pub mod cells;
pub mod viewmodel;

pub use cells::{CellConfiguration, MovieCellConfiguration, MoviesListCellFactory};
pub use viewmodel::{FetchIntent, Message, MoviesListViewModel};
