//! Movie domain model and the paginated search service.

mod model;
mod service;

pub use model::{Movie, MovieApiResponse};
pub use service::{HttpSearchTransport, MovieSearchService, SearchError, SearchTransport};
