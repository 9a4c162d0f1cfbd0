//! Decoupled navigation: typed actions, the responder chain, and the router.

mod action;
mod coordinator;
mod presenter;
mod responder;
mod router;

pub use action::{Action, PresentationStyle};
pub use coordinator::MoviesListCoordinator;
pub use presenter::{MovieDetailsConfiguration, Presenter, Screen};
pub use responder::{ActionResponder, Outcome, ResponderChain};
pub use router::AppRouter;
