use tokio::sync::mpsc;

use crate::movies::{MovieSearchService, SearchTransport};
use crate::routing::action::Action;
use crate::routing::responder::{ActionResponder, Outcome};
use crate::ui::viewmodel::MoviesListViewModel;

/// Owns the movies-list flow.
///
/// `start` wires a view-model to the chain's action channel. As a chain link
/// the coordinator recognizes no actions itself; it exists so flow-scoped
/// handling has a place to live between view-models and the router.
pub struct MoviesListCoordinator {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl MoviesListCoordinator {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Builds the list view-model for this flow, connected to the chain.
    pub fn start<T: SearchTransport>(
        &self,
        service: MovieSearchService<T>,
    ) -> MoviesListViewModel<T> {
        tracing::debug!("starting movies list flow");
        MoviesListViewModel::new(service, self.action_tx.clone())
    }
}

impl ActionResponder for MoviesListCoordinator {
    fn handle_action(&mut self, action: Action) -> Outcome {
        Outcome::Forwarded(action)
    }
}
