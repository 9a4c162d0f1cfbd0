//! Application assembly: config → service → view-model → responder chain.

use tokio::sync::mpsc;

use crate::config::Config;
use crate::movies::{HttpSearchTransport, MovieSearchService, SearchTransport};
use crate::routing::{Action, AppRouter, MoviesListCoordinator, Presenter, ResponderChain};
use crate::ui::viewmodel::MoviesListViewModel;

/// Fully wired application core.
///
/// Owns the list view-model and the responder chain it emits actions into.
/// Actions queue on an unbounded channel; callers pump them through the chain
/// with [`MoviesApp::drain_actions`] after driving the view-model.
pub struct MoviesApp<T: SearchTransport> {
    viewmodel: MoviesListViewModel<T>,
    chain: ResponderChain,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl MoviesApp<HttpSearchTransport> {
    /// Wires the app against the real HTTP transport.
    pub fn from_config<P: Presenter + 'static>(config: &Config, presenter: P) -> Self {
        let transport = HttpSearchTransport::new(&config.api);
        Self::new(MovieSearchService::new(transport), presenter)
    }
}

impl<T: SearchTransport> MoviesApp<T> {
    pub fn new<P: Presenter + 'static>(service: MovieSearchService<T>, presenter: P) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let coordinator = MoviesListCoordinator::new(action_tx);
        let viewmodel = coordinator.start(service);

        // Leaf-to-root order: flow coordinator first, router last.
        let chain = ResponderChain::new()
            .link(Box::new(coordinator))
            .link(Box::new(AppRouter::new(presenter)));

        Self {
            viewmodel,
            chain,
            action_rx,
        }
    }

    pub fn viewmodel(&self) -> &MoviesListViewModel<T> {
        &self.viewmodel
    }

    pub fn viewmodel_mut(&mut self) -> &mut MoviesListViewModel<T> {
        &mut self.viewmodel
    }

    /// Routes every action emitted since the last call through the chain.
    ///
    /// Returns how many actions were dispatched.
    pub fn drain_actions(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.chain.dispatch(action);
            dispatched += 1;
        }
        dispatched
    }
}
