use crate::routing::action::Action;
use crate::routing::presenter::{MovieDetailsConfiguration, Presenter, Screen};
use crate::routing::responder::{ActionResponder, Outcome};

/// Root link of the responder chain.
///
/// Recognizes "show movie details" actions and hands the constructed details
/// screen to the presenter; everything else is forwarded.
pub struct AppRouter<P: Presenter> {
    presenter: P,
}

impl<P: Presenter> AppRouter<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }
}

impl<P: Presenter> ActionResponder for AppRouter<P> {
    fn handle_action(&mut self, action: Action) -> Outcome {
        match action {
            Action::ShowMovieDetails { movie, style } => {
                tracing::debug!(movie_id = movie.id, ?style, "presenting movie details");
                let screen = Screen::MovieDetails(MovieDetailsConfiguration::new(movie));
                self.presenter.present(screen, style);
                Outcome::Consumed
            }
            other => Outcome::Forwarded(other),
        }
    }
}
