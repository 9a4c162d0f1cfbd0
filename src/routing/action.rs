use crate::movies::Movie;

/// How a destination screen should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStyle {
    Modal,
    Push,
}

/// A transient navigation event routed through the responder chain.
///
/// Each variant carries its payload as typed fields, so a recognizing link
/// never needs a runtime cast. An action is consumed at most once, by the
/// first link that recognizes its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the details screen for a movie.
    ShowMovieDetails {
        movie: Movie,
        style: PresentationStyle,
    },
    /// Open a link outside the application.
    OpenExternalLink { url: String },
}
