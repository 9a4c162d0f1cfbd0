//! Presentation seam between the router and whatever renders screens.

use crate::movies::Movie;
use crate::routing::action::PresentationStyle;
use crate::ui::cells::format_rating;

/// Display-ready content for the movie details screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailsConfiguration {
    pub title_text: Option<String>,
    pub release_date_text: Option<String>,
    pub rating_text: Option<String>,
    pub movie: Movie,
}

impl MovieDetailsConfiguration {
    pub fn new(movie: Movie) -> Self {
        let title_text = movie.title.clone();
        let release_date_text = movie
            .release_date
            .as_ref()
            .map(|date| format!("Release date: {date}"));
        let rating_text = movie
            .rating
            .map(|rating| format!("Rating: {}", format_rating(rating)));

        Self {
            title_text,
            release_date_text,
            rating_text,
            movie,
        }
    }
}

/// A screen the router can ask to be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MovieDetails(MovieDetailsConfiguration),
}

/// Shows screens on behalf of the router.
///
/// The console binary prints them; tests record them.
pub trait Presenter {
    fn present(&mut self, screen: Screen, style: PresentationStyle);
}
