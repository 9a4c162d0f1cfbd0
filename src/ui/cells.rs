//! Row descriptors for the movies list and the factory that produces them.
//!
//! The factory holds the current ordered row list and maintains the invariant
//! that at most one loading row exists, always in last position.

use crate::movies::{Movie, MovieApiResponse};

const RELEASE_DATE_PREFIX: &str = "Release date:";
const RATING_PREFIX: &str = "Rating:";

/// Display-ready content for a movie row.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCellConfiguration {
    /// Title text, absent when the movie carries no title.
    pub title_text: Option<String>,
    /// "Release date: ..." line, absent when unknown.
    pub release_date_text: Option<String>,
    /// "Rating: ..." line with at most two fraction digits, absent when unrated.
    pub rating_text: Option<String>,
    /// The movie backing this row, carried for selection handling.
    pub movie: Movie,
}

impl MovieCellConfiguration {
    pub fn new(movie: Movie) -> Self {
        let title_text = movie.title.clone();
        let release_date_text = movie
            .release_date
            .as_ref()
            .map(|date| format!("{RELEASE_DATE_PREFIX} {date}"));
        let rating_text = movie
            .rating
            .map(|rating| format!("{RATING_PREFIX} {}", format_rating(rating)));

        Self {
            title_text,
            release_date_text,
            rating_text,
            movie,
        }
    }
}

/// A renderable row, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CellConfiguration {
    Movie(MovieCellConfiguration),
    /// Trailing placeholder indicating another page can be loaded.
    Loading,
}

impl CellConfiguration {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Formats a rating with at most two fraction digits, trailing zeros trimmed.
pub fn format_rating(rating: f64) -> String {
    let text = format!("{rating:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Builds and holds the current row list for the movies list screen.
#[derive(Debug, Default)]
pub struct MoviesListCellFactory {
    configurations: Vec<CellConfiguration>,
}

impl MoviesListCellFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rows currently held, in display order.
    pub fn configurations(&self) -> &[CellConfiguration] {
        &self.configurations
    }

    /// The movie behind the row at `index`; `None` for loading rows and
    /// out-of-range indices.
    pub fn movie_at(&self, index: usize) -> Option<&Movie> {
        match self.configurations.get(index)? {
            CellConfiguration::Movie(cell) => Some(&cell.movie),
            CellConfiguration::Loading => None,
        }
    }

    /// Replaces the held list with rows for a first-page response, appending
    /// one trailing loading row when more pages exist.
    pub fn generate_initial(&mut self, response: &MovieApiResponse) -> &[CellConfiguration] {
        let mut rows = movie_rows(&response.movies);

        if response.next_page().is_some() {
            rows.push(CellConfiguration::Loading);
        }

        self.configurations = rows;
        &self.configurations
    }

    /// Appends rows for a follow-up page: drops the held trailing loading row
    /// if present, appends the new page's movie rows in order, then a fresh
    /// loading row iff the new response still has a next page.
    pub fn generate_appending_next_page(
        &mut self,
        response: &MovieApiResponse,
    ) -> &[CellConfiguration] {
        if let Some(index) = self.configurations.iter().position(CellConfiguration::is_loading) {
            self.configurations.remove(index);
        }

        self.configurations.extend(movie_rows(&response.movies));

        if response.next_page().is_some() {
            self.configurations.push(CellConfiguration::Loading);
        }

        &self.configurations
    }

    /// Clears the held list (empty search result).
    pub fn clear(&mut self) {
        self.configurations.clear();
    }
}

fn movie_rows(movies: &[Movie]) -> Vec<CellConfiguration> {
    movies
        .iter()
        .map(|movie| CellConfiguration::Movie(MovieCellConfiguration::new(movie.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_trims_trailing_zeros() {
        assert_eq!(format_rating(7.0), "7");
        assert_eq!(format_rating(7.5), "7.5");
        assert_eq!(format_rating(7.75), "7.75");
        assert_eq!(format_rating(7.756), "7.76");
    }

    #[test]
    fn cell_text_absent_for_missing_fields() {
        let movie = Movie {
            id: 1,
            title: None,
            release_date: None,
            rating: None,
        };
        let cell = MovieCellConfiguration::new(movie);
        assert_eq!(cell.title_text, None);
        assert_eq!(cell.release_date_text, None);
        assert_eq!(cell.rating_text, None);
    }

    #[test]
    fn cell_text_prefixed_when_present() {
        let movie = Movie {
            id: 1,
            title: Some("The Batman".to_string()),
            release_date: Some("2022-03-01".to_string()),
            rating: Some(7.7),
        };
        let cell = MovieCellConfiguration::new(movie);
        assert_eq!(cell.title_text.as_deref(), Some("The Batman"));
        assert_eq!(cell.release_date_text.as_deref(), Some("Release date: 2022-03-01"));
        assert_eq!(cell.rating_text.as_deref(), Some("Rating: 7.7"));
    }
}
