use serde::Deserialize;

/// A single movie as returned by the search endpoint.
///
/// Everything except the id is optional in the upstream payload; rendering
/// layers decide how to present missing fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    /// Release date as an upstream-formatted string (e.g. "2022-03-01").
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average rating on a 0-10 scale.
    #[serde(default, rename = "vote_average")]
    pub rating: Option<f64>,
}

/// One page of search results.
///
/// Each fetch supersedes the previous response wholesale; nothing here is
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieApiResponse {
    #[serde(rename = "results")]
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
}

impl MovieApiResponse {
    /// The page to request next, or `None` when pagination is exhausted.
    pub fn next_page(&self) -> Option<u32> {
        if self.page < self.total_pages {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_present_while_pages_remain() {
        let response = MovieApiResponse {
            movies: vec![],
            page: 1,
            total_pages: 3,
        };
        assert_eq!(response.next_page(), Some(2));
    }

    #[test]
    fn next_page_absent_on_last_page() {
        let response = MovieApiResponse {
            movies: vec![],
            page: 3,
            total_pages: 3,
        };
        assert_eq!(response.next_page(), None);
    }

    #[test]
    fn decodes_upstream_field_names() {
        let json = r#"{
            "results": [
                {"id": 414906, "title": "The Batman", "release_date": "2022-03-01", "vote_average": 7.75}
            ],
            "page": 1,
            "total_pages": 2
        }"#;
        let response: MovieApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.movies.len(), 1);
        assert_eq!(response.movies[0].title.as_deref(), Some("The Batman"));
        assert_eq!(response.movies[0].rating, Some(7.75));
        assert_eq!(response.next_page(), Some(2));
    }

    #[test]
    fn missing_optional_fields_decode_as_none() {
        let json = r#"{"results": [{"id": 7}], "page": 1, "total_pages": 1}"#;
        let response: MovieApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.movies[0].title, None);
        assert_eq!(response.movies[0].release_date, None);
        assert_eq!(response.movies[0].rating, None);
    }
}
