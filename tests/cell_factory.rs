mod common;

use cinesearch::ui::cells::{CellConfiguration, MoviesListCellFactory};
use common::{movies, page};

fn movie_row_count(rows: &[CellConfiguration]) -> usize {
    rows.iter()
        .filter(|row| matches!(row, CellConfiguration::Movie(_)))
        .count()
}

fn loading_row_count(rows: &[CellConfiguration]) -> usize {
    rows.iter().filter(|row| row.is_loading()).count()
}

#[test]
fn initial_with_next_page_ends_with_single_loading_row() {
    let mut factory = MoviesListCellFactory::new();
    let rows = factory.generate_initial(&page(movies(20, 0), 1, 2)).to_vec();

    assert_eq!(movie_row_count(&rows), 20);
    assert_eq!(loading_row_count(&rows), 1);
    assert!(rows.last().unwrap().is_loading());
}

#[test]
fn initial_without_next_page_has_no_loading_row() {
    let mut factory = MoviesListCellFactory::new();
    let rows = factory.generate_initial(&page(movies(5, 0), 1, 1)).to_vec();

    assert_eq!(rows.len(), 5);
    assert_eq!(loading_row_count(&rows), 0);
}

#[test]
fn appending_preserves_order_and_replaces_loading_row() {
    let mut factory = MoviesListCellFactory::new();
    factory.generate_initial(&page(movies(20, 0), 1, 3));
    let rows = factory
        .generate_appending_next_page(&page(movies(5, 100), 2, 3))
        .to_vec();

    assert_eq!(movie_row_count(&rows), 25);
    assert_eq!(loading_row_count(&rows), 1);
    assert!(rows.last().unwrap().is_loading());

    // Page-1 movies first, page-2 movies after, original relative order.
    let ids: Vec<i64> = rows
        .iter()
        .filter_map(|row| match row {
            CellConfiguration::Movie(cell) => Some(cell.movie.id),
            CellConfiguration::Loading => None,
        })
        .collect();
    let expected: Vec<i64> = (0..20).chain(100..105).collect();
    assert_eq!(ids, expected);
}

#[test]
fn appending_last_page_drops_loading_row() {
    let mut factory = MoviesListCellFactory::new();
    factory.generate_initial(&page(movies(20, 0), 1, 2));
    let rows = factory
        .generate_appending_next_page(&page(movies(5, 100), 2, 2))
        .to_vec();

    assert_eq!(rows.len(), 25);
    assert_eq!(loading_row_count(&rows), 0);
}

#[test]
fn appending_twice_keeps_at_most_one_loading_row() {
    let mut factory = MoviesListCellFactory::new();
    factory.generate_initial(&page(movies(3, 0), 1, 3));
    factory.generate_appending_next_page(&page(movies(3, 10), 2, 3));
    let rows = factory
        .generate_appending_next_page(&page(movies(3, 20), 3, 3))
        .to_vec();

    assert_eq!(movie_row_count(&rows), 9);
    assert_eq!(loading_row_count(&rows), 0);
}

#[test]
fn generate_initial_replaces_previous_session() {
    let mut factory = MoviesListCellFactory::new();
    factory.generate_initial(&page(movies(20, 0), 1, 2));
    let rows = factory.generate_initial(&page(movies(2, 500), 1, 1)).to_vec();

    assert_eq!(rows.len(), 2);
    assert_eq!(loading_row_count(&rows), 0);
}

#[test]
fn movie_at_resolves_only_movie_rows() {
    let mut factory = MoviesListCellFactory::new();
    factory.generate_initial(&page(movies(2, 0), 1, 2));

    assert_eq!(factory.movie_at(0).map(|m| m.id), Some(0));
    assert_eq!(factory.movie_at(1).map(|m| m.id), Some(1));
    // Index 2 is the loading row.
    assert!(factory.movie_at(2).is_none());
    assert!(factory.movie_at(99).is_none());
}
