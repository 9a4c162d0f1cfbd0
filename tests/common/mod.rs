//! Shared test builders and fakes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use cinesearch::movies::{Movie, MovieApiResponse, SearchError, SearchTransport};
use cinesearch::routing::{PresentationStyle, Presenter, Screen};

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: Some(title.to_string()),
        release_date: Some("2022-03-01".to_string()),
        rating: Some(7.5),
    }
}

pub fn movies(count: usize, id_offset: i64) -> Vec<Movie> {
    (0..count)
        .map(|i| movie(id_offset + i as i64, &format!("Movie {}", id_offset + i as i64)))
        .collect()
}

pub fn page(movies: Vec<Movie>, page: u32, total_pages: u32) -> MovieApiResponse {
    MovieApiResponse {
        movies,
        page,
        total_pages,
    }
}

/// A decode failure suitable for scripting error paths.
pub fn decode_error() -> SearchError {
    let source = serde_json::from_str::<MovieApiResponse>("not json").unwrap_err();
    SearchError::Decode { source }
}

#[derive(Default)]
struct FakeTransportInner {
    script: RefCell<VecDeque<Result<MovieApiResponse, SearchError>>>,
    calls: RefCell<Vec<(String, u32)>>,
}

/// Scripted transport that records every call.
///
/// Clones share state, so a handle kept by the test still sees calls made
/// through the clone owned by the service.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<FakeTransportInner>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_ok(&self, response: MovieApiResponse) {
        self.inner.script.borrow_mut().push_back(Ok(response));
    }

    pub fn script_err(&self, error: SearchError) {
        self.inner.script.borrow_mut().push_back(Err(error));
    }

    /// `(title, page)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.inner.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.borrow().len()
    }
}

impl SearchTransport for FakeTransport {
    async fn search(&self, title: &str, page: u32) -> Result<MovieApiResponse, SearchError> {
        self.inner
            .calls
            .borrow_mut()
            .push((title.to_string(), page));
        self.inner
            .script
            .borrow_mut()
            .pop_front()
            .expect("unscripted transport call")
    }
}

/// Presenter that records everything it is asked to show.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub presented: Rc<RefCell<Vec<(Screen, PresentationStyle)>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented_count(&self) -> usize {
        self.presented.borrow().len()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, screen: Screen, style: PresentationStyle) {
        self.presented.borrow_mut().push((screen, style));
    }
}
