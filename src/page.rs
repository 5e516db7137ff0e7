//! Pages, locations and identifiers
//!
//! A page load builds fresh search inputs and panel containers. Ids are never
//! reused, so a response addressed to something from an earlier page load
//! simply finds nothing to update.

use std::fmt;

use reqwest::Url;

/// Path of the results page
pub const SEARCH_PATH: &str = "/search";

/// Name of the query parameter, both in page locations and endpoint URLs
pub const QUERY_PARAM: &str = "query";

// Only used to resolve relative locations; never contacted.
const LOCATION_ORIGIN: &str = "http://localhost/";

/// Identifies one search input (and so its autocomplete controller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputId(u64);

impl InputId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identifies one page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(u64);

impl PageId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Hands out ids for the lifetime of the app
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    pub fn input(&mut self) -> InputId {
        InputId(self.bump())
    }

    pub fn page(&mut self) -> PageId {
        PageId(self.bump())
    }
}

/// Which page a location shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Results,
}

/// Path plus optional `query` parameter of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    pub fn home() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
        }
    }

    /// Results page reached through a link that names the query
    pub fn search(query: &str) -> Self {
        Self {
            path: SEARCH_PATH.to_string(),
            query: Some(query.to_string()),
        }
    }

    /// Results page reached by submitting the search form
    ///
    /// The form posts its fields, so the location carries no query.
    pub fn form_submission() -> Self {
        Self {
            path: SEARCH_PATH.to_string(),
            query: None,
        }
    }

    /// Parse a relative location such as `/search?query=rust`
    ///
    /// Unparseable input falls back to the home page.
    pub fn parse(location: &str) -> Self {
        let parsed = Url::parse(LOCATION_ORIGIN).and_then(|origin| origin.join(location));
        match parsed {
            Ok(url) => Self {
                path: url.path().to_string(),
                query: url
                    .query_pairs()
                    .find(|(key, _)| key == QUERY_PARAM)
                    .map(|(_, value)| value.into_owned()),
            },
            Err(e) => {
                log::debug!("Unparseable location '{}': {}", location, e);
                Self::home()
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The `query` parameter, if the location has one
    pub fn query_param(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn route(&self) -> Route {
        if self.path == SEARCH_PATH {
            Route::Results
        } else {
            Route::Home
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => {
                let mut url = Url::parse(LOCATION_ORIGIN).map_err(|_| fmt::Error)?;
                url.set_path(&self.path);
                url.query_pairs_mut().append_pair(QUERY_PARAM, query);
                write!(f, "{}?{}", url.path(), url.query().unwrap_or_default())
            }
            None => write!(f, "{}", self.path),
        }
    }
}

/// Active query of a results page
///
/// The location's `query` parameter wins; otherwise the value of the first
/// search input on the page. Empty means "no query".
pub fn active_query(location: &Location, first_input_value: Option<&str>) -> String {
    location
        .query_param()
        .filter(|query| !query.is_empty())
        .or(first_input_value)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
