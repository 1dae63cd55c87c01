use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
}

/// Client-side pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Category(String),
    Token(String),
}

lazy_static! {
    static ref CATEGORY_ROUTE: Regex = Regex::new(r"^/category/([^/]+)/?$").unwrap();
    static ref TOKEN_ROUTE: Regex = Regex::new(r"^/token/([^/]+)/?$").unwrap();
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        if path == "/" || path.is_empty() {
            return Ok(Route::Dashboard);
        }
        if let Some(id) = CATEGORY_ROUTE.captures(path).and_then(|cap| cap.get(1)) {
            return Ok(Route::Category(id.as_str().to_string()));
        }
        if let Some(id) = TOKEN_ROUTE.captures(path).and_then(|cap| cap.get(1)) {
            return Ok(Route::Token(id.as_str().to_string()));
        }
        Err(RouteError::Unknown(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/"),
            Route::Category(id) => write!(f, "/category/{}", id),
            Route::Token(id) => write!(f, "/token/{}", id),
        }
    }
}
