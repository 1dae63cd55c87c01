use chrono::{DateTime, Utc};

use crate::entity::{ApiError, Category, SortKey, Token};

/// Items of one fetched section together with the outcome of the last fetch.
///
/// A failed fetch keeps the previous items and only records the error.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> Section<T> {
    /// Commits a fetch result. Returns the error message when the fetch failed.
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) -> Option<String> {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                None
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                Some(message)
            }
        }
    }

    /// Like `apply`, but appends a successful page to the current items.
    pub fn append(&mut self, result: Result<Vec<T>, ApiError>) -> Option<String> {
        match result {
            Ok(items) => {
                self.items.extend(items);
                self.error = None;
                None
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                Some(message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub categories: Section<Category>,
    pub tokens: Section<Token>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: true,
            categories: Section::default(),
            tokens: Section::default(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryState {
    pub category_id: String,
    pub sort: SortKey,
    pub loading: bool,
    pub tokens: Section<Token>,
    /// Tag of the most recently issued fetch. Only its response may commit.
    pub generation: u64,
    /// Category and sort the shown rows were fetched for.
    pub loaded_for: Option<(String, SortKey)>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CategoryState {
    pub fn new(category_id: &str) -> Self {
        Self {
            category_id: category_id.to_string(),
            sort: SortKey::default(),
            loading: true,
            tokens: Section::default(),
            generation: 0,
            loaded_for: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenDetailState {
    pub token_id: String,
    pub loading: bool,
    pub token: Option<Token>,
    pub error: Option<String>,
}

impl TokenDetailState {
    pub fn new(token_id: &str) -> Self {
        Self {
            token_id: token_id.to_string(),
            loading: true,
            token: None,
            error: None,
        }
    }
}

impl CategoryState {
    /// Whether the shown rows belong to the current category and sort, so a
    /// next page can be appended to them.
    pub fn rows_match_selection(&self) -> bool {
        self.loaded_for.as_ref().is_some_and(|(category_id, sort)| {
            *category_id == self.category_id && *sort == self.sort
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut section = Section {
            items: vec![1, 2, 3],
            error: None,
        };

        let error = section.apply(Err(ApiError::RequestFailed(502)));

        assert_eq!(error.as_deref(), Some("Request failed with status 502"));
        assert_eq!(section.items, vec![1, 2, 3]);

        section.apply(Ok(vec![4]));
        assert_eq!(section.items, vec![4]);
        assert!(section.error.is_none());
    }

    #[test]
    fn append_extends_current_page() {
        let mut section = Section {
            items: vec![1],
            error: Some("stale".into()),
        };
        section.append(Ok(vec![2, 3]));
        assert_eq!(section.items, vec![1, 2, 3]);
        assert!(section.error.is_none());
    }
}
