//! Search and pagination state of the article list page.

use dioxus_logger::tracing;

use crate::{
    client::store::generation::{FetchGeneration, FetchTicket},
    model::article::{Article, ArticleFilters, ArticlePage, ArticleQuery, PageSize},
};

pub static LOAD_FAILED: &str = "Failed to load articles. Please try again later.";

/// State of the article list.
///
/// Typing into the search form only edits `draft`. The applied `query` changes on
/// explicit actions, each of which is followed by a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListState {
    pub draft: ArticleFilters,
    pub query: ArticleQuery,
    pub articles: Vec<Article>,
    pub total: u64,
    pub pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    generation: FetchGeneration,
}

impl Default for ArticleListState {
    fn default() -> Self {
        Self {
            draft: ArticleFilters::default(),
            query: ArticleQuery::default(),
            articles: Vec::new(),
            total: 0,
            pages: 0,
            loading: true,
            error: None,
            generation: FetchGeneration::default(),
        }
    }
}

impl ArticleListState {
    /// Applies the draft filters and returns to the first page.
    pub fn submit_search(&mut self) {
        self.query.filters = self.draft.trimmed();
        self.query.page = 1;
    }

    /// Moves to `page`, returning false when nothing changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.query.page {
            return false;
        }

        self.query.page = page;
        true
    }

    pub fn set_per_page(&mut self, per_page: PageSize) {
        self.query.per_page = per_page;
        self.query.page = 1;
    }

    /// Clears both draft and applied filters.
    pub fn show_all(&mut self) {
        self.draft = ArticleFilters::default();
        self.query.filters = ArticleFilters::default();
        self.query.page = 1;
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.filters.is_empty()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.generation.issue()
    }

    /// Stores a fetched page unless a newer fetch has been issued since.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: ArticlePage) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!("Discarding stale article page {}", page.page);
            return false;
        }

        self.articles = page.articles;
        self.total = page.total;
        self.pages = page.pages;
        // The backend clamps out of range pages
        self.query.page = page.page.max(1);
        self.loading = false;
        true
    }

    /// Records a failed fetch, keeping the previously shown articles.
    pub fn apply_failure(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }

        self.error = Some(message);
        self.loading = false;
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
