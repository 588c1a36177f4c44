use crate::domain::search::{SearchQuery, SEARCH_LIMIT};
use crate::domain::story::Story;
use crate::services::api_client::StoryFilters;

/// The three mutually exclusive result states of the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing searched yet; the page shows suggestions.
    Idle,
    /// A request is in flight; previous results are hidden.
    Loading,
    /// A search finished (possibly with zero results).
    Loaded,
}

/// A fetch the view must run. The token ties the eventual response back
/// to the generation that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: u64,
    pub filters: StoryFilters,
}

/// State machine behind the search page. Keeps the text input, category
/// selector, and URL consistent, and issues exactly one request per
/// explicit user action. Responses are applied through generation
/// tokens: last request wins, stale responses are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFlow {
    query: SearchQuery,
    phase: SearchPhase,
    results: Vec<Story>,
    generation: u64,
}

impl Default for SearchFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFlow {
    pub fn new() -> Self {
        Self {
            query: SearchQuery::default(),
            phase: SearchPhase::Idle,
            results: Vec::new(),
            generation: 0,
        }
    }

    /// Adopt a query carried by the URL. A non-empty query starts a
    /// search immediately so a shared or bookmarked link reproduces its
    /// results without the user resubmitting.
    pub fn restore(query: SearchQuery) -> (Self, Option<SearchRequest>) {
        let mut flow = Self::new();
        flow.query = query;
        if flow.query.is_empty() {
            return (flow, None);
        }
        let request = flow.begin();
        (flow, Some(request))
    }

    /// Text edits never fetch; only explicit actions do.
    pub fn set_text(&mut self, q: impl Into<String>) {
        self.query.q = q.into();
    }

    /// Form submission: one request with the current query pair.
    pub fn submit(&mut self) -> SearchRequest {
        self.begin()
    }

    /// Category quick-select: adopts the category and searches without a
    /// separate submit action.
    pub fn select_category(&mut self, category: impl Into<String>) -> SearchRequest {
        self.query.category = category.into();
        self.begin()
    }

    /// Reset to the not-yet-searched state; the view clears the URL
    /// alongside.
    pub fn clear(&mut self) {
        self.query = SearchQuery::default();
        self.results.clear();
        self.phase = SearchPhase::Idle;
        // The generation keeps counting so an in-flight response from
        // before the clear can never land.
        self.generation += 1;
    }

    /// Apply a successful response. Returns false (and changes nothing)
    /// when the token is stale.
    pub fn apply_success(&mut self, token: u64, stories: Vec<Story>) -> bool {
        if token != self.generation {
            return false;
        }
        self.results = stories;
        self.phase = SearchPhase::Loaded;
        true
    }

    /// A failed search surfaces the searched/empty state rather than an
    /// error; no retry is attempted.
    pub fn apply_failure(&mut self, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.results.clear();
        self.phase = SearchPhase::Loaded;
        true
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn results(&self) -> &[Story] {
        &self.results
    }

    /// The canonical query string for the address bar.
    pub fn url_query(&self) -> String {
        self.query.to_query_string()
    }

    fn begin(&mut self) -> SearchRequest {
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        SearchRequest {
            token: self.generation,
            filters: StoryFilters {
                q: self.query.text_filter().map(str::to_string),
                category: self.query.category_filter().map(str::to_string),
                limit: Some(SEARCH_LIMIT),
            },
        }
    }
}
