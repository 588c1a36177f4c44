use std::fmt;

use url::form_urlencoded;

/// Sentinel shown in the category selector; never sent to the backend
/// and never written into the URL.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Categories a story can be filed under. The backend treats these as
/// plain strings; this list drives the selector and the quick-select
/// chips.
pub const CATEGORIES: [&str; 6] = [
    "Alumni Impact",
    "Policy in Action",
    "Research Brief",
    "From the Classroom",
    "Innovation Story",
    "Community Impact",
];

/// Starter terms offered before the first search.
pub const SUGGESTED_TERMS: [&str; 4] = ["leadership", "innovation", "policy", "community"];

/// Every search request is bounded by this.
pub const SEARCH_LIMIT: usize = 20;

/// The search state a URL can carry. The URL query string is the source
/// of truth for shareable search state, so this type round-trips through
/// form-urlencoded text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub category: String,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            category: category.into(),
        }
    }

    /// The category filter to send to the backend, with the sentinel and
    /// the empty string both meaning "no filter".
    pub fn category_filter(&self) -> Option<&str> {
        let trimmed = self.category.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn text_filter(&self) -> Option<&str> {
        let trimmed = self.q.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text_filter().is_none() && self.category_filter().is_none()
    }

    /// Serialize for the address bar, omitting empty values and the
    /// category sentinel. Spaces encode as `+`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(q) = self.text_filter() {
            serializer.append_pair("q", q);
        }
        if let Some(category) = self.category_filter() {
            serializer.append_pair("category", category);
        }
        serializer.finish()
    }

    /// Parse the query-string half of a URL. Unknown parameters are
    /// ignored; repeated parameters keep the last value, matching what
    /// the backend does.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => parsed.q = value.into_owned(),
                "category" => parsed.category = value.into_owned(),
                _ => {}
            }
        }
        parsed
    }

    /// Header line shown above search results.
    pub fn describe_results(&self, count: usize) -> String {
        let noun = if count == 1 { "story" } else { "stories" };
        let mut line = if count == 0 {
            "No stories found".to_string()
        } else {
            format!("Found {count} {noun}")
        };
        if let Some(q) = self.text_filter() {
            line.push_str(&format!(" for \"{q}\""));
        }
        if let Some(category) = self.category_filter() {
            line.push_str(&format!(" in \"{category}\""));
        }
        line
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        Self::parse(&query)
    }
}
