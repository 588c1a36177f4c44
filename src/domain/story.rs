use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type StoryId = i64;

/// A published story as the backend returns it. The client never edits
/// stories; everything here is a read model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    /// Comma-separated, server-owned.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Story {
    pub fn display_author(&self) -> &str {
        self.author_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Community Contributor")
    }

    /// Publication date, falling back to creation date for drafts that
    /// were published without one.
    pub fn display_date(&self) -> Option<DateTime<Utc>> {
        self.published_at.or(self.created_at)
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    pub fn has_media(&self) -> bool {
        self.media_url
            .as_deref()
            .map(|url| !url.is_empty())
            .unwrap_or(false)
    }

    /// Short teaser for sidebars and related-story lists.
    pub fn teaser(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let cut: String = self.description.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

/// List endpoints have returned both a bare array and a wrapped
/// `{"results": [...]}` object; accept either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoryList {
    Wrapped { results: Vec<Story> },
    Bare(Vec<Story>),
}

impl StoryList {
    pub fn into_stories(self) -> Vec<Story> {
        match self {
            StoryList::Wrapped { results } => results,
            StoryList::Bare(stories) => stories,
        }
    }
}
