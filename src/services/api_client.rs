use async_trait::async_trait;
use reqwest::multipart;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::analytics::AnalyticsSummary;
use crate::domain::story::{Story, StoryId, StoryList};
use crate::domain::submission::StorySubmission;
use crate::services::errors::ApiError;

/// Query parameters for the story list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilters {
    pub q: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl StoryFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// The five operations the backend exposes. Stateless request/response
/// wrappers: no retries, no caching, no deduplication. Callers own the
/// error handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoryApi: Send + Sync {
    async fn list_stories(&self, filters: &StoryFilters) -> Result<Vec<Story>, ApiError>;
    async fn get_story(&self, id: StoryId) -> Result<Story, ApiError>;
    async fn submit_story(&self, submission: &StorySubmission) -> Result<Story, ApiError>;
    async fn related_stories(&self, id: StoryId) -> Result<Vec<Story>, ApiError>;
    async fn analytics_summary(&self) -> Result<AnalyticsSummary, ApiError>;
}

/// reqwest-backed client for the REST backend.
#[derive(Debug, Clone)]
pub struct HttpStoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStoryApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!(%url, "api request");
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Multipart field names the backend expects, kept next to the payload
/// assembly so the submission tests can pin them.
pub fn submission_fields(submission: &StorySubmission) -> Vec<(&'static str, String)> {
    vec![
        ("title", submission.title.clone()),
        ("description", submission.description.clone()),
        ("category", submission.category.clone()),
        ("authorName", submission.author_name.clone()),
        ("authorEmail", submission.author_email.clone()),
        ("transcript", submission.transcript.clone()),
    ]
}

#[async_trait]
impl StoryApi for HttpStoryApi {
    async fn list_stories(&self, filters: &StoryFilters) -> Result<Vec<Story>, ApiError> {
        let list: StoryList = self.get_json("stories", &filters.to_query()).await?;
        Ok(list.into_stories())
    }

    async fn get_story(&self, id: StoryId) -> Result<Story, ApiError> {
        self.get_json(&format!("stories/{id}"), &[]).await
    }

    async fn submit_story(&self, submission: &StorySubmission) -> Result<Story, ApiError> {
        let path = "stories";
        let url = self.endpoint(path);
        debug!(%url, "submitting story");

        let mut form = multipart::Form::new();
        for (name, value) in submission_fields(submission) {
            form = form.text(name, value);
        }
        if let Some(media) = &submission.media {
            let part = multipart::Part::bytes(media.bytes.clone())
                .file_name(media.file_name.clone());
            form = form.part("file", part);
        }

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn related_stories(&self, id: StoryId) -> Result<Vec<Story>, ApiError> {
        let list: StoryList = self
            .get_json(&format!("stories/{id}/related"), &[])
            .await?;
        Ok(list.into_stories())
    }

    async fn analytics_summary(&self) -> Result<AnalyticsSummary, ApiError> {
        self.get_json("analytics/summary", &[]).await
    }
}
