//! End-to-end tests for the search flow: the state machine driving the
//! search page, exercised against a hand-written fake backend and a
//! mockall mock of the API seam.

use std::sync::Mutex;

use async_trait::async_trait;
use mockall::predicate::always;
use storyweave::domain::analytics::AnalyticsSummary;
use storyweave::domain::search::{SearchQuery, ALL_CATEGORIES, SEARCH_LIMIT};
use storyweave::domain::story::{Story, StoryId};
use storyweave::domain::submission::StorySubmission;
use storyweave::services::{ApiError, SearchFlow, SearchPhase, StoryApi, StoryFilters};

fn story(id: i64, title: &str, category: &str) -> Story {
    serde_json::from_str(&format!(
        r#"{{"id": {id}, "title": "{title}", "category": "{category}"}}"#
    ))
    .unwrap()
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        path: "stories".to_string(),
    }
}

/// In-memory stand-in for the REST backend. Records every list request
/// it serves so tests can assert on request counts and parameters.
struct FakeBackend {
    stories: Vec<Story>,
    requests: Mutex<Vec<StoryFilters>>,
    fail_listing: bool,
}

impl FakeBackend {
    fn with_stories(stories: Vec<Story>) -> Self {
        Self {
            stories,
            requests: Mutex::new(Vec::new()),
            fail_listing: false,
        }
    }

    fn failing() -> Self {
        Self {
            stories: Vec::new(),
            requests: Mutex::new(Vec::new()),
            fail_listing: true,
        }
    }

    fn requests(&self) -> Vec<StoryFilters> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryApi for FakeBackend {
    async fn list_stories(&self, filters: &StoryFilters) -> Result<Vec<Story>, ApiError> {
        self.requests.lock().unwrap().push(filters.clone());
        if self.fail_listing {
            return Err(server_error());
        }
        let matches = self
            .stories
            .iter()
            .filter(|story| {
                let text_ok = filters.q.as_deref().map_or(true, |q| {
                    story.title.to_lowercase().contains(&q.to_lowercase())
                });
                let category_ok = filters
                    .category
                    .as_deref()
                    .map_or(true, |category| story.category.as_deref() == Some(category));
                text_ok && category_ok
            })
            .take(filters.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn get_story(&self, id: StoryId) -> Result<Story, ApiError> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                path: format!("stories/{id}"),
            })
    }

    async fn submit_story(&self, _submission: &StorySubmission) -> Result<Story, ApiError> {
        Err(server_error())
    }

    async fn related_stories(&self, _id: StoryId) -> Result<Vec<Story>, ApiError> {
        Ok(Vec::new())
    }

    async fn analytics_summary(&self) -> Result<AnalyticsSummary, ApiError> {
        Ok(AnalyticsSummary::default())
    }
}

fn seeded_backend() -> FakeBackend {
    FakeBackend::with_stories(vec![
        story(1, "Water kiosks in Kitui", "Innovation Story"),
        story(2, "Water harvesting after the drought", "Community Impact"),
        story(3, "Classroom feedback loops", "From the Classroom"),
        story(4, "Budget transparency portal", "Innovation Story"),
    ])
}

async fn run(flow: &mut SearchFlow, backend: &FakeBackend) {
    let request = flow.submit();
    apply(flow, backend, request).await;
}

async fn apply(
    flow: &mut SearchFlow,
    backend: &FakeBackend,
    request: storyweave::services::SearchRequest,
) {
    match backend.list_stories(&request.filters).await {
        Ok(stories) => {
            flow.apply_success(request.token, stories);
        }
        Err(_) => {
            flow.apply_failure(request.token);
        }
    }
}

#[tokio::test]
async fn scenario_water_in_innovation_story() {
    // User types "water", picks "Innovation Story", submits.
    let backend = seeded_backend();
    let mut flow = SearchFlow::new();
    flow.set_text("water");
    let request = flow.select_category("Innovation Story");

    assert_eq!(flow.url_query(), "q=water&category=Innovation+Story");
    apply(&mut flow, &backend, request).await;

    let requests = backend.requests();
    assert_eq!(requests.len(), 1, "exactly one request per action");
    assert_eq!(requests[0].q.as_deref(), Some("water"));
    assert_eq!(requests[0].category.as_deref(), Some("Innovation Story"));
    assert_eq!(requests[0].limit, Some(SEARCH_LIMIT));

    assert_eq!(flow.phase(), SearchPhase::Loaded);
    assert_eq!(flow.results().len(), 1);
    assert_eq!(
        flow.query().describe_results(flow.results().len()),
        "Found 1 story for \"water\" in \"Innovation Story\""
    );
}

#[tokio::test]
async fn shared_url_searches_on_load_without_input() {
    let backend = seeded_backend();
    let (mut flow, initial) = SearchFlow::restore(SearchQuery::parse("q=leadership"));

    let request = initial.expect("shared URLs search immediately");
    assert_eq!(request.filters.q.as_deref(), Some("leadership"));
    assert_eq!(request.filters.category, None);

    apply(&mut flow, &backend, request).await;
    assert_eq!(flow.phase(), SearchPhase::Loaded);
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn empty_submit_returns_the_limited_full_set() {
    let backend = seeded_backend();
    let mut flow = SearchFlow::new();
    run(&mut flow, &backend).await;

    let requests = backend.requests();
    assert_eq!(requests[0].q, None);
    assert_eq!(requests[0].category, None);
    assert_eq!(requests[0].limit, Some(SEARCH_LIMIT));
    assert_eq!(flow.results().len(), 4);
}

#[tokio::test]
async fn quick_select_keeps_text_and_sentinel_clears_filter() {
    let backend = seeded_backend();
    let mut flow = SearchFlow::new();
    flow.set_text("water");

    let request = flow.select_category("Community Impact");
    assert_eq!(flow.url_query(), "q=water&category=Community+Impact");
    apply(&mut flow, &backend, request).await;
    assert_eq!(flow.results().len(), 1);

    let request = flow.select_category(ALL_CATEGORIES);
    assert_eq!(flow.url_query(), "q=water");
    apply(&mut flow, &backend, request).await;
    assert_eq!(flow.results().len(), 2);

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].category, None);
}

#[tokio::test]
async fn failed_search_shows_searched_empty_not_loading() {
    let backend = FakeBackend::failing();
    let mut flow = SearchFlow::new();
    flow.set_text("water");
    run(&mut flow, &backend).await;

    assert_eq!(flow.phase(), SearchPhase::Loaded);
    assert!(flow.results().is_empty());
    assert_eq!(
        flow.query().describe_results(0),
        "No stories found for \"water\""
    );
}

#[tokio::test]
async fn resubmitting_the_same_pair_is_idempotent() {
    let backend = seeded_backend();
    let mut flow = SearchFlow::new();
    flow.set_text("water");

    run(&mut flow, &backend).await;
    let first_url = flow.url_query();
    let first_results = flow.results().to_vec();

    run(&mut flow, &backend).await;
    assert_eq!(flow.url_query(), first_url);
    assert_eq!(flow.results(), first_results.as_slice());

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn newer_request_wins_when_responses_arrive_out_of_order() {
    let backend = seeded_backend();
    let mut flow = SearchFlow::new();

    flow.set_text("classroom");
    let older = flow.submit();
    flow.set_text("water");
    let newer = flow.submit();

    // The newer response lands first; the older one straggles in last.
    let newer_stories = backend.list_stories(&newer.filters).await.unwrap();
    let older_stories = backend.list_stories(&older.filters).await.unwrap();
    assert!(flow.apply_success(newer.token, newer_stories));
    assert!(!flow.apply_success(older.token, older_stories));

    // Displayed state matches the most recently issued request.
    assert_eq!(flow.query().q, "water");
    assert_eq!(flow.results().len(), 2);
    assert!(flow
        .results()
        .iter()
        .all(|story| story.title.to_lowercase().contains("water")));
}

mockall::mock! {
    Api {}

    #[async_trait]
    impl StoryApi for Api {
        async fn list_stories(&self, filters: &StoryFilters) -> Result<Vec<Story>, ApiError>;
        async fn get_story(&self, id: StoryId) -> Result<Story, ApiError>;
        async fn submit_story(&self, submission: &StorySubmission) -> Result<Story, ApiError>;
        async fn related_stories(&self, id: StoryId) -> Result<Vec<Story>, ApiError>;
        async fn analytics_summary(&self) -> Result<AnalyticsSummary, ApiError>;
    }
}

#[tokio::test]
async fn typing_never_reaches_the_backend() {
    let mut api = MockApi::new();
    // No expectations set: any call would panic the test.
    let mut flow = SearchFlow::new();
    flow.set_text("w");
    flow.set_text("wa");
    flow.set_text("water");
    assert_eq!(flow.phase(), SearchPhase::Idle);

    // Only the explicit submit may issue the one request.
    api.expect_list_stories()
        .with(always())
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let request = flow.submit();
    let stories = api.list_stories(&request.filters).await.unwrap();
    flow.apply_success(request.token, stories);
    assert_eq!(flow.phase(), SearchPhase::Loaded);
}

#[tokio::test]
async fn submit_sends_exactly_the_url_parameters() {
    let mut api = MockApi::new();
    api.expect_list_stories()
        .withf(|filters| {
            filters.q.as_deref() == Some("water")
                && filters.category.as_deref() == Some("Innovation Story")
                && filters.limit == Some(SEARCH_LIMIT)
        })
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let mut flow = SearchFlow::new();
    flow.set_text("water");
    let request = flow.select_category("Innovation Story");

    // The request carries the same pair the URL now shows.
    let url = flow.url_query();
    let reparsed = SearchQuery::parse(&url);
    assert_eq!(reparsed.q, "water");
    assert_eq!(reparsed.category, "Innovation Story");

    let stories = api.list_stories(&request.filters).await.unwrap();
    flow.apply_success(request.token, stories);
}
