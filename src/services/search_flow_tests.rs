#[cfg(test)]
mod tests {
    use super::super::search_flow::*;
    use crate::domain::search::{SearchQuery, ALL_CATEGORIES, SEARCH_LIMIT};
    use crate::domain::story::Story;

    fn story(id: i64, title: &str) -> Story {
        serde_json::from_str(&format!(r#"{{"id": {id}, "title": "{title}"}}"#)).unwrap()
    }

    #[test]
    fn test_starts_idle_with_no_request() {
        let flow = SearchFlow::new();
        assert_eq!(flow.phase(), SearchPhase::Idle);
        assert!(flow.results().is_empty());
        assert_eq!(flow.url_query(), "");
    }

    #[test]
    fn test_restore_empty_url_stays_idle() {
        let (flow, request) = SearchFlow::restore(SearchQuery::default());
        assert_eq!(flow.phase(), SearchPhase::Idle);
        assert!(request.is_none());
    }

    #[test]
    fn test_restore_from_shared_url_searches_immediately() {
        let (flow, request) = SearchFlow::restore(SearchQuery::parse("q=leadership"));
        assert_eq!(flow.phase(), SearchPhase::Loading);

        let request = request.expect("a shared URL must trigger a search");
        assert_eq!(request.filters.q.as_deref(), Some("leadership"));
        assert_eq!(request.filters.category, None);
        assert_eq!(request.filters.limit, Some(SEARCH_LIMIT));
    }

    #[test]
    fn test_typing_does_not_fetch() {
        let mut flow = SearchFlow::new();
        flow.set_text("wat");
        flow.set_text("water");
        assert_eq!(flow.phase(), SearchPhase::Idle);
        assert_eq!(flow.query().q, "water");
    }

    #[test]
    fn test_submit_issues_one_request_and_syncs_url() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");
        let request = flow.select_category("Innovation Story");

        assert_eq!(flow.url_query(), "q=water&category=Innovation+Story");
        assert_eq!(request.filters.q.as_deref(), Some("water"));
        assert_eq!(request.filters.category.as_deref(), Some("Innovation Story"));
        assert_eq!(flow.phase(), SearchPhase::Loading);

        assert!(flow.apply_success(request.token, vec![story(1, "A"), story(2, "B")]));
        assert_eq!(flow.phase(), SearchPhase::Loaded);
        assert_eq!(flow.query().describe_results(flow.results().len()),
            "Found 2 stories for \"water\" in \"Innovation Story\"");
    }

    #[test]
    fn test_quick_select_keeps_text_and_drops_sentinel() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");

        let request = flow.select_category("Research Brief");
        assert_eq!(flow.url_query(), "q=water&category=Research+Brief");
        assert_eq!(request.filters.q.as_deref(), Some("water"));

        let request = flow.select_category(ALL_CATEGORIES);
        assert_eq!(flow.url_query(), "q=water");
        assert_eq!(request.filters.category, None);
    }

    #[test]
    fn test_empty_submit_requests_unfiltered_list() {
        let mut flow = SearchFlow::new();
        let request = flow.submit();
        assert_eq!(request.filters.q, None);
        assert_eq!(request.filters.category, None);
        assert_eq!(request.filters.limit, Some(SEARCH_LIMIT));
    }

    #[test]
    fn test_failure_lands_in_searched_empty_state() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");
        let request = flow.submit();
        assert!(flow.apply_failure(request.token));
        assert_eq!(flow.phase(), SearchPhase::Loaded);
        assert!(flow.results().is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut flow = SearchFlow::new();
        flow.set_text("first");
        let first = flow.submit();
        flow.set_text("second");
        let second = flow.submit();

        // The newer request resolves before the older one.
        assert!(flow.apply_success(second.token, vec![story(2, "Second")]));
        assert!(!flow.apply_success(first.token, vec![story(1, "First")]));

        assert_eq!(flow.results().len(), 1);
        assert_eq!(flow.results()[0].title, "Second");
    }

    #[test]
    fn test_stale_failure_cannot_clobber_results() {
        let mut flow = SearchFlow::new();
        let first = flow.submit();
        let second = flow.submit();
        assert!(flow.apply_success(second.token, vec![story(1, "Kept")]));
        assert!(!flow.apply_failure(first.token));
        assert_eq!(flow.results().len(), 1);
    }

    #[test]
    fn test_resubmitting_same_query_is_idempotent() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");

        let first = flow.submit();
        let url_after_first = flow.url_query();
        assert!(flow.apply_success(first.token, vec![story(1, "A")]));

        let second = flow.submit();
        assert_eq!(flow.url_query(), url_after_first);
        assert_eq!(second.filters, first.filters);
        assert!(flow.apply_success(second.token, vec![story(1, "A")]));
        assert_eq!(flow.results().len(), 1);
    }

    #[test]
    fn test_clear_resets_query_results_and_url() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");
        let request = flow.select_category("Community Impact");
        assert!(flow.apply_success(request.token, vec![story(1, "A")]));

        flow.clear();
        assert_eq!(flow.phase(), SearchPhase::Idle);
        assert!(flow.results().is_empty());
        assert_eq!(flow.url_query(), "");
        assert!(flow.query().is_empty());
    }

    #[test]
    fn test_response_from_before_clear_is_ignored() {
        let mut flow = SearchFlow::new();
        flow.set_text("water");
        let request = flow.submit();
        flow.clear();
        assert!(!flow.apply_success(request.token, vec![story(1, "Late")]));
        assert_eq!(flow.phase(), SearchPhase::Idle);
        assert!(flow.results().is_empty());
    }
}
