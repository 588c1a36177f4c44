use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::domain::search::{SearchQuery, ALL_CATEGORIES, CATEGORIES, SUGGESTED_TERMS};
use crate::services::{SearchFlow, SearchPhase, SearchRequest};
use crate::ui::components::StoryCard;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_theme};

/// The search page. All sequencing rules (one fetch per action, URL as
/// source of truth, last request wins) live in [`SearchFlow`]; this
/// component is glue between the flow, the router, and the API client.
#[component]
pub fn Search(query: ReadOnlySignal<SearchQuery>) -> Element {
    let api_handle = use_api();
    let api = use_hook(|| CopyValue::new(api_handle));
    let theme = use_theme();
    let nav = use_navigator();
    let mut flow = use_signal(SearchFlow::new);

    let run = move |request: SearchRequest| {
        let api = api.read().clone();
        spawn(async move {
            let outcome = api.list_stories(&request.filters).await;
            match outcome {
                Ok(stories) => {
                    flow.write().apply_success(request.token, stories);
                }
                Err(err) => {
                    warn!(error = %err, "search request failed");
                    flow.write().apply_failure(request.token);
                }
            }
        });
    };

    // Adopt the query the URL carries: on first render, on back/forward,
    // and when another page links here with a category preselected. A
    // URL this page just pushed itself matches the flow state and is a
    // no-op.
    use_effect(move || {
        let incoming = query();
        if *flow.peek().query() != incoming {
            let (restored, initial) = SearchFlow::restore(incoming);
            flow.set(restored);
            if let Some(request) = initial {
                run(request);
            }
        }
    });

    let sync_url = move || {
        let current = flow.peek().query().clone();
        nav.push(Route::Search { query: current });
    };

    let mut on_submit = move || {
        let request = flow.write().submit();
        sync_url();
        run(request);
    };

    let mut on_category = move |category: String| {
        let request = flow.write().select_category(category);
        sync_url();
        run(request);
    };

    let mut on_suggestion = move |term: &str| {
        flow.write().set_text(term);
        let request = flow.write().submit();
        sync_url();
        run(request);
    };

    let on_clear = move |_| {
        flow.write().clear();
        nav.push(Route::Search {
            query: SearchQuery::default(),
        });
    };

    let phase = flow.read().phase();
    let current = flow.read().query().clone();
    let results = flow.read().results().to_vec();
    let header = current.describe_results(results.len());
    let select_value = current.category_filter().unwrap_or(ALL_CATEGORIES).to_string();
    let searching = phase == SearchPhase::Loading;

    let card = theme.card();
    let input = theme.input();
    let label = theme.label();
    let muted = theme.muted();
    let primary_btn = theme.button_primary();
    let outline_btn = theme.button_outline();

    let body = match phase {
        SearchPhase::Idle => rsx! {
            div {
                style: "{card} text-align: center; padding: 40px;",
                h3 { style: "margin: 0 0 8px 0;", "Start Your Discovery" }
                p { style: "{muted} margin: 0 0 20px 0;",
                    "Try one of these to see what the community is sharing"
                }
                div {
                    style: "display: flex; gap: 10px; justify-content: center;",
                    for term in SUGGESTED_TERMS {
                        button {
                            style: theme.chip(false),
                            onclick: move |_| on_suggestion(term),
                            "{term}"
                        }
                    }
                }
            }
        },
        SearchPhase::Loading => rsx! {
            div {
                style: "{card} text-align: center; padding: 40px;",
                p { style: "{muted}", "Searching stories..." }
            }
        },
        SearchPhase::Loaded => rsx! {
            div {
                div {
                    style: "border-bottom: 1px solid {theme.border}; padding-bottom: 12px; margin-bottom: 20px;",
                    h2 { style: "margin: 0 0 4px 0;", "Search Results" }
                    p { style: "{muted} margin: 0;", "{header}" }
                }

                if results.is_empty() {
                    div {
                        style: "{card} text-align: center; padding: 40px;",
                        h3 { style: "margin: 0 0 8px 0;", "No Stories Found" }
                        p { style: "{muted} margin: 0 0 20px 0;",
                            "Try different keywords or explore our categories."
                        }
                        div {
                            style: "display: flex; gap: 12px; justify-content: center;",
                            button {
                                style: "{outline_btn}",
                                onclick: on_clear,
                                "Clear Search"
                            }
                            Link {
                                to: Route::Submit {},
                                style: "{primary_btn} text-decoration: none;",
                                "Share Your Story"
                            }
                        }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px;",
                        for story in results.clone() {
                            StoryCard { key: "{story.id}", story }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 8px 0; font-size: 34px;", "Discover Stories" }
                p { style: "{muted} font-size: 17px;",
                    "Search impact stories from the whole community"
                }
            }

            div {
                style: "{card}",
                form {
                    prevent_default: "onsubmit",
                    onsubmit: move |_| on_submit(),
                    style: "display: grid; grid-template-columns: 2fr 1fr auto; gap: 12px; align-items: end;",

                    div {
                        label { style: "{label}", "Search Stories" }
                        input {
                            style: "{input}",
                            value: "{current.q}",
                            placeholder: "Search by keywords, people, places...",
                            oninput: move |evt| flow.write().set_text(evt.value()),
                        }
                    }

                    div {
                        label { style: "{label}", "Category" }
                        select {
                            style: "{input}",
                            value: "{select_value}",
                            onchange: move |evt| on_category(evt.value()),
                            option { value: "{ALL_CATEGORIES}", "{ALL_CATEGORIES}" }
                            for name in CATEGORIES {
                                option { value: "{name}", "{name}" }
                            }
                        }
                    }

                    button {
                        style: "{primary_btn}",
                        r#type: "submit",
                        disabled: searching,
                        if searching { "Searching..." } else { "Search" }
                    }
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 10px; justify-content: center;",
                for name in CATEGORIES {
                    button {
                        style: theme.chip(current.category == name),
                        onclick: move |_| on_category(name.to_string()),
                        "{name}"
                    }
                }
            }

            {body}
        }
    }
}
