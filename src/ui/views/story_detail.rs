use dioxus::prelude::*;
use dioxus_router::prelude::*;
use futures::future;
use tracing::warn;

use crate::domain::story::{Story, StoryId};
use crate::ui::components::StoryCard;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_theme};

/// A single story with its related stories in the sidebar. The story
/// and its relations load concurrently; either failing degrades softly.
#[component]
pub fn StoryDetail(id: ReadOnlySignal<StoryId>) -> Element {
    let api_handle = use_api();
    let api = use_hook(|| CopyValue::new(api_handle));
    let theme = use_theme();
    let mut story = use_signal(|| None::<Story>);
    let mut related = use_signal(Vec::<Story>::new);
    let mut loading = use_signal(|| true);

    // Re-runs when the id changes, e.g. when a related story is opened
    // from this very page.
    use_effect(move || {
        let story_id = id();
        let api = api.read().clone();
        spawn(async move {
            loading.set(true);
            let (story_result, related_result) =
                future::join(api.get_story(story_id), api.related_stories(story_id)).await;

            match story_result {
                Ok(loaded) => story.set(Some(loaded)),
                Err(err) => {
                    if !err.is_not_found() {
                        warn!(error = %err, story_id, "failed to load story");
                    }
                    story.set(None);
                }
            }
            match related_result {
                Ok(stories) => related.set(stories),
                Err(err) => {
                    warn!(error = %err, story_id, "failed to load related stories");
                    related.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    let card = theme.card();
    let tag = theme.tag();
    let muted = theme.muted();
    let primary_btn = theme.button_primary();

    if loading() {
        return rsx! {
            div {
                style: "{card} padding: 40px;",
                div { style: "background: {theme.border}; height: 28px; width: 60%; border-radius: 4px; margin-bottom: 16px;" }
                div { style: "background: {theme.border}; height: 14px; width: 40%; border-radius: 4px; margin-bottom: 24px;" }
                div { style: "background: {theme.border}; height: 200px; width: 100%; border-radius: 8px;" }
            }
        };
    }

    let Some(current) = story.read().clone() else {
        return rsx! {
            div {
                style: "{card} text-align: center; padding: 48px;",
                h3 { style: "margin: 0 0 8px 0;", "Story Not Found" }
                p { style: "{muted} margin: 0 0 20px 0;",
                    "The story you're looking for might have been moved or doesn't exist."
                }
                Link {
                    to: Route::Search { query: Default::default() },
                    style: "{primary_btn} text-decoration: none;",
                    "Browse All Stories"
                }
            }
        };
    };

    let date_line = current
        .display_date()
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_default();
    let author = current.display_author().to_string();
    let category = current.category.clone().unwrap_or_default();
    let media_url = current.media_url.clone().unwrap_or_default();
    let transcript = current.transcript.clone().unwrap_or_default();
    let tags: Vec<String> = current.tag_list().iter().map(|t| t.to_string()).collect();
    let related_top: Vec<Story> = related.read().iter().take(3).cloned().collect();
    let more_related = related.read().len().saturating_sub(3);

    rsx! {
        div {
            // Breadcrumb
            nav {
                style: "{muted} display: flex; gap: 8px; margin-bottom: 20px;",
                Link { to: Route::Home {}, style: "color: inherit;", "Home" }
                span { "›" }
                Link {
                    to: Route::Search { query: Default::default() },
                    style: "color: inherit;",
                    "Stories"
                }
                span { "›" }
                span { style: "color: {theme.text}; font-weight: 600;", "{current.title}" }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px; align-items: start;",

                // Main story content
                article {
                    style: "{card}",

                    div {
                        style: "border-bottom: 1px solid {theme.border}; padding-bottom: 16px; margin-bottom: 20px;",
                        h1 { style: "margin: 0 0 12px 0; font-size: 30px;", "{current.title}" }
                        div {
                            style: "{muted} display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                            span { "{author}" }
                            if !date_line.is_empty() {
                                span { "{date_line}" }
                            }
                            if !category.is_empty() {
                                span { style: "{tag}", "{category}" }
                            }
                        }
                    }

                    if !media_url.is_empty() {
                        div {
                            style: "margin-bottom: 20px;",
                            video {
                                style: "width: 100%; border-radius: 8px;",
                                controls: true,
                                src: "{media_url}",
                            }
                        }
                    }

                    p { style: "font-size: 17px; line-height: 1.6; margin: 0;", "{current.description}" }

                    if !transcript.is_empty() {
                        details {
                            style: "margin-top: 24px; border-top: 1px solid {theme.border}; padding-top: 16px;",
                            summary { style: "cursor: pointer; font-weight: 600;", "Full Transcript" }
                            pre {
                                style: "white-space: pre-wrap; font-family: inherit; {muted} \
                                        background: {theme.background}; border-radius: 8px; padding: 16px;",
                                "{transcript}"
                            }
                        }
                    }

                    if !tags.is_empty() {
                        div {
                            style: "margin-top: 24px; border-top: 1px solid {theme.border}; padding-top: 16px;",
                            h3 { style: "margin: 0 0 10px 0; font-size: 14px;", "Related Topics" }
                            div {
                                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                                for t in tags {
                                    span { style: "{tag}", "{t}" }
                                }
                            }
                        }
                    }
                }

                // Sidebar
                aside {
                    style: "display: flex; flex-direction: column; gap: 20px;",

                    div {
                        style: "{card}",
                        h3 { style: "margin: 0 0 12px 0;", "Story Contributor" }
                        div { style: "font-weight: 600;", "{author}" }
                        p { style: "{muted} margin: 8px 0 0 0;",
                            "Contributing to transformation through shared experiences."
                        }
                    }

                    div {
                        style: "{card}",
                        h3 { style: "margin: 0 0 12px 0;", "Connected Stories" }

                        if related_top.is_empty() {
                            p { style: "{muted} margin: 0;", "No connected stories found yet." }
                        } else {
                            div {
                                style: "display: flex; flex-direction: column; gap: 12px;",
                                for story in related_top {
                                    StoryCard { key: "{story.id}", story }
                                }
                                if more_related > 0 {
                                    Link {
                                        to: Route::Search { query: Default::default() },
                                        style: "color: {theme.accent}; font-size: 14px; font-weight: 600;",
                                        "View {more_related} more connected stories →"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
