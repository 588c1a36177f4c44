use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::domain::story::Story;
use crate::services::StoryFilters;
use crate::ui::components::StoryCard;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_theme};

const RECENT_LIMIT: usize = 12;

/// Landing page: hero, headline numbers, category shortcuts, and the
/// latest stories.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let theme = use_theme();
    let mut stories = use_signal(Vec::<Story>::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            let filters = StoryFilters {
                limit: Some(RECENT_LIMIT),
                ..StoryFilters::default()
            };
            match api.list_stories(&filters).await {
                Ok(list) => stories.set(list),
                Err(err) => {
                    // Degrade to an empty grid; the page still renders.
                    warn!(error = %err, "failed to load recent stories");
                    stories.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    let stats = [
        ("Stories Shared", "45+"),
        ("Counties Covered", "47"),
        ("Contributors Featured", "30+"),
        ("Policy Areas", "12+"),
    ];

    let category_cards = [
        ("Alumni Impact", "🎓"),
        ("Policy in Action", "📊"),
        ("Research Brief", "🔬"),
        ("From the Classroom", "📚"),
    ];

    let card = theme.card();
    let muted = theme.muted();
    let primary_btn = theme.button_primary();
    let outline_btn = theme.button_outline();

    let recent = stories.read().iter().take(6).cloned().collect::<Vec<_>>();
    let is_loading = loading();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 48px;",

            // Hero
            section {
                style: "background: linear-gradient(135deg, {theme.primary}, {theme.accent}); \
                        color: #ffffff; border-radius: 16px; padding: 64px 32px; text-align: center;",
                h1 { style: "margin: 0 0 16px 0; font-size: 42px; line-height: 1.2;",
                    "Empowering Public Service Through Shared Stories"
                }
                p { style: "margin: 0 auto 32px auto; max-width: 640px; font-size: 19px; opacity: 0.9;",
                    "Discover multimedia narratives from a community of leaders, showcasing \
                     innovation, policy impact, and transformation."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::Submit {},
                        style: "{primary_btn} text-decoration: none;",
                        "Share Your Story"
                    }
                    Link {
                        to: Route::Search { query: Default::default() },
                        style: "{outline_btn} color: #ffffff; text-decoration: none;",
                        "Explore Stories"
                    }
                }
            }

            // Headline numbers
            section {
                div {
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px;",
                    for (label, value) in stats {
                        div {
                            style: "{card} text-align: center;",
                            div { style: "font-size: 30px; font-weight: 700; color: {theme.primary};",
                                "{value}"
                            }
                            div { style: "{muted}", "{label}" }
                        }
                    }
                }
            }

            // Category shortcuts
            section {
                h2 { style: "margin: 0 0 6px 0; text-align: center;", "Explore by Impact Area" }
                p { style: "{muted} text-align: center; margin: 0 0 24px 0;",
                    "Stories organized by the areas driving change"
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px;",
                    for (name, icon) in category_cards {
                        Link {
                            to: Route::search_for_category(name),
                            style: "{card} text-align: center; text-decoration: none; color: {theme.text};",
                            div { style: "font-size: 36px; margin-bottom: 10px;", "{icon}" }
                            h3 { style: "margin: 0 0 8px 0;", "{name}" }
                            div { style: "color: {theme.accent}; font-weight: 600; font-size: 14px;",
                                "View Stories →"
                            }
                        }
                    }
                }
            }

            // Latest stories
            section {
                div {
                    style: "display: flex; align-items: end; justify-content: space-between; margin-bottom: 20px;",
                    div {
                        h2 { style: "margin: 0 0 4px 0;", "Latest Impact Stories" }
                        p { style: "{muted} margin: 0;", "Recent narratives from the community" }
                    }
                    Link {
                        to: Route::Search { query: Default::default() },
                        style: "{outline_btn} text-decoration: none;",
                        "View All Stories"
                    }
                }

                if is_loading {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px;",
                        for i in 0..6 {
                            div {
                                key: "{i}",
                                style: "{card} min-height: 160px; opacity: 0.4;",
                                div { style: "background: {theme.border}; height: 20px; width: 70%; border-radius: 4px; margin-bottom: 12px;" }
                                div { style: "background: {theme.border}; height: 12px; width: 100%; border-radius: 4px; margin-bottom: 8px;" }
                                div { style: "background: {theme.border}; height: 12px; width: 60%; border-radius: 4px;" }
                            }
                        }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px;",
                        for story in recent {
                            StoryCard { key: "{story.id}", story }
                        }
                    }
                }
            }
        }
    }
}
