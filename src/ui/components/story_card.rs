use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::story::Story;
use crate::ui::router::Route;
use crate::ui::state::use_theme;

/// Summary card used by the home grid, search results, and anywhere
/// else a story is listed.
#[component]
pub fn StoryCard(story: Story) -> Element {
    let theme = use_theme();
    let card = theme.card();
    let tag = theme.tag();
    let muted = theme.muted();

    let date_line = story
        .display_date()
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_default();
    let author = story.display_author().to_string();
    let teaser = story.teaser(160);
    let category = story.category.clone().unwrap_or_default();

    rsx! {
        article {
            style: "{card} display: flex; flex-direction: column; gap: 10px;",

            h3 {
                style: "margin: 0; font-size: 19px;",
                Link {
                    to: Route::StoryDetail { id: story.id },
                    style: "color: {theme.text}; text-decoration: none;",
                    "{story.title}"
                }
            }

            div {
                style: "{muted} display: flex; gap: 14px;",
                if !date_line.is_empty() {
                    span { "{date_line}" }
                }
                span { "{author}" }
            }

            p { style: "margin: 0; line-height: 1.5;", "{teaser}" }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-top: auto;",

                div {
                    style: "display: flex; gap: 8px;",
                    if !category.is_empty() {
                        span { style: "{tag}", "{category}" }
                    }
                    if story.has_media() {
                        span { style: "{tag}", "Media" }
                    }
                }

                Link {
                    to: Route::StoryDetail { id: story.id },
                    style: "color: {theme.accent}; font-weight: 600; font-size: 14px; text-decoration: none;",
                    "Read Story →"
                }
            }
        }
    }
}
