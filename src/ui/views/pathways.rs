use dioxus::prelude::*;

use crate::domain::fixtures::{self, Difficulty, Pathway};
use crate::ui::state::use_theme;

/// Guided story sequences. Content and progress are placeholders until
/// pathways are served by the backend.
#[component]
pub fn Pathways() -> Element {
    let theme = use_theme();
    let mut selected = use_signal(|| None::<usize>);

    let pathways = fixtures::pathways();
    let started = pathways.iter().filter(|p| p.completed > 0).count();
    let total = pathways.len();

    let card = theme.card();
    let muted = theme.muted();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 8px 0; font-size: 34px;", "Learning Pathways" }
                p { style: "{muted} font-size: 17px;",
                    "Curated story sequences, from first steps to deep dives"
                }
                p { style: "{muted}", "{started} of {total} pathways started" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px;",
                for (index, pathway) in pathways.into_iter().enumerate() {
                    PathwayCard {
                        key: "{index}",
                        pathway,
                        expanded: selected() == Some(index),
                        on_toggle: move |_| {
                            let next = if selected() == Some(index) { None } else { Some(index) };
                            selected.set(next);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn PathwayCard(pathway: Pathway, expanded: bool, on_toggle: EventHandler<()>) -> Element {
    let theme = use_theme();
    let card = theme.card();
    let muted = theme.muted();
    let outline_btn = theme.button_outline();

    let difficulty_color = match pathway.difficulty {
        Difficulty::Beginner => theme.success,
        Difficulty::Intermediate => theme.accent,
        Difficulty::Advanced => theme.danger,
    };
    let difficulty = pathway.difficulty.label();
    let steps_total = pathway.steps.len();
    let completed = pathway.completed.min(steps_total);
    let toggle_label = if expanded { "Hide Steps" } else { "View Steps" };

    rsx! {
        div {
            style: "{card} display: flex; flex-direction: column; gap: 12px;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h3 { style: "margin: 0;", "{pathway.title}" }
                span {
                    style: "color: {difficulty_color}; font-size: 13px; font-weight: 600;",
                    "{difficulty}"
                }
            }

            p { style: "{muted} margin: 0;", "{pathway.description}" }

            div { style: "{muted}", "{completed} of {steps_total} steps completed" }
            div {
                style: "height: 8px; background: {theme.border}; border-radius: 4px; overflow: hidden;",
                div {
                    style: format!(
                        "height: 100%; background: {}; width: {}%;",
                        theme.primary,
                        if steps_total > 0 { completed * 100 / steps_total } else { 0 }
                    ),
                }
            }

            if expanded {
                ol {
                    style: "margin: 0; padding-left: 20px; line-height: 1.9;",
                    for step in pathway.steps.iter() {
                        li {
                            span { style: "margin-right: 6px;", {step.media.icon()} }
                            "{step.title}"
                        }
                    }
                }
            }

            div {
                button {
                    style: "{outline_btn}",
                    onclick: move |_| on_toggle.call(()),
                    "{toggle_label}"
                }
            }
        }
    }
}
