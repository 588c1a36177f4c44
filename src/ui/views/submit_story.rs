use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::domain::story::Story;
use crate::domain::submission::StorySubmission;
use crate::ui::components::StoryForm;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_theme};

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Pending,
    Accepted(Story),
    Rejected(String),
}

/// Story submission page: guidelines, the form, and the submission
/// status banner.
#[component]
pub fn Submit() -> Element {
    let api_handle = use_api();
    let api = use_hook(|| CopyValue::new(api_handle));
    let theme = use_theme();
    let mut status = use_signal(|| None::<SubmitStatus>);

    let on_submit = move |submission: StorySubmission| {
        if let Err(err) = submission.validate() {
            status.set(Some(SubmitStatus::Rejected(err.to_string())));
            return;
        }
        status.set(Some(SubmitStatus::Pending));
        let api = api.read().clone();
        spawn(async move {
            match api.submit_story(&submission).await {
                Ok(story) => status.set(Some(SubmitStatus::Accepted(story))),
                Err(err) => {
                    warn!(error = %err, "story submission failed");
                    status.set(Some(SubmitStatus::Rejected(
                        "Submission failed. Please try again or contact support.".to_string(),
                    )));
                }
            }
        });
    };

    let card = theme.card();
    let muted = theme.muted();
    let outline_btn = theme.button_outline();
    let primary_btn = theme.button_primary();

    let current = status.read().clone();
    let busy = current == Some(SubmitStatus::Pending);
    let accepted = match &current {
        Some(SubmitStatus::Accepted(story)) => Some(story.clone()),
        _ => None,
    };
    let rejected = match &current {
        Some(SubmitStatus::Rejected(message)) => Some(message.clone()),
        _ => None,
    };
    let show_form = accepted.is_none();

    let success_banner = accepted.map(|story| {
        rsx! {
            div {
                style: "{card} border-left: 4px solid {theme.success};",
                h3 { style: "margin: 0 0 6px 0; color: {theme.success};",
                    "Story Submitted Successfully!"
                }
                p { style: "margin: 0 0 16px 0;",
                    "Your story \"{story.title}\" has been submitted for review."
                }
                div {
                    style: "display: flex; gap: 12px;",
                    button {
                        style: "{outline_btn}",
                        onclick: move |_| status.set(None),
                        "Submit Another Story"
                    }
                    Link {
                        to: Route::Search { query: Default::default() },
                        style: "{primary_btn} text-decoration: none;",
                        "Browse Stories"
                    }
                }
            }
        }
    });

    let error_banner = rejected.map(|message| {
        rsx! {
            div {
                style: "{card} border-left: 4px solid {theme.danger};",
                h3 { style: "margin: 0 0 6px 0; color: {theme.danger};", "Submission Failed" }
                p { style: "margin: 0 0 12px 0;", "{message}" }
                button {
                    style: "{outline_btn}",
                    onclick: move |_| status.set(None),
                    "Try Again"
                }
            }
        }
    });

    rsx! {
        div {
            style: "max-width: 760px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 8px 0; font-size: 34px;", "Share Your Impact Story" }
                p { style: "{muted} font-size: 17px;",
                    "Share the experiences and insights that are making a difference"
                }
            }

            {success_banner}

            if show_form {
                {error_banner}

                if busy {
                    div {
                        style: "{card}",
                        p { style: "margin: 0;", "Submitting your story..." }
                    }
                }

                div {
                    style: "{card}",
                    h2 { style: "margin: 0 0 12px 0;", "Submission Guidelines" }
                    ul {
                        style: "{muted} margin: 0; padding-left: 20px; line-height: 1.8;",
                        li { "Clear impact on communities or governance" }
                        li { "Specific examples and measurable outcomes" }
                        li { "Video: MP4 · Audio: MP3, WAV, M4A · Documents: PDF, DOCX" }
                        li { "Review within 48 hours" }
                    }
                }

                div {
                    style: "{card}",
                    StoryForm { on_submit, busy }
                }
            }
        }
    }
}
