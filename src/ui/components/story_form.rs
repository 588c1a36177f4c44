use dioxus::prelude::*;
use tracing::warn;

use crate::domain::search::CATEGORIES;
use crate::domain::submission::{MediaAttachment, StorySubmission};
use crate::ui::state::use_theme;

/// Controlled submission form. Field state lives here; the parent owns
/// the network round trip through `on_submit`.
#[component]
pub fn StoryForm(on_submit: EventHandler<StorySubmission>, busy: bool) -> Element {
    let theme = use_theme();
    let input = theme.input();
    let label = theme.label();
    let muted = theme.muted();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| CATEGORIES[0].to_string());
    let mut author_name = use_signal(String::new);
    let mut author_email = use_signal(String::new);
    let mut transcript = use_signal(String::new);
    let mut media = use_signal(|| None::<MediaAttachment>);

    let attached = media
        .read()
        .as_ref()
        .map(|file| file.file_name.clone())
        .unwrap_or_default();

    let submit = move |_| {
        on_submit.call(StorySubmission {
            title: title(),
            description: description(),
            category: category(),
            author_name: author_name(),
            author_email: author_email(),
            transcript: transcript(),
            media: media(),
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",

            div {
                label { style: "{label}", "Story Title *" }
                input {
                    style: "{input}",
                    value: "{title}",
                    placeholder: "A headline for your story",
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            div {
                label { style: "{label}", "Description *" }
                textarea {
                    style: "{input} min-height: 120px; resize: vertical;",
                    value: "{description}",
                    placeholder: "What happened, who was involved, and what changed?",
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",

                div {
                    label { style: "{label}", "Category" }
                    select {
                        style: "{input}",
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        for name in CATEGORIES {
                            option { value: "{name}", "{name}" }
                        }
                    }
                }

                div {
                    label { style: "{label}", "Media File" }
                    input {
                        style: "{input}",
                        r#type: "file",
                        accept: ".mp4,.mp3,.wav,.m4a,.pdf,.docx",
                        onchange: move |evt| {
                            if let Some(file_engine) = evt.files() {
                                spawn(async move {
                                    let names = file_engine.files();
                                    let Some(name) = names.first().cloned() else {
                                        media.set(None);
                                        return;
                                    };
                                    match file_engine.read_file(&name).await {
                                        Some(bytes) => media.set(Some(MediaAttachment {
                                            file_name: name,
                                            bytes,
                                        })),
                                        None => {
                                            warn!(file = %name, "could not read selected file");
                                            media.set(None);
                                        }
                                    }
                                });
                            }
                        },
                    }
                    if !attached.is_empty() {
                        div { style: "{muted} margin-top: 4px;", "Attached: {attached}" }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",

                div {
                    label { style: "{label}", "Your Name *" }
                    input {
                        style: "{input}",
                        value: "{author_name}",
                        oninput: move |evt| author_name.set(evt.value()),
                    }
                }

                div {
                    label { style: "{label}", "Your E-mail *" }
                    input {
                        style: "{input}",
                        r#type: "email",
                        value: "{author_email}",
                        oninput: move |evt| author_email.set(evt.value()),
                    }
                }
            }

            div {
                label { style: "{label}", "Transcript" }
                textarea {
                    style: "{input} min-height: 100px; resize: vertical;",
                    value: "{transcript}",
                    placeholder: "Optional transcript of the attached media",
                    oninput: move |evt| transcript.set(evt.value()),
                }
            }

            div {
                button {
                    style: theme.button_primary(),
                    disabled: busy,
                    onclick: submit,
                    if busy { "Submitting..." } else { "Submit Story" }
                }
            }
        }
    }
}
