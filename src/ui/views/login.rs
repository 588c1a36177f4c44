use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::session::{mock_admin_grant, SessionUser, STAFF_EMAIL_SUFFIX};
use crate::ui::router::Route;
use crate::ui::state::{use_session, use_theme};

const ROLES: [&str; 5] = [
    "Faculty Member",
    "Staff",
    "Alumni",
    "Partner Organization",
    "Other",
];

/// Mock sign-in: records who is using the app for the rest of the page
/// session. No credentials are checked anywhere.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let theme = use_theme();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(String::new);

    // Already signed in: nothing to do here.
    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let on_login = move |_| {
        let trimmed_name = name().trim().to_string();
        let trimmed_email = email().trim().to_string();
        if trimmed_name.is_empty() || trimmed_email.is_empty() {
            return;
        }
        let is_admin = mock_admin_grant(&trimmed_email);
        session.write().login(SessionUser {
            name: trimmed_name,
            email: trimmed_email,
            role: Some(role()).filter(|value| !value.is_empty()),
            is_admin,
        });
        nav.replace(Route::Home {});
    };

    let card = theme.card();
    let input = theme.input();
    let label = theme.label();
    let muted = theme.muted();
    let primary_btn = theme.button_primary();

    rsx! {
        div {
            style: "max-width: 440px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 8px 0; font-size: 32px;", "Welcome to Storyweave" }
                p { style: "{muted}", "Join the knowledge network and share your stories" }
            }

            div {
                style: "{card}",
                form {
                    prevent_default: "onsubmit",
                    onsubmit: on_login,
                    style: "display: flex; flex-direction: column; gap: 16px;",

                    div {
                        label { style: "{label}", "Full Name *" }
                        input {
                            style: "{input}",
                            value: "{name}",
                            placeholder: "Enter your full name",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    div {
                        label { style: "{label}", "E-mail Address *" }
                        input {
                            style: "{input}",
                            r#type: "email",
                            value: "{email}",
                            placeholder: "name@organization.org",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        div { style: "{muted} margin-top: 6px; font-size: 13px;",
                            "Staff addresses ({STAFF_EMAIL_SUFFIX}) see the admin dashboard"
                        }
                    }

                    div {
                        label { style: "{label}", "Your Role" }
                        select {
                            style: "{input}",
                            value: "{role}",
                            onchange: move |evt| role.set(evt.value()),
                            option { value: "", "Select your role (optional)" }
                            for item in ROLES {
                                option { value: "{item}", "{item}" }
                            }
                        }
                    }

                    button {
                        style: "{primary_btn}",
                        r#type: "submit",
                        "Access Platform"
                    }
                }
            }
        }
    }
}
