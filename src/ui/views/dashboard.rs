use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::fixtures;
use crate::ui::router::Route;
use crate::ui::state::{use_session, use_theme};

/// Contributor dashboard. The numbers here are display placeholders;
/// there is no per-user aggregation backend yet.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let theme = use_theme();
    let nav = use_navigator();

    use_effect(move || {
        if !session.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    let Some(user) = session.read().user().cloned() else {
        return rsx! { div {} };
    };

    let card = theme.card();
    let muted = theme.muted();

    let stats = [
        ("Stories Shared", "3"),
        ("Total Listens", "182"),
        ("Counties Reached", "5"),
        ("Contribution Points", "165"),
    ];
    let role = user.role.clone().unwrap_or_else(|| "Contributor".to_string());
    let initial = user.name.chars().next().unwrap_or('S').to_ascii_uppercase();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "{card} display: flex; align-items: center; gap: 16px;",
                div {
                    style: "height: 56px; width: 56px; border-radius: 50%; background: {theme.primary}; \
                            color: #ffffff; display: flex; align-items: center; justify-content: center; \
                            font-size: 24px; font-weight: 700;",
                    "{initial}"
                }
                div {
                    h1 { style: "margin: 0; font-size: 24px;", "Welcome back, {user.name}" }
                    p { style: "{muted} margin: 4px 0 0 0;", "{role} · {user.email}" }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px;",
                for (label, value) in stats {
                    div {
                        style: "{card} text-align: center;",
                        div { style: "font-size: 28px; font-weight: 700; color: {theme.primary};", "{value}" }
                        div { style: "{muted}", "{label}" }
                    }
                }
            }

            div {
                style: "{card}",
                h2 { style: "margin: 0 0 16px 0;", "Badges" }
                div {
                    style: "display: flex; gap: 16px;",
                    for (badge, icon) in fixtures::contributor_badges() {
                        div {
                            style: "text-align: center;",
                            div { style: "font-size: 32px;", "{icon}" }
                            div { style: "{muted}", "{badge}" }
                        }
                    }
                }
            }

            div {
                style: "{card}",
                h2 { style: "margin: 0 0 16px 0;", "Recent Activity" }
                ul {
                    style: "{muted} margin: 0; padding-left: 20px; line-height: 1.9;",
                    for entry in fixtures::recent_activity() {
                        li { "{entry}" }
                    }
                }
            }
        }
    }
}
