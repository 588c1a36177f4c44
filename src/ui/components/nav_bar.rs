use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::search::SearchQuery;
use crate::ui::router::Route;
use crate::ui::state::{use_session, use_theme};

#[component]
pub fn NavBar() -> Element {
    let mut session = use_session();
    let theme = use_theme();
    let current: Route = use_route();

    let links = [
        (Route::Home {}, "Home"),
        (Route::Search { query: SearchQuery::default() }, "Discover"),
        (Route::Pathways {}, "Learn"),
        (Route::Pulse {}, "Pulse"),
        (Route::Submit {}, "Share Story"),
    ];

    let signed_in = session.read().is_authenticated();
    let is_admin = session.read().is_admin();
    let outline = theme.button_outline();

    rsx! {
        header {
            style: "background: {theme.primary}; color: #ffffff; padding: 0 24px;",

            div {
                style: "max-width: 1100px; margin: 0 auto; display: flex; align-items: center; \
                        justify-content: space-between; height: 64px;",

                Link {
                    to: Route::Home {},
                    style: "color: #ffffff; text-decoration: none;",
                    div {
                        div { style: "font-size: 19px; font-weight: 700;", "Storyweave" }
                        div { style: "font-size: 11px; opacity: 0.8; margin-top: -2px;",
                            "Digital Narratives Platform"
                        }
                    }
                }

                nav {
                    style: "display: flex; align-items: center; gap: 18px;",

                    for (route, label) in links {
                        NavLink {
                            active: current.same_page(&route),
                            route,
                            label,
                        }
                    }

                    if is_admin {
                        NavLink {
                            active: current.same_page(&Route::Admin {}),
                            route: Route::Admin {},
                            label: "Admin",
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 10px;",

                    if signed_in {
                        Link {
                            to: Route::Dashboard {},
                            style: "{outline} color: #ffffff; text-decoration: none;",
                            "Dashboard"
                        }
                        button {
                            style: "{outline}",
                            onclick: move |_| session.write().logout(),
                            "Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            style: "{outline} text-decoration: none;",
                            "Login"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(route: Route, label: &'static str, active: bool) -> Element {
    let theme = use_theme();
    let style = if active {
        format!(
            "color: {accent}; border-bottom: 2px solid {accent}; padding: 6px 2px; \
             font-size: 14px; font-weight: 600; text-decoration: none;",
            accent = theme.accent
        )
    } else {
        "color: #ffffff; padding: 6px 2px; font-size: 14px; text-decoration: none;".to_string()
    };

    rsx! {
        Link { to: route, style: "{style}", "{label}" }
    }
}
