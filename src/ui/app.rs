use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::session::Session;
use crate::services::{HttpStoryApi, StoryApi};
use crate::ui::components::NavBar;
use crate::ui::router::Route;
use crate::ui::state::use_theme;
use crate::ui::theme::Theme;

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        AppConfig::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "invalid configuration, falling back to defaults");
            AppConfig::default()
        })
    });
    use_context_provider(|| -> Arc<dyn StoryApi> { Arc::new(HttpStoryApi::new(&config)) });
    use_context_provider(|| Signal::new(Session::default()));
    use_context_provider(Theme::default);

    rsx! {
        Router::<Route> {}
    }
}

/// Page chrome shared by every route: navigation bar on top, the routed
/// view in a centered column below.
#[component]
pub fn Shell() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            style: "min-height: 100vh; background: {theme.background}; color: {theme.text}; \
                    font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;",

            NavBar {}

            main {
                style: "max-width: 1100px; margin: 0 auto; padding: 32px 20px;",
                Outlet::<Route> {}
            }
        }
    }
}
