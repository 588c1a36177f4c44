use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::domain::analytics::AnalyticsSummary;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_session, use_theme};

/// Platform metrics for staff. Gated on the session's admin flag, which
/// is display gating only.
#[component]
pub fn Admin() -> Element {
    let session = use_session();
    let api_handle = use_api();
    let api = use_hook(|| CopyValue::new(api_handle));
    let theme = use_theme();
    let nav = use_navigator();
    let mut summary = use_signal(|| None::<AnalyticsSummary>);

    use_effect(move || {
        if !session.read().is_admin() {
            nav.replace(Route::Login {});
        }
    });

    use_effect(move || {
        let api = api.read().clone();
        spawn(async move {
            match api.analytics_summary().await {
                Ok(metrics) => summary.set(Some(metrics)),
                Err(err) => {
                    // Tiles fall back to dashes.
                    warn!(error = %err, "failed to load analytics summary");
                    summary.set(None);
                }
            }
        });
    });

    if !session.read().is_admin() {
        return rsx! { div {} };
    }

    let card = theme.card();
    let muted = theme.muted();

    let metrics = summary.read().clone();
    let total_stories = metrics
        .as_ref()
        .map(|m| m.total_stories.to_string())
        .unwrap_or_else(|| "—".to_string());
    let total_views = metrics
        .as_ref()
        .map(|m| m.total_views.to_string())
        .unwrap_or_else(|| "—".to_string());
    let top_topic = metrics
        .as_ref()
        .and_then(|m| m.top_topic.clone())
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                h1 { style: "margin: 0 0 4px 0;", "Platform Overview" }
                p { style: "{muted} margin: 0;", "What the community has published so far" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px;",

                div {
                    style: "{card} text-align: center;",
                    div { style: "font-size: 34px; font-weight: 700; color: {theme.primary};",
                        "{total_stories}"
                    }
                    div { style: "{muted}", "Total Stories" }
                }

                div {
                    style: "{card} text-align: center;",
                    div { style: "font-size: 34px; font-weight: 700; color: {theme.primary};",
                        "{total_views}"
                    }
                    div { style: "{muted}", "Total Views" }
                }

                div {
                    style: "{card} text-align: center;",
                    div { style: "font-size: 34px; font-weight: 700; color: {theme.accent};",
                        "{top_topic}"
                    }
                    div { style: "{muted}", "Top Topic" }
                }
            }
        }
    }
}
