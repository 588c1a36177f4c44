use dioxus::prelude::*;

use crate::domain::fixtures;
use crate::ui::state::use_theme;

/// Engagement dashboard. Everything shown here is placeholder display
/// data, not computed metrics.
#[component]
pub fn Pulse() -> Element {
    let theme = use_theme();
    let card = theme.card();
    let muted = theme.muted();
    let tag = theme.tag();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 8px 0; font-size: 34px;", "Story Pulse" }
                p { style: "{muted} font-size: 17px;", "How the community is engaging right now" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px;",
                for stat in fixtures::engagement_stats() {
                    div {
                        style: "{card} text-align: center;",
                        div { style: "font-size: 28px; font-weight: 700; color: {theme.primary};",
                            "{stat.value}"
                        }
                        div { style: "{muted}", "{stat.label}" }
                        div { style: "color: {theme.accent}; font-size: 13px; margin-top: 4px;",
                            {stat.trend.arrow()}
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 20px;",

                div {
                    style: "{card}",
                    h2 { style: "margin: 0 0 16px 0;", "Hot Topics" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px;",
                        for topic in fixtures::hot_topics() {
                            span { style: "{tag}", "{topic}" }
                        }
                    }
                }

                div {
                    style: "{card}",
                    h2 { style: "margin: 0 0 16px 0;", "Regional Activity" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        for (region, level) in fixtures::regional_activity() {
                            div {
                                div {
                                    style: "display: flex; justify-content: space-between; margin-bottom: 4px;",
                                    span { style: "font-size: 14px;", "{region}" }
                                    span { style: "{muted}", "{level}%" }
                                }
                                div {
                                    style: "height: 8px; background: {theme.border}; border-radius: 4px; overflow: hidden;",
                                    div {
                                        style: "height: 100%; background: {theme.primary}; width: {level}%;",
                                    }
                                }
                            }
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
