use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::router::Route;
use crate::ui::state::use_theme;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let theme = use_theme();
    let card = theme.card();
    let muted = theme.muted();
    let primary_btn = theme.button_primary();
    let path = segments.join("/");

    rsx! {
        div {
            style: "{card} text-align: center; padding: 48px; max-width: 520px; margin: 48px auto;",
            h1 { style: "margin: 0 0 8px 0;", "Page Not Found" }
            p { style: "{muted} margin: 0 0 24px 0;",
                "There is nothing at \"/{path}\"."
            }
            Link {
                to: Route::Home {},
                style: "{primary_btn} text-decoration: none;",
                "Return Home"
            }
        }
    }
}
