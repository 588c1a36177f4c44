use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::session::Session;
use crate::services::StoryApi;
use crate::ui::theme::Theme;

/// The session signal provided by `App`. Login and logout handlers are
/// the only writers; every other component just reads.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The injected API client. Views depend on the trait so tests can
/// swap in stubs.
pub fn use_api() -> Arc<dyn StoryApi> {
    use_context::<Arc<dyn StoryApi>>()
}

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
