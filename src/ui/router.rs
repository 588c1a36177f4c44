use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::search::SearchQuery;
use crate::domain::story::StoryId;
use crate::ui::app::Shell;
use crate::ui::views::{
    Admin, Dashboard, Home, Login, NotFound, Pathways, Pulse, Search, StoryDetail, Submit,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},

    #[route("/search?:..query")]
    Search { query: SearchQuery },

    #[route("/story/:id")]
    StoryDetail { id: StoryId },

    #[route("/submit")]
    Submit {},

    #[route("/login")]
    Login {},

    #[route("/pathways")]
    Pathways {},

    #[route("/pulse")]
    Pulse {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/admin")]
    Admin {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Same page, ignoring route parameters. Drives the active state in
    /// the navigation bar.
    pub fn same_page(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Convenience for links that land on a category search.
    pub fn search_for_category(category: &str) -> Self {
        Route::Search {
            query: SearchQuery::new("", category),
        }
    }
}
