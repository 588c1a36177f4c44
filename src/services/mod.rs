pub mod api_client;
pub mod errors;
pub mod search_flow;

pub use api_client::{HttpStoryApi, StoryApi, StoryFilters};
pub use errors::ApiError;
pub use search_flow::{SearchFlow, SearchPhase, SearchRequest};

#[cfg(test)]
mod search_flow_tests;
