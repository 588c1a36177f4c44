pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pathways;
pub mod pulse;
pub mod search;
pub mod story_detail;
pub mod submit_story;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use pathways::Pathways;
pub use pulse::Pulse;
pub use search::Search;
pub use story_detail::StoryDetail;
pub use submit_story::Submit;
