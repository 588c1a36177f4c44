pub mod nav_bar;
pub mod story_card;
pub mod story_form;

pub use nav_bar::NavBar;
pub use story_card::StoryCard;
pub use story_form::StoryForm;
