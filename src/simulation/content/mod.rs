//! Authored narrative content for the outbreak campaign.

mod branches;
mod filler;
mod interruptions;
mod main_story;

pub use branches::{balancing_events, story_arcs};
pub use filler::{fallback, filler_pool};
pub use interruptions::{interruption_pool, ultimatum};
pub use main_story::main_story;
