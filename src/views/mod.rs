//! View state kept between requests
//!
//! Each view owns what one portal page shows and applies the same optimistic
//! updates the page does, so callers never re-fetch after their own writes
//! unless the listing order may have changed.

pub mod arena;
pub mod forum;
pub mod news;

pub use arena::ArenaView;
pub use forum::{TopicListView, TopicView};
pub use news::NewsView;
