//! Presentation preferences
//!
//! Small persisted slots the rendering layer reads at startup.

mod model;
mod store;

pub use model::Theme;
pub use store::{PrefsStore, ACTIVE_BOARD_KEY, SHOW_SIDEBAR_KEY, THEME_KEY};
