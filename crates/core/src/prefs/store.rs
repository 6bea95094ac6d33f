//! Preference store
//!
//! Owns the presentation slots that survive reloads: the active board, the
//! sidebar flag, and the theme. Each slot keeps its own raw encoding: the
//! active board is a JSON string, sidebar and theme are bare words.

use std::sync::Arc;

use tracing::warn;

use crate::storage::KeyValueStore;
use crate::Result;

use super::model::Theme;

/// Slot holding the name of the last-selected board (JSON string)
pub const ACTIVE_BOARD_KEY: &str = "activeBoard";
/// Slot holding sidebar visibility (`"true"` / `"false"`)
pub const SHOW_SIDEBAR_KEY: &str = "showSideBar";
/// Slot holding the theme (`"light"` / `"dark"`)
pub const THEME_KEY: &str = "theme";

/// Persisted presentation preferences
#[derive(Clone)]
pub struct PrefsStore {
    kv: Arc<dyn KeyValueStore>,
}

impl PrefsStore {
    /// Create a store handle over the given storage
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Name of the last-selected board, if one was ever persisted
    ///
    /// An unreadable value reads as unset.
    pub async fn active_board(&self) -> Result<Option<String>> {
        let Some(raw) = self.kv.get(ACTIVE_BOARD_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(name) => Ok(Some(name)),
            Err(e) => {
                warn!("Active board value is unreadable ({}), ignoring it", e);
                Ok(None)
            }
        }
    }

    /// Persist the last-selected board
    pub async fn set_active_board(&self, board: &str) -> Result<()> {
        let raw = serde_json::to_string(board)?;
        self.kv.set(ACTIVE_BOARD_KEY, &raw).await
    }

    /// Whether the sidebar is shown; absent reads as hidden
    pub async fn sidebar_visible(&self) -> Result<bool> {
        Ok(self.kv.get(SHOW_SIDEBAR_KEY).await?.as_deref() == Some("true"))
    }

    /// Persist sidebar visibility
    pub async fn set_sidebar_visible(&self, visible: bool) -> Result<()> {
        let raw = if visible { "true" } else { "false" };
        self.kv.set(SHOW_SIDEBAR_KEY, raw).await
    }

    /// Color theme; absent or unreadable reads as dark
    pub async fn theme(&self) -> Result<Theme> {
        let theme = self
            .kv
            .get(THEME_KEY)
            .await?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(theme)
    }

    /// Persist the theme
    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.kv.set(THEME_KEY, theme.as_str()).await
    }
}
