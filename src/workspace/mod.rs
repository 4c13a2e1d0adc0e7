//! Explicit, serializable view state for an embedding interface.
//!
//! The reference interface kept sidebar/modal/editor state as scattered
//! ambient flags; here it is a single value object owned by whoever drives
//! the views, mutated only through named transitions and passed down
//! read-only. The core attaches no behavior to the rendering surface
//! itself.

use serde::{Deserialize, Serialize};

use crate::domain::NoteId;

/// Editor pane layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Markdown source only.
    #[default]
    Edit,
    /// Rendered preview only.
    Preview,
    /// Source and preview side by side. Not available in mobile layout.
    Split,
}

/// The complete UI state of a note-taking session.
///
/// Every field is plain data; transitions are ordinary methods so the state
/// can be snapshotted, serialized, and replayed. The editor's textarea
/// content is deliberately not here: edits are ephemeral view state and are
/// never written back to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Navigation sidebar (note list, palette and settings shortcuts).
    pub left_sidebar_open: bool,
    /// Connections panel (backlinks, related notes, tags).
    pub right_sidebar_open: bool,
    /// Command palette overlay.
    pub command_palette_open: bool,
    /// Settings dialog.
    pub settings_open: bool,
    /// Narrow-viewport layout; sidebars overlay instead of docking.
    pub mobile: bool,
    /// Editor pane layout.
    pub view_mode: ViewMode,
    /// The note being viewed, if any.
    pub active_note: Option<NoteId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            left_sidebar_open: true,
            right_sidebar_open: false,
            command_palette_open: false,
            settings_open: false,
            mobile: false,
            view_mode: ViewMode::default(),
            active_note: None,
        }
    }
}

impl ViewState {
    /// Creates the initial desktop state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given note active.
    ///
    /// In mobile layout the overlaying sidebars close so the editor is
    /// visible; the command palette closes after selection in any layout.
    pub fn select_note(&mut self, id: NoteId) {
        self.active_note = Some(id);
        self.command_palette_open = false;
        if self.mobile {
            self.left_sidebar_open = false;
            self.right_sidebar_open = false;
        }
    }

    /// Switches between desktop and mobile layout.
    ///
    /// Entering mobile closes the navigation sidebar and collapses a split
    /// editor to the edit pane; leaving mobile reopens the sidebar.
    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
        if mobile {
            self.left_sidebar_open = false;
            if self.view_mode == ViewMode::Split {
                self.view_mode = ViewMode::Edit;
            }
        } else {
            self.left_sidebar_open = true;
        }
    }

    /// Changes the editor pane layout. Split is coerced to Edit in mobile
    /// layout, where the split tab does not exist.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = if self.mobile && mode == ViewMode::Split {
            ViewMode::Edit
        } else {
            mode
        };
    }

    /// Toggles the navigation sidebar.
    pub fn toggle_left_sidebar(&mut self) {
        self.left_sidebar_open = !self.left_sidebar_open;
    }

    /// Toggles the connections panel.
    pub fn toggle_right_sidebar(&mut self) {
        self.right_sidebar_open = !self.right_sidebar_open;
    }

    /// Opens the connections panel (the Share action).
    pub fn share(&mut self) {
        self.right_sidebar_open = true;
    }

    /// Opens the command palette overlay.
    pub fn open_command_palette(&mut self) {
        self.command_palette_open = true;
    }

    /// Closes the command palette overlay.
    pub fn close_command_palette(&mut self) {
        self.command_palette_open = false;
    }

    /// Opens the settings dialog.
    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    /// Closes the settings dialog.
    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}
