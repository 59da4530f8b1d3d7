//! Icon service for managing different icon themes
//!
//! Checkbox glyphs, header action glyphs and a few status markers, available
//! as emoji, Unicode, or ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub todo_pending: &'static str,
    pub todo_completed: &'static str,
    pub menu: &'static str,
    pub add: &'static str,
    pub cancel: &'static str,
    pub due_date: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

const EMOJI_ICONS: IconSet = IconSet {
    todo_pending: "🔳",
    todo_completed: "✅",
    menu: "📋",
    add: "➕",
    cancel: "❌",
    due_date: "📅",
    error: "❌",
    info: "💡",
};

const UNICODE_ICONS: IconSet = IconSet {
    todo_pending: "□",
    todo_completed: "✓",
    menu: "☰",
    add: "+",
    cancel: "✗",
    due_date: "◷",
    error: "✗",
    info: "ⓘ",
};

const ASCII_ICONS: IconSet = IconSet {
    todo_pending: "[ ]",
    todo_completed: "[X]",
    menu: "=",
    add: "+",
    cancel: "x",
    due_date: "@",
    error: "X",
    info: "i",
};

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> &'static IconSet {
        match self.current_theme {
            IconTheme::Emoji => &EMOJI_ICONS,
            IconTheme::Unicode => &UNICODE_ICONS,
            IconTheme::Ascii => &ASCII_ICONS,
        }
    }

    /// Checkbox glyph for a todo's completion state
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        if completed {
            self.icons().todo_completed
        } else {
            self.icons().todo_pending
        }
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().menu
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().add
    }

    #[must_use]
    pub fn cancel(&self) -> &'static str {
        self.icons().cancel
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().due_date
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().info
    }
}
