//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);

    // Shared cursor style
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;
    pub const TEXT_UNFOCUSED: Color = palette::TEXT_MUTED;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const LOADING_HINT: Color = palette::TEXT_MUTED;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Suggestion popup styles
pub mod suggestions {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const ITEM: Style = Style::new().fg(palette::TEXT).bg(palette::BG_DARK);
    pub const ITEM_SELECTED: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    pub const SELECTED_INDICATOR: Color = palette::PINK;
    pub const COUNT: Color = palette::TEXT_MUTED;
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
}

/// Notification toasts
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_HIGHLIGHT;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = Color::Yellow;
    pub const WARNING_BORDER: Color = Color::Yellow;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = Color::Red;
    pub const ERROR_BORDER: Color = Color::LightRed;
}
