//! Colors and styles for the terminal front-end
//!
//! Render code pulls every color from here (`theme::module::CONSTANT`)
//! rather than naming `Color::*` values inline. Cyan accents on a dark
//! navy dropdown.

use ratatui::style::{Color, Modifier, Style};

/// Search field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const SPINNER: Color = Color::Rgb(255, 217, 61);
    pub const PLACEHOLDER: Color = Color::Rgb(90, 92, 119);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Suggestion dropdown styles
pub mod dropdown {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);

    pub const ITEM_NORMAL_FG: Color = Color::Rgb(236, 236, 244);
    pub const ITEM_SELECTED_FG: Color = Color::Rgb(26, 26, 46);
    pub const ITEM_SELECTED_BG: Color = Color::Rgb(0, 217, 255);
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;

    pub const KIND_LOCATION: Color = Color::Rgb(107, 203, 119);
    pub const KIND_LISTING: Color = Color::Rgb(198, 120, 221);
    pub const PRICE: Color = Color::Rgb(255, 217, 61);

    pub const EMPTY_TEXT: Color = Color::Rgb(130, 133, 158);
    pub const ERROR_BORDER: Color = Color::Rgb(224, 108, 117);
    pub const ERROR_TEXT: Color = Color::Rgb(224, 108, 117);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };
}

/// Help line (bottom row) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
    pub const ROUTE: Color = Color::Rgb(107, 203, 119);
}
