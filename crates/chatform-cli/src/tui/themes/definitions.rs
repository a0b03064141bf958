//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Native terminal colors
pub fn default_theme() -> Theme {
    Theme {
        name: "default".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        border_color: Color::DarkGray,
        focus_color: Color::Cyan,
        title_color: Color::White,
        accent_color: Color::Cyan,
        text_color: Color::Reset,
        dim_color: Color::Gray,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        status_bar_bg_color: Color::Reset,
    }
}

pub fn tokyo_night() -> Theme {
    Theme {
        name: "tokyo_night".to_string(),
        display_name: "Tokyo Night".to_string(),
        bg_color: Color::Rgb(26, 27, 38),
        border_color: Color::Rgb(65, 72, 104),
        focus_color: Color::Rgb(122, 162, 247),
        title_color: Color::Rgb(192, 202, 245),
        accent_color: Color::Rgb(125, 207, 255),
        text_color: Color::Rgb(169, 177, 214),
        dim_color: Color::Rgb(86, 95, 137),
        success_color: Color::Rgb(158, 206, 106),
        warning_color: Color::Rgb(224, 175, 104),
        error_color: Color::Rgb(247, 118, 142),
        status_bar_bg_color: Color::Rgb(22, 22, 30),
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        display_name: "Dracula".to_string(),
        bg_color: Color::Rgb(40, 42, 54),
        border_color: Color::Rgb(68, 71, 90),
        focus_color: Color::Rgb(189, 147, 249),
        title_color: Color::Rgb(248, 248, 242),
        accent_color: Color::Rgb(255, 121, 198),
        text_color: Color::Rgb(248, 248, 242),
        dim_color: Color::Rgb(98, 114, 164),
        success_color: Color::Rgb(80, 250, 123),
        warning_color: Color::Rgb(241, 250, 140),
        error_color: Color::Rgb(255, 85, 85),
        status_bar_bg_color: Color::Rgb(33, 34, 44),
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        border_color: Color::Rgb(76, 86, 106),
        focus_color: Color::Rgb(136, 192, 208),
        title_color: Color::Rgb(236, 239, 244),
        accent_color: Color::Rgb(129, 161, 193),
        text_color: Color::Rgb(216, 222, 233),
        dim_color: Color::Rgb(97, 110, 136),
        success_color: Color::Rgb(163, 190, 140),
        warning_color: Color::Rgb(235, 203, 139),
        error_color: Color::Rgb(191, 97, 106),
        status_bar_bg_color: Color::Rgb(59, 66, 82),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".to_string(),
        display_name: "Gruvbox Dark".to_string(),
        bg_color: Color::Rgb(40, 40, 40),
        border_color: Color::Rgb(80, 73, 69),
        focus_color: Color::Rgb(250, 189, 47),
        title_color: Color::Rgb(235, 219, 178),
        accent_color: Color::Rgb(131, 165, 152),
        text_color: Color::Rgb(235, 219, 178),
        dim_color: Color::Rgb(146, 131, 116),
        success_color: Color::Rgb(184, 187, 38),
        warning_color: Color::Rgb(250, 189, 47),
        error_color: Color::Rgb(251, 73, 52),
        status_bar_bg_color: Color::Rgb(50, 48, 47),
    }
}
