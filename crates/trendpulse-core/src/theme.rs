use serde::{Deserialize, Serialize};

/// Color theme for the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub title: Color,
    pub subtitle: Color,
    pub selected: Color,
    pub selected_bg: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
    pub muted: Color,

    // Trend direction colors
    pub change_up: Color,
    pub change_down: Color,
    pub surge: Color,

    // One accent per chart line, top-5 trends
    pub chart: [Color; 5],
}

/// RGB color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x1e1e2e),
                foreground: Color::rgb(0xcdd6f4),
                border: Color::rgb(0x45475a),
                border_focused: Color::rgb(0x89b4fa),

                success: Color::rgb(0xa6e3a1),
                error: Color::rgb(0xf38ba8),

                title: Color::rgb(0xcba6f7),
                subtitle: Color::rgb(0xa6adc8),
                selected: Color::rgb(0x89b4fa),
                selected_bg: Color::rgb(0x313244),
                tab_active: Color::rgb(0xf5c2e7),
                tab_inactive: Color::rgb(0x6c7086),
                muted: Color::rgb(0x6c7086),

                change_up: Color::rgb(0xa6e3a1),
                change_down: Color::rgb(0xf38ba8),
                surge: Color::rgb(0xfab387),

                chart: [
                    Color::rgb(0x89b4fa),
                    Color::rgb(0xf5c2e7),
                    Color::rgb(0xf9e2af),
                    Color::rgb(0x94e2d5),
                    Color::rgb(0xcba6f7),
                ],
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xeff1f5),
                foreground: Color::rgb(0x4c4f69),
                border: Color::rgb(0xbcc0cc),
                border_focused: Color::rgb(0x1e66f5),

                success: Color::rgb(0x40a02b),
                error: Color::rgb(0xd20f39),

                title: Color::rgb(0x8839ef),
                subtitle: Color::rgb(0x6c6f85),
                selected: Color::rgb(0x1e66f5),
                selected_bg: Color::rgb(0xdce0e8),
                tab_active: Color::rgb(0xea76cb),
                tab_inactive: Color::rgb(0x9ca0b0),
                muted: Color::rgb(0x9ca0b0),

                change_up: Color::rgb(0x40a02b),
                change_down: Color::rgb(0xd20f39),
                surge: Color::rgb(0xfe640b),

                chart: [
                    Color::rgb(0x1e66f5),
                    Color::rgb(0xea76cb),
                    Color::rgb(0xdf8e1d),
                    Color::rgb(0x179299),
                    Color::rgb(0x8839ef),
                ],
            },
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
