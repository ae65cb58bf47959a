use serde::{Deserialize, Serialize};

/// Color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI element colors
    pub title: Color,
    pub subtitle: Color,
    pub selected: Color,
    pub selected_bg: Color,

    pub primary: Color,
    pub accent: Color,
    pub muted: Color,

    /// Border and badge for featured cards
    pub featured: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Slate background, red brand colour
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x111827),
                foreground: Color::rgb(0xf3f4f6),
                border: Color::rgb(0x374151),
                border_focused: Color::rgb(0xef4444),

                success: Color::rgb(0x4ade80),
                warning: Color::rgb(0xfacc15),
                error: Color::rgb(0xf87171),
                info: Color::rgb(0x60a5fa),

                title: Color::rgb(0xffffff),
                subtitle: Color::rgb(0x9ca3af),
                selected: Color::rgb(0xfca5a5),
                selected_bg: Color::rgb(0x1f2937),

                primary: Color::rgb(0xdc2626),
                accent: Color::rgb(0xf87171),
                muted: Color::rgb(0x6b7280),

                featured: Color::rgb(0xfbbf24),
            },
        }
    }

    /// The web hub's look: white cards on light grey
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xf9fafb),
                foreground: Color::rgb(0x111827),
                border: Color::rgb(0xd1d5db),
                border_focused: Color::rgb(0xdc2626),

                success: Color::rgb(0x16a34a),
                warning: Color::rgb(0xca8a04),
                error: Color::rgb(0xb91c1c),
                info: Color::rgb(0x2563eb),

                title: Color::rgb(0x1f2937),
                subtitle: Color::rgb(0x4b5563),
                selected: Color::rgb(0xb91c1c),
                selected_bg: Color::rgb(0xfee2e2),

                primary: Color::rgb(0xdc2626),
                accent: Color::rgb(0xef4444),
                muted: Color::rgb(0x9ca3af),

                featured: Color::rgb(0xd97706),
            },
        }
    }

    pub fn all_themes() -> Vec<Theme> {
        vec![Self::dark(), Self::light()]
    }

    /// Get theme by name, case-insensitive
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::all_themes()
            .into_iter()
            .find(|t| t.name.to_lowercase() == name.to_lowercase())
    }

    /// Dark <-> Light
    pub fn toggled(&self) -> Theme {
        if self.name == "Dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Resolve a tool's accent token
    ///
    /// "black" would vanish on the dark background, so it gets the
    /// foreground colour there instead. Unknown tokens fall back to primary.
    pub fn accent(&self, token: &str) -> Color {
        match token {
            "red" => Color::rgb(0xef4444),
            "pink" => Color::rgb(0xec4899),
            "blue" => Color::rgb(0x3b82f6),
            "dark-blue" => Color::rgb(0x2563eb),
            "sky" => Color::rgb(0x0ea5e9),
            "green" => Color::rgb(0x22c55e),
            "purple" => Color::rgb(0xa855f7),
            "orange" => Color::rgb(0xf97316),
            "black" if self.name == "Dark" => self.colors.foreground,
            "black" => Color::new(0, 0, 0),
            _ => self.colors.primary,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
