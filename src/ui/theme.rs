use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Deadline colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_list: ColorSpec,
    pub footer_form: ColorSpec,
    pub footer_edit: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),        // Blue
            banner: ColorSpec::rgb(255, 159, 196),         // Magenta
            text: ColorSpec::rgb(169, 177, 214),           // Foreground
            text_secondary: ColorSpec::rgb(192, 202, 245), // Foreground (brighter)
            text_muted: ColorSpec::rgb(117, 121, 148),     // Comment
            success: ColorSpec::rgb(158, 206, 106),        // Green
            warning: ColorSpec::rgb(255, 202, 40),         // Yellow
            error: ColorSpec::rgb(247, 118, 142),          // Red
            border_active: ColorSpec::rgb(125, 207, 255),  // Blue
            border_normal: ColorSpec::rgb(117, 121, 148),  // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),   // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),      // Background
            footer_list: ColorSpec::rgb(125, 207, 255),    // Blue
            footer_form: ColorSpec::rgb(158, 206, 106),    // Green
            footer_edit: ColorSpec::rgb(255, 202, 40),     // Yellow
        }
    }

    /// Tokyo Night Day theme.
    ///
    pub fn tokyo_night_day() -> Self {
        Theme {
            name: "tokyo-night-day".to_string(),
            primary: ColorSpec::rgb(38, 139, 210),         // Blue
            banner: ColorSpec::rgb(220, 50, 47),           // Red
            text: ColorSpec::rgb(26, 27, 38),              // Foreground
            text_secondary: ColorSpec::rgb(36, 40, 59),    // Foreground (darker)
            text_muted: ColorSpec::rgb(117, 121, 148),     // Comment
            success: ColorSpec::rgb(34, 154, 83),          // Green
            warning: ColorSpec::rgb(196, 157, 0),          // Yellow
            error: ColorSpec::rgb(220, 50, 47),            // Red
            border_active: ColorSpec::rgb(38, 139, 210),   // Blue
            border_normal: ColorSpec::rgb(117, 121, 148),  // Comment
            highlight_bg: ColorSpec::rgb(38, 139, 210),    // Blue
            highlight_fg: ColorSpec::rgb(234, 238, 255),   // Background
            footer_list: ColorSpec::rgb(38, 139, 210),     // Blue
            footer_form: ColorSpec::rgb(34, 154, 83),      // Green
            footer_edit: ColorSpec::rgb(196, 157, 0),      // Yellow
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),        // Purple
            banner: ColorSpec::rgb(235, 111, 146),         // Love
            text: ColorSpec::rgb(224, 222, 244),           // Text
            text_secondary: ColorSpec::rgb(144, 140, 170), // Subtext
            text_muted: ColorSpec::rgb(86, 82, 100),       // Muted
            success: ColorSpec::rgb(49, 116, 143),         // Pine
            warning: ColorSpec::rgb(246, 193, 119),        // Gold
            error: ColorSpec::rgb(235, 111, 146),          // Love
            border_active: ColorSpec::rgb(196, 167, 231),  // Purple
            border_normal: ColorSpec::rgb(144, 140, 170),  // Subtext
            highlight_bg: ColorSpec::rgb(156, 207, 216),   // Foam
            highlight_fg: ColorSpec::rgb(25, 23, 36),      // Base
            footer_list: ColorSpec::rgb(156, 207, 216),    // Foam
            footer_form: ColorSpec::rgb(49, 116, 143),     // Pine
            footer_edit: ColorSpec::rgb(246, 193, 119),    // Gold
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "tokyo-night-day" => Some(Self::tokyo_night_day()),
            "rose-pine" => Some(Self::rose_pine()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "tokyo-night-day".to_string(),
            "rose-pine".to_string(),
        ]
    }
}
