//! Presentation constants shared by every screen. Built once, never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font_size: u16,
    /// CSS-style weight: 400 regular, 600 semibold, 700 bold
    pub font_weight: u16,
    pub line_height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub body: TextStyle,
    pub caption: TextStyle,
    pub button: TextStyle,
    pub placeholder: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub small: u16,
    pub medium: u16,
    pub large: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub radius: u16,
}

const fn text(font_size: u16, font_weight: u16, line_height: u16) -> TextStyle {
    TextStyle {
        font_size,
        font_weight,
        line_height,
    }
}

static THEME: Theme = Theme {
    colors: Palette {
        primary: "#4CAF50",
        secondary: "#FFC107",
        background: "#F5F5F5",
        surface: "#FFFFFF",
        text_primary: "#212121",
        text_secondary: "#757575",
        error: "#D32F2F",
        success: "#388E3C",
    },
    typography: Typography {
        h1: text(28, 700, 36),
        h2: text(22, 600, 30),
        body: text(16, 400, 24),
        caption: text(12, 400, 16),
        button: text(16, 600, 20),
        placeholder: text(14, 400, 20),
    },
    spacing: Spacing {
        small: 8,
        medium: 16,
        large: 24,
    },
    radius: 10,
};

pub fn theme() -> &'static Theme {
    &THEME
}
