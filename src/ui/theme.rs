use crate::domain::entities::preferences::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub header_background: &'static str,
    pub footer_background: &'static str,
    pub table_header: &'static str,
    pub table_border: &'static str,
    pub input_background: &'static str,
    pub toggle_background: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#000000",
    header_background: "#f0f0f0",
    footer_background: "#f0f0f0",
    table_header: "lightblue",
    table_border: "#ccc",
    input_background: "#fff",
    toggle_background: "#ccc",
};

pub const DARK: Palette = Palette {
    background: "#1a1a1a",
    text: "#ffffff",
    header_background: "#003366",
    footer_background: "#2a2a2a",
    table_header: "#003366",
    table_border: "#555555",
    input_background: "#333",
    toggle_background: "#555",
};

pub fn palette(theme: ThemeMode) -> &'static Palette {
    match theme {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

pub fn input_style(palette: &Palette) -> String {
    format!(
        "padding: 0.5rem; background-color: {}; color: {}; border: 1px solid {};",
        palette.input_background, palette.text, palette.table_border
    )
}

pub fn pager_button_style(palette: &Palette, active: bool, disabled: bool) -> String {
    let background = if active {
        palette.table_header
    } else {
        palette.header_background
    };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    format!(
        "margin: 0 0.25rem; padding: 0.5rem 0.75rem; background-color: {background}; color: {}; border: 1px solid {}; cursor: {cursor};",
        palette.text, palette.table_border
    )
}
