use super::adapter::ColorConverter;
use crate::domain::PanelId;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const CATALOG_COLOR: Color = Color::Rgb(59, 130, 246);
const CART_COLOR: Color = Color::Rgb(168, 85, 247);
const PROFILE_COLOR: Color = Color::Rgb(34, 197, 94);
const RESET_COLOR: Color = Color::Rgb(239, 68, 68);
const SCENARIO_COLOR: Color = Color::Rgb(234, 179, 8);
const CODE_COLOR: Color = Color::Rgb(74, 222, 128);
const CODE_BG: Color = Color::Rgb(17, 24, 39);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub reset: Color,
    pub scenario: Color,
    pub dimmed_style: Style,
    pub disabled_style: Style,
    pub title_style: Style,
    pub code_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Indigo")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            reset: RESET_COLOR,
            scenario: SCENARIO_COLOR,
            dimmed_style: Style::default().fg(Color::DarkGray),
            disabled_style: Style::default()
                .fg(Color::Gray)
                .bg(ColorConverter::shade(Color::Gray, 0.2, 0.0)),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            code_style: Style::default().fg(CODE_COLOR).bg(CODE_BG),
            base_style: Style::default().fg(Color::Reset),
        }
    }

    #[must_use]
    pub const fn panel_color(&self, panel: PanelId) -> Color {
        match panel {
            PanelId::Catalog => CATALOG_COLOR,
            PanelId::Cart => CART_COLOR,
            PanelId::Profile => PROFILE_COLOR,
        }
    }

    /// Filled button in `color`.
    #[must_use]
    pub fn button_style(&self, color: Color) -> Style {
        Style::default()
            .bg(color)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Background tint for resolved content cards.
    #[must_use]
    pub fn tint(&self, color: Color) -> Style {
        Style::default()
            .bg(ColorConverter::shade(color, 0.12, 0.45))
            .fg(ColorConverter::shade(color, 0.75, 0.8))
    }

    /// Skeleton bar colour at `phase` in `[0, 1]`.
    #[must_use]
    pub fn skeleton_style(&self, panel: PanelId, phase: f32) -> Style {
        let lightness = 0.18 + 0.17 * phase.clamp(0.0, 1.0);
        Style::default().fg(ColorConverter::shade(self.panel_color(panel), lightness, 0.5))
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "purple" => CART_COLOR,
        _ => Color::Rgb(99, 102, 241),
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ());
    match s.len() {
        6 => Ok((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
            Ok((
                channel(&doubled[0..2])?,
                channel(&doubled[2..4])?,
                channel(&doubled[4..6])?,
            ))
        }
        _ => Err(()),
    }
}
