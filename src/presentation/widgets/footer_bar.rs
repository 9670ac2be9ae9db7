use crate::domain::keybinding::{Keybind, format_key};
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// One-line key hint bar with an optional status on the right.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::commands::CommandRegistry;
    use crate::presentation::ui::utils::buffer_to_string;

    #[test]
    fn test_shows_visible_bindings_only() {
        let registry = CommandRegistry::default();
        let bindings = registry.bar_bindings();
        let area = Rect::new(0, 0, 160, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&bindings).render(area, &mut buf);

        let rendered = buffer_to_string(&buf);
        assert!(rendered.contains(" Catalog  1 "));
        assert!(rendered.contains(" Quit  q "));
        assert!(!rendered.contains("Esc"));
        assert!(!rendered.contains("F1"));
    }

    #[test]
    fn test_right_info_is_right_aligned() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&[]).right_info(Some("0/3 loaded")).render(area, &mut buf);

        let rendered = buffer_to_string(&buf);
        assert!(rendered.ends_with("0/3 loaded"));
    }

    #[test]
    fn test_zero_height_is_noop() {
        let area = Rect::new(0, 0, 10, 0);
        let mut buf = Buffer::empty(area);
        FooterBar::new(&[]).render(area, &mut buf);
    }
}
