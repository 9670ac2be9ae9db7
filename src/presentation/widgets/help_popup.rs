use crate::domain::keybinding::{Keybind, format_key};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Overlay listing every active key binding.
pub struct HelpPopup<'a> {
    bindings: &'a [Keybind],
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    #[must_use]
    pub const fn new(bindings: &'a [Keybind], theme: &'a Theme) -> Self {
        Self { bindings, theme }
    }

    /// Size the popup wants, borders included.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        let rows = self.rows();
        let width = rows
            .iter()
            .map(|(key, desc)| key.width() + desc.width() + 3)
            .max()
            .unwrap_or(0)
            .max(" Key Bindings ".width());
        (
            u16::try_from(width + 4).unwrap_or(u16::MAX),
            u16::try_from(rows.len() + 4).unwrap_or(u16::MAX),
        )
    }

    fn rows(&self) -> Vec<(String, &'static str)> {
        self.bindings
            .iter()
            .map(|bind| (format_key(&bind.key), bind.action.description()))
            .collect()
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(" Key Bindings ", self.theme.title_style))
            .title_bottom(Line::styled(" any key to close ", self.theme.dimmed_style).centered());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.rows();
        let key_width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
        let key_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::raw("")];
        lines.extend(rows.into_iter().map(|(key, desc)| {
            let pad = " ".repeat(key_width.saturating_sub(key.width()));
            Line::from(vec![
                Span::raw(" "),
                Span::styled(key, key_style),
                Span::raw(pad),
                Span::raw("  "),
                Span::raw(desc),
            ])
        }));

        Paragraph::new(lines).render(inner, buf);
    }
}
