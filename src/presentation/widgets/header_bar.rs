use crate::domain::content::{FEDERATION_TEXT, FEDERATION_TITLE, SUBTITLE, TITLE};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::Callout;

pub struct HeaderBarStyle {
    pub border: Style,
    pub title: Style,
    pub subtitle: Style,
    pub version: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border: Style::default().fg(theme.accent),
            title: theme.title_style,
            subtitle: theme.dimmed_style,
            version: theme.dimmed_style.add_modifier(Modifier::ITALIC),
        }
    }
}

/// Title block with the module federation callout.
pub struct HeaderBar<'a> {
    theme: &'a Theme,
    version: &'a str,
}

impl<'a> HeaderBar<'a> {
    /// Rows needed to render without clipping.
    pub const HEIGHT: u16 = 8;

    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            version: crate::VERSION,
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = HeaderBarStyle::from_theme(self.theme);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, subtitle_area, _, callout_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(TITLE, style.title),
            Span::raw("  "),
            Span::styled(format!("v{}", self.version), style.version),
        ]))
        .render(title_area, buf);

        Paragraph::new(Line::styled(SUBTITLE, style.subtitle)).render(subtitle_area, buf);

        Callout::new(FEDERATION_TITLE, FEDERATION_TEXT, self.theme.accent).render(callout_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::utils::buffer_to_string;

    #[test]
    fn test_header_shows_title_and_callout() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, HeaderBar::HEIGHT);
        let mut buf = Buffer::empty(area);

        HeaderBar::new(&theme).render(area, &mut buf);

        let rendered = buffer_to_string(&buf);
        assert!(rendered.contains(TITLE));
        assert!(rendered.contains(SUBTITLE));
        assert!(rendered.contains(FEDERATION_TITLE));
    }
}
