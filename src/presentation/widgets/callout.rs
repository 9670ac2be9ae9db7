//! Highlighted note with a coloured left rule.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

pub struct Callout<'a> {
    title: &'a str,
    body: &'a str,
    color: Color,
    icon: Option<&'a str>,
}

impl<'a> Callout<'a> {
    #[must_use]
    pub const fn new(title: &'a str, body: &'a str, color: Color) -> Self {
        Self {
            title,
            body,
            color,
            icon: None,
        }
    }

    #[must_use]
    pub const fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl Widget for Callout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.color))
            .padding(Padding::horizontal(1));

        let mut title = Vec::new();
        if let Some(icon) = self.icon {
            title.push(Span::raw(format!("{icon} ")));
        }
        title.push(Span::styled(
            self.title,
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        ));

        let text = Text::from(vec![Line::from(title), Line::from(self.body)]);

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
