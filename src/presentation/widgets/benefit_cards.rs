use crate::domain::content::BENEFITS;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// The three "why micro-frontends" cards.
pub struct BenefitCards<'a> {
    theme: &'a Theme,
}

impl<'a> BenefitCards<'a> {
    pub const HEIGHT: u16 = 5;

    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for BenefitCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(area);

        for (benefit, column) in BENEFITS.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.dimmed_style)
                .title(Line::from(vec![
                    Span::raw(format!(" {} ", benefit.icon)),
                    Span::styled(
                        format!("{} ", benefit.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));

            Paragraph::new(Text::styled(benefit.text, self.theme.dimmed_style))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(*column, buf);
        }
    }
}
