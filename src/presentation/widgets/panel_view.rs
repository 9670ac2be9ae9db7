//! Display region for one micro-frontend panel.
//!
//! The region has three looks, chosen by [`PanelStatus`]:
//! - not requested: a dimmed placeholder naming the control that loads it,
//! - pending: a skeleton whose bars pulse while the reveal is outstanding,
//! - resolved: the panel's static content.

use crate::domain::content::{PanelBody, PanelContent, cart_total_cents, format_price};
use crate::domain::{PanelId, PanelStatus};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

pub struct PanelView<'a> {
    panel: PanelId,
    status: PanelStatus,
    theme: &'a Theme,
    pulse: f32,
    load_hint: Option<String>,
}

impl<'a> PanelView<'a> {
    #[must_use]
    pub const fn new(panel: PanelId, status: PanelStatus, theme: &'a Theme) -> Self {
        Self {
            panel,
            status,
            theme,
            pulse: 0.0,
            load_hint: None,
        }
    }

    /// Skeleton pulse phase in `[0, 1]`.
    #[must_use]
    pub const fn pulse(mut self, phase: f32) -> Self {
        self.pulse = phase;
        self
    }

    /// Display form of the key that loads this panel.
    #[must_use]
    pub fn load_hint(mut self, key: Option<String>) -> Self {
        self.load_hint = key;
        self
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(self.theme.dimmed_style.add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let name = self.panel.display_name();
        let hint = match &self.load_hint {
            Some(key) => format!("Press [{key}] to \"Load {name}\" and see it"),
            None => format!("Use \"Load {name}\" to see it"),
        };

        let text = Text::from(vec![
            Line::styled(
                format!("{name} Not Loaded"),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(hint, self.theme.dimmed_style),
        ]);

        let height = u16::try_from(text.lines.len()).unwrap_or(0);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(middle, buf);
    }

    fn render_skeleton(&self, area: Rect, buf: &mut Buffer) {
        let color = self.theme.panel_color(self.panel);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" Loading {}… ", self.panel.display_name()),
                self.theme.dimmed_style,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_style = self.theme.skeleton_style(self.panel, self.pulse);
        let line_style = self.theme.skeleton_style(self.panel, 1.0 - self.pulse);
        let width = usize::from(inner.width);
        let bars = [
            (width, bar_style),
            (width * 3 / 4, line_style),
            (width / 2, line_style),
        ];

        let mut y = inner.y;
        for (len, style) in bars {
            if y >= inner.bottom() {
                break;
            }
            buf.set_string(inner.x, y, "█".repeat(len), style);
            y = y.saturating_add(2);
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let color = self.theme.panel_color(self.panel);
        let content = self.panel.content();
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color));

        Paragraph::new(content_text(content, color, self.theme))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn content_text(content: &PanelContent, color: Color, theme: &Theme) -> Text<'static> {
    let accent = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let tint = theme.tint(color);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(content.title, accent),
            Span::raw("  "),
            Span::styled(content.subtitle, theme.dimmed_style),
        ]),
        Line::raw(""),
        Line::raw(content.description),
        Line::raw(""),
    ];

    match content.body {
        PanelBody::Products(products) => {
            let row: Vec<Span<'static>> = products
                .iter()
                .flat_map(|product| {
                    [
                        Span::styled(
                            format!(" {} {} ", product.name, format_price(product.price_cents)),
                            tint,
                        ),
                        Span::raw("  "),
                    ]
                })
                .collect();
            lines.push(Line::from(row));
        }
        PanelBody::Cart(cart) => {
            for line in cart {
                lines.push(Line::styled(
                    format!(
                        " {} × {}  {} ",
                        line.product.name,
                        line.quantity,
                        format_price(line.subtotal_cents())
                    ),
                    tint,
                ));
            }
            lines.push(Line::styled(
                format!(" Total  {} ", format_price(cart_total_cents(cart))),
                tint.add_modifier(Modifier::BOLD),
            ));
        }
        PanelBody::Profile { name, email } => {
            lines.push(Line::from(vec![
                Span::styled(" 👤 ", tint),
                Span::raw(" "),
                Span::styled(name, accent),
                Span::raw("  "),
                Span::styled(email, theme.dimmed_style),
            ]));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("✅ Loaded from: {}", content.origin),
        Style::default().fg(Color::Green),
    ));

    Text::from(lines)
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        match self.status {
            PanelStatus::NotRequested => self.render_placeholder(area, buf),
            PanelStatus::Pending(_) => self.render_skeleton(area, buf),
            PanelStatus::Resolved => self.render_content(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RevealTicket;
    use crate::presentation::ui::utils::buffer_to_string;
    use test_case::test_case;

    fn render(panel: PanelId, status: PanelStatus) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 14);
        let mut buf = Buffer::empty(area);

        PanelView::new(panel, status, &theme)
            .load_hint(Some("1".to_string()))
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test_case(PanelId::Catalog)]
    #[test_case(PanelId::Cart)]
    #[test_case(PanelId::Profile)]
    fn test_placeholder_has_no_content(panel: PanelId) {
        let rendered = render(panel, PanelStatus::NotRequested);

        assert!(rendered.contains(&format!("{} Not Loaded", panel.display_name())));
        assert!(!rendered.contains(panel.content().origin));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(
            render(PanelId::Cart, PanelStatus::NotRequested),
            render(PanelId::Cart, PanelStatus::NotRequested)
        );
    }

    #[test_case(PanelId::Catalog)]
    #[test_case(PanelId::Cart)]
    #[test_case(PanelId::Profile)]
    fn test_skeleton_has_no_content(panel: PanelId) {
        let rendered = render(panel, PanelStatus::Pending(RevealTicket::new(0)));

        assert!(rendered.contains("Loading"));
        assert!(rendered.contains('█'));
        assert!(!rendered.contains(panel.content().origin));
        assert!(!rendered.contains("Not Loaded"));
    }

    #[test_case(PanelId::Catalog)]
    #[test_case(PanelId::Cart)]
    #[test_case(PanelId::Profile)]
    fn test_resolved_content_shown_once(panel: PanelId) {
        let rendered = render(panel, PanelStatus::Resolved);
        let origin = format!("Loaded from: {}", panel.content().origin);

        assert_eq!(rendered.matches(&origin).count(), 1);
        assert!(rendered.contains(panel.content().subtitle));
    }

    #[test]
    fn test_catalog_lists_products() {
        let rendered = render(PanelId::Catalog, PanelStatus::Resolved);
        assert!(rendered.contains("Product A $49.99"));
        assert!(rendered.contains("Product B $79.99"));
    }

    #[test]
    fn test_cart_shows_total() {
        let rendered = render(PanelId::Cart, PanelStatus::Resolved);
        assert!(rendered.contains("Product A × 1  $49.99"));
        assert!(rendered.contains("Total  $49.99"));
    }

    #[test]
    fn test_profile_shows_user() {
        let rendered = render(PanelId::Profile, PanelStatus::Resolved);
        assert!(rendered.contains("John Doe"));
        assert!(rendered.contains("john@example.com"));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        PanelView::new(PanelId::Catalog, PanelStatus::Resolved, &theme).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }
}
