use crate::domain::keybinding::{Action, format_key};
use crate::domain::{PanelId, PanelState};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// Row of demo controls.
///
/// A panel's control is rendered disabled once the panel is requested.
pub struct ControlPanel<'a> {
    panels: &'a PanelState,
    show_code: bool,
    registry: &'a CommandRegistry,
    theme: &'a Theme,
}

impl<'a> ControlPanel<'a> {
    pub const HEIGHT: u16 = 5;

    #[must_use]
    pub const fn new(
        panels: &'a PanelState,
        show_code: bool,
        registry: &'a CommandRegistry,
        theme: &'a Theme,
    ) -> Self {
        Self {
            panels,
            show_code,
            registry,
            theme,
        }
    }

    fn key_hint(&self, action: Action) -> Option<String> {
        self.registry
            .get(action)
            .map(|key| format!(" [{}]", format_key(&key)))
    }

    fn button(&self, label: String, action: Action, style: Style) -> Vec<Span<'static>> {
        let mut text = format!(" {label}");
        text.push_str(&self.key_hint(action).unwrap_or_default());
        text.push(' ');
        vec![Span::styled(text, style), Span::raw("  ")]
    }

    fn panel_button(&self, panel: PanelId) -> Vec<Span<'static>> {
        if self.panels.is_requested(panel) {
            vec![
                Span::styled(" ✅ Loaded ", self.theme.disabled_style),
                Span::raw("  "),
            ]
        } else {
            self.button(
                format!("Load {}", panel.display_name()),
                Action::load(panel),
                self.theme.button_style(self.theme.panel_color(panel)),
            )
        }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans: Vec<Span<'static>> = PanelId::ALL
            .iter()
            .flat_map(|panel| self.panel_button(*panel))
            .collect();

        spans.extend(self.button(
            "🔄 Reset Demo".to_string(),
            Action::Reset,
            self.theme.button_style(self.theme.reset),
        ));

        let code_label = if self.show_code {
            "📋 Hide Code"
        } else {
            "💻 Show Code"
        };
        spans.extend(self.button(
            code_label.to_string(),
            Action::ToggleCode,
            self.theme.button_style(ratatui::style::Color::DarkGray),
        ));

        spans
    }
}

impl Widget for ControlPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style)
            .title(Span::styled(
                " Control Panel ",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.spans()))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DemoAction, DemoState, reduce};
    use crate::presentation::ui::utils::buffer_to_string;

    fn render(state: &DemoState) -> String {
        let theme = Theme::default();
        let registry = CommandRegistry::default();
        let area = Rect::new(0, 0, 200, ControlPanel::HEIGHT);
        let mut buf = Buffer::empty(area);

        ControlPanel::new(state.panels(), state.show_code(), &registry, &theme)
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_initial_controls_are_enabled() {
        let rendered = render(&DemoState::new());

        assert!(rendered.contains("Load Product Catalog [1]"));
        assert!(rendered.contains("Load Shopping Cart [2]"));
        assert!(rendered.contains("Load User Profile [3]"));
        assert!(rendered.contains("Show Code [s]"));
        assert!(!rendered.contains("Loaded"));
    }

    #[test]
    fn test_requested_panel_control_is_disabled() {
        let state = reduce(DemoState::new(), DemoAction::Activate(PanelId::Cart)).state;
        let rendered = render(&state);

        assert!(!rendered.contains("Load Shopping Cart"));
        assert!(rendered.contains("Loaded"));
        assert!(rendered.contains("Load Product Catalog"));
    }

    #[test]
    fn test_code_label_follows_visibility() {
        let state = reduce(DemoState::new(), DemoAction::ToggleCode).state;
        let rendered = render(&state);

        assert!(rendered.contains("Hide Code [s]"));
        assert!(!rendered.contains("Show Code"));
    }
}
