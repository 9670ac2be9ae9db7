//! The demo page: header, controls, benefits, the three panels and the
//! scenario note, with the key bar at the bottom.

use std::fmt::Write;
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::domain::content::{SCENARIO_TEXT, SCENARIO_TITLE};
use crate::domain::keybinding::{Action, format_key};
use crate::domain::{DemoState, PanelId};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BenefitCards, Callout, CodeSample, ControlPanel, FooterBar, FooterBarStyle, HeaderBar,
    HelpPopup, PanelView,
};

use super::utils::centered_rect;

const PULSE_PERIOD: Duration = Duration::from_millis(1200);
const SCENARIO_HEIGHT: u16 = 5;

/// View-only state that survives between frames.
#[derive(Debug, Default, Clone)]
pub struct DemoScreenState {
    pub show_help: bool,
    elapsed: Duration,
    animate: bool,
}

impl DemoScreenState {
    #[must_use]
    pub fn new(animate: bool) -> Self {
        Self {
            animate,
            ..Self::default()
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.animate {
            self.elapsed = self.elapsed.saturating_add(duration);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Triangle wave in `[0, 1]` driving the skeleton shimmer.
    #[must_use]
    pub fn pulse_phase(&self) -> f32 {
        let period = PULSE_PERIOD.as_secs_f32();
        let t = (self.elapsed.as_secs_f32() % period) / period;
        1.0 - (2.0 * t - 1.0).abs()
    }
}

pub struct DemoScreen<'a> {
    demo: &'a DemoState,
    registry: &'a CommandRegistry,
    theme: &'a Theme,
}

impl<'a> DemoScreen<'a> {
    #[must_use]
    pub const fn new(demo: &'a DemoState, registry: &'a CommandRegistry, theme: &'a Theme) -> Self {
        Self {
            demo,
            registry,
            theme,
        }
    }

    fn panel(&self, panel: PanelId, pulse: f32) -> PanelView<'a> {
        let hint = self
            .registry
            .get(Action::load(panel))
            .map(|key| format_key(&key));
        PanelView::new(panel, self.demo.panels().status(panel), self.theme)
            .pulse(pulse)
            .load_hint(hint)
    }

    fn status_summary(&self) -> String {
        let panels = self.demo.panels();
        let mut summary = format!("{}/{} loaded", panels.resolved_count(), PanelId::ALL.len());
        let pending = panels.pending_count();
        if pending > 0 {
            let _ = write!(summary, " · {pending} loading");
        }
        summary.push(' ');
        summary
    }
}

impl StatefulWidget for DemoScreen<'_> {
    type State = DemoScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let code_height = if self.demo.show_code() {
            CodeSample::height()
        } else {
            0
        };

        let [
            header_area,
            controls_area,
            code_area,
            benefits_area,
            top_row,
            profile_area,
            scenario_area,
            footer_area,
        ] = Layout::vertical([
            Constraint::Length(HeaderBar::HEIGHT),
            Constraint::Length(ControlPanel::HEIGHT),
            Constraint::Length(code_height),
            Constraint::Length(BenefitCards::HEIGHT),
            Constraint::Min(10),
            Constraint::Min(8),
            Constraint::Length(SCENARIO_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(self.theme).render(header_area, buf);
        ControlPanel::new(
            self.demo.panels(),
            self.demo.show_code(),
            self.registry,
            self.theme,
        )
        .render(controls_area, buf);

        if code_height > 0 {
            CodeSample::new(self.theme).render(code_area, buf);
        }

        BenefitCards::new(self.theme).render(benefits_area, buf);

        let pulse = state.pulse_phase();
        let [catalog_area, cart_area] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(1)
                .areas(top_row);
        self.panel(PanelId::Catalog, pulse).render(catalog_area, buf);
        self.panel(PanelId::Cart, pulse).render(cart_area, buf);
        self.panel(PanelId::Profile, pulse).render(profile_area, buf);

        Callout::new(SCENARIO_TITLE, SCENARIO_TEXT, self.theme.scenario)
            .icon("🌐")
            .render(scenario_area, buf);

        let bindings = self.registry.bar_bindings();
        let summary = self.status_summary();
        FooterBar::new(&bindings)
            .right_info(Some(&summary))
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);

        if state.show_help {
            let popup = HelpPopup::new(self.registry.all_bindings(), self.theme);
            let (width, height) = popup.size();
            popup.render(centered_rect(width, height, area), buf);
        }
    }
}
