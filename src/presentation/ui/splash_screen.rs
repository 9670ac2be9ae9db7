use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::theme::Theme;

const LOGO_TEXT: &str = "
░███     ░███ ░██████████ ░██████████
░████   ░████ ░██         ░██
░██░██ ░██░██ ░██         ░██
░██ ░████ ░██ ░█████████  ░█████████
░██  ░██  ░██ ░██         ░██
░██       ░██ ░██         ░██
░██       ░██ ░██         ░██████████";

const TAGLINE: &str = "micro-frontend loading demo";

/// Time the logo stays on screen between intro and outro.
const HOLD: Duration = Duration::from_millis(400);

#[derive(Debug, Default)]
pub struct LoadingState {
    pub data_ready: bool,
    pub intro_finished: bool,
    pub animation_complete: bool,
    held: Duration,
}

pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    pub state: LoadingState,
    pending_duration: Duration,
    theme: Theme,
}

impl SplashScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            intro_effect: fx::coalesce((800, Interpolation::CircOut)),
            outro_effect: fx::dissolve((600, Interpolation::CircIn)),
            state: LoadingState::default(),
            pending_duration: Duration::ZERO,
            theme,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    pub fn set_data_ready(&mut self) {
        self.state.data_ready = true;
    }

    /// Ends the splash without waiting for the effects.
    pub fn skip(&mut self) {
        self.state.data_ready = true;
        self.state.intro_finished = true;
        self.state.animation_complete = true;
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.animation_complete
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = LOGO_TEXT.trim_matches('\n');
        let mut text = Text::from(logo).style(self.theme.title_style);
        text.push_line(Line::raw(""));
        text.push_line(Line::styled(TAGLINE, self.theme.dimmed_style));

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if self.state.animation_complete {
            return;
        }

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.data_ready {
            if self.state.held < HOLD {
                self.state.held = self.state.held.saturating_add(duration);
                return;
            }
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}
