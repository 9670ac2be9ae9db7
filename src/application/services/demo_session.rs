use tokio::sync::mpsc;
use tracing::{debug, info};

use super::reveal_scheduler::RevealScheduler;
use crate::domain::{DemoAction, DemoState, Effect, PanelId, PanelStatus, reduce};

/// Owns the demo state and carries out the reducer's effects.
///
/// All state changes go through [`DemoSession::dispatch`].
pub struct DemoSession {
    state: DemoState,
    scheduler: RevealScheduler,
}

impl DemoSession {
    #[must_use]
    pub fn new(action_tx: mpsc::UnboundedSender<DemoAction>) -> Self {
        Self {
            state: DemoState::new(),
            scheduler: RevealScheduler::new(action_tx),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DemoState {
        &self.state
    }

    #[must_use]
    pub const fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    pub fn dispatch(&mut self, action: DemoAction) {
        let before = self.state;
        let update = reduce(self.state, action);
        self.state = update.state;

        match action {
            DemoAction::Activate(panel) if !before.panels().is_requested(panel) => {
                info!(panel = %panel, "Panel activated");
            }
            DemoAction::Activate(panel) => {
                debug!(panel = %panel, "Panel already requested");
            }
            DemoAction::RevealElapsed { panel, ticket } => {
                self.scheduler.complete(panel, ticket);
                if self.state.panels().status(panel) == PanelStatus::Resolved
                    && before.panels().status(panel) != PanelStatus::Resolved
                {
                    info!(panel = %panel, "Panel resolved");
                } else {
                    debug!(panel = %panel, ticket = %ticket, "Discarding stale reveal");
                }
            }
            DemoAction::Reset => info!("Demo reset"),
            DemoAction::ToggleCode => {
                debug!(show_code = self.state.show_code(), "Code sample toggled");
            }
        }

        for effect in update.effects {
            self.run_effect(effect);
        }
    }

    pub fn activate(&mut self, panel: PanelId) {
        self.dispatch(DemoAction::Activate(panel));
    }

    pub fn reset(&mut self) {
        self.dispatch(DemoAction::Reset);
    }

    pub fn toggle_code(&mut self) {
        self.dispatch(DemoAction::ToggleCode);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleReveal {
                panel,
                ticket,
                delay,
            } => self.scheduler.schedule(panel, ticket, delay),
            Effect::CancelReveal { panel, ticket } => {
                self.scheduler.cancel(panel, ticket);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use test_case::test_case;

    fn session() -> (DemoSession, mpsc::UnboundedReceiver<DemoAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DemoSession::new(tx), rx)
    }

    /// Feeds every reveal that arrives within `window` back into the session.
    async fn pump(
        session: &mut DemoSession,
        rx: &mut mpsc::UnboundedReceiver<DemoAction>,
        window: Duration,
    ) -> Vec<PanelId> {
        let deadline = tokio::time::Instant::now() + window;
        let mut order = Vec::new();
        while let Ok(Some(action)) = tokio::time::timeout_at(deadline, rx.recv()).await {
            if let DemoAction::RevealElapsed { panel, .. } = action {
                order.push(panel);
            }
            session.dispatch(action);
        }
        order
    }

    #[test_case(PanelId::Catalog)]
    #[test_case(PanelId::Cart)]
    #[test_case(PanelId::Profile)]
    #[tokio::test(start_paused = true)]
    async fn test_panel_resolves_after_its_delay(panel: PanelId) {
        let (mut session, mut rx) = session();

        session.activate(panel);
        assert!(session.state().panels().is_requested(panel));
        assert!(session.state().panels().status(panel).is_pending());

        pump(
            &mut session,
            &mut rx,
            panel.reveal_delay() - Duration::from_millis(1),
        )
        .await;
        assert!(session.state().panels().status(panel).is_pending());

        pump(&mut session, &mut rx, Duration::from_millis(2)).await;
        assert_eq!(session.state().panels().status(panel), PanelStatus::Resolved);
        assert_eq!(session.scheduler().pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_catalog_scenario() {
        let (mut session, mut rx) = session();

        session.activate(PanelId::Catalog);
        assert!(session.state().panels().is_requested(PanelId::Catalog));
        assert!(!session.state().panels().status(PanelId::Catalog).is_resolved());

        pump(&mut session, &mut rx, Duration::from_millis(1100)).await;
        assert!(session.state().panels().status(PanelId::Catalog).is_resolved());

        session.reset();
        assert_eq!(
            session.state().panels().status(PanelId::Catalog),
            PanelStatus::NotRequested
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_before_resolution_cancels_reveal() {
        let (mut session, mut rx) = session();

        session.activate(PanelId::Cart);
        pump(&mut session, &mut rx, Duration::from_millis(500)).await;
        session.reset();
        assert_eq!(session.scheduler().pending_count(), 0);

        let revealed = pump(&mut session, &mut rx, Duration::from_secs(3)).await;
        assert!(revealed.is_empty());
        assert_eq!(
            session.state().panels().status(PanelId::Cart),
            PanelStatus::NotRequested
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivation_after_reset_replays_full_delay() {
        let (mut session, mut rx) = session();

        session.activate(PanelId::Catalog);
        pump(&mut session, &mut rx, Duration::from_millis(600)).await;
        session.reset();
        session.activate(PanelId::Catalog);

        pump(&mut session, &mut rx, Duration::from_millis(600)).await;
        assert!(session.state().panels().status(PanelId::Catalog).is_pending());

        pump(&mut session, &mut rx, Duration::from_millis(500)).await;
        assert!(session.state().panels().status(PanelId::Catalog).is_resolved());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolution_order_follows_delays() {
        let (mut session, mut rx) = session();

        session.activate(PanelId::Cart);
        session.activate(PanelId::Catalog);
        session.activate(PanelId::Profile);

        let order = pump(&mut session, &mut rx, Duration::from_secs(2)).await;
        assert_eq!(order, vec![PanelId::Profile, PanelId::Catalog, PanelId::Cart]);
        assert_eq!(session.state().panels().resolved_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_activation_schedules_once() {
        let (mut session, mut rx) = session();

        session.activate(PanelId::Profile);
        session.activate(PanelId::Profile);
        assert_eq!(session.scheduler().pending_count(), 1);

        let order = pump(&mut session, &mut rx, Duration::from_secs(1)).await;
        assert_eq!(order, vec![PanelId::Profile]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_code_ignores_panels() {
        let (mut session, _rx) = session();

        session.activate(PanelId::Cart);
        session.toggle_code();
        assert!(session.state().show_code());
        session.reset();
        assert!(session.state().show_code());
        session.toggle_code();
        assert!(!session.state().show_code());
    }
}
