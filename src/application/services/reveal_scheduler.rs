use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{DemoAction, PanelId, RevealTicket};

struct PendingReveal {
    ticket: RevealTicket,
    handle: JoinHandle<()>,
}

/// Runs one abortable timer task per pending panel.
///
/// When a timer elapses it posts [`DemoAction::RevealElapsed`] to the action
/// channel; nothing else is shared with the UI.
pub struct RevealScheduler {
    action_tx: mpsc::UnboundedSender<DemoAction>,
    pending: HashMap<PanelId, PendingReveal>,
}

impl RevealScheduler {
    #[must_use]
    pub fn new(action_tx: mpsc::UnboundedSender<DemoAction>) -> Self {
        Self {
            action_tx,
            pending: HashMap::new(),
        }
    }

    /// Starts the reveal timer for `panel`, replacing any earlier one.
    pub fn schedule(&mut self, panel: PanelId, ticket: RevealTicket, delay: Duration) {
        let action_tx = self.action_tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(panel = %panel, ticket = %ticket, "Reveal elapsed");
            if action_tx
                .send(DemoAction::RevealElapsed { panel, ticket })
                .is_err()
            {
                debug!(panel = %panel, "Action channel closed, dropping reveal");
            }
        });

        if let Some(previous) = self
            .pending
            .insert(panel, PendingReveal { ticket, handle })
        {
            previous.handle.abort();
        }
        debug!(panel = %panel, ticket = %ticket, delay_ms = delay.as_millis(), "Reveal scheduled");
    }

    /// Aborts the pending reveal for `panel` if it still carries `ticket`.
    ///
    /// Returns whether a task was aborted.
    pub fn cancel(&mut self, panel: PanelId, ticket: RevealTicket) -> bool {
        match self.pending.get(&panel) {
            Some(reveal) if reveal.ticket == ticket => {
                if let Some(reveal) = self.pending.remove(&panel) {
                    reveal.handle.abort();
                }
                debug!(panel = %panel, ticket = %ticket, "Reveal cancelled");
                true
            }
            _ => false,
        }
    }

    /// Forgets a reveal whose timer already delivered its action.
    pub fn complete(&mut self, panel: PanelId, ticket: RevealTicket) {
        if self
            .pending
            .get(&panel)
            .is_some_and(|reveal| reveal.ticket == ticket)
        {
            self.pending.remove(&panel);
        }
    }

    /// Aborts every pending reveal.
    pub fn cancel_all(&mut self) {
        for (panel, reveal) in self.pending.drain() {
            reveal.handle.abort();
            debug!(panel = %panel, ticket = %reveal.ticket, "Reveal cancelled");
        }
    }

    #[must_use]
    pub fn is_pending(&self, panel: PanelId) -> bool {
        self.pending.contains_key(&panel)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
