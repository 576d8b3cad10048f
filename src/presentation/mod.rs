use consts::HOW_MUCH_LAST_EVENTS_TO_STORE;
use models::{NotificationKind, PresentationEvent, PresentationEventKind};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;

/// Callbacks of the UI layer. Implementations must not block.
pub trait Presenter: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);

    /// Fired once per won game, after the terminal delay.
    fn celebrate(&self);

    /// Fired once per finished game, after the terminal delay.
    fn show_summary(&self);

    /// Fired once for a player who never finished a game.
    fn onboard(&self);
}

/// Keeps the last presentation events so clients can poll them.
#[derive(Default)]
pub struct EventFeed {
    next_id: AtomicUsize,
    events: Mutex<VecDeque<PresentationEvent>>,
}

impl EventFeed {
    fn push(&self, event: PresentationEventKind) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        if events.len() >= HOW_MUCH_LAST_EVENTS_TO_STORE {
            events.pop_front();
        }
        events.push_back(PresentationEvent { id, event });
    }

    /// Events with an id greater than `after`, oldest first.
    pub fn since(&self, after: usize) -> Vec<PresentationEvent> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events
            .iter()
            .filter(|event| event.id > after)
            .cloned()
            .collect()
    }
}

impl Presenter for EventFeed {
    fn notify(&self, kind: NotificationKind, message: &str) {
        tracing::info!(task = "notification", kind = ?kind, message);
        self.push(PresentationEventKind::Notification {
            kind,
            message: message.to_string(),
        });
    }

    fn celebrate(&self) {
        tracing::info!(task = "celebration");
        self.push(PresentationEventKind::Celebrate);
    }

    fn show_summary(&self) {
        self.push(PresentationEventKind::ShowSummary);
    }

    fn onboard(&self) {
        tracing::info!(task = "onboarding");
        self.push(PresentationEventKind::Onboard);
    }
}
