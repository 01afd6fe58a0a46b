use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use tokio::{sync::Mutex, task::JoinHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Positive,
        }
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Negative,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.tone == Tone::Positive
    }
}

#[derive(Debug, Default)]
struct Slot {
    message: Option<StatusMessage>,
    generation: u64,
    clear_task: Option<JoinHandle<()>>,
}

/// Inline status area shown next to the contact form.
///
/// Every [`StatusBoard::show`] replaces the message and reschedules the clear
/// timer. A timer only clears the message it was scheduled for, so an older
/// timer can never wipe a newer message.
#[derive(Clone, Debug)]
pub struct StatusBoard {
    slot: Arc<Mutex<Slot>>,
    clear_after: Duration,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CLEAR_AFTER)
    }
}

impl StatusBoard {
    pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_millis(3000);

    pub fn new(clear_after: Duration) -> Self {
        Self {
            slot: Arc::default(),
            clear_after,
        }
    }

    pub fn clear_after(&self) -> Duration {
        self.clear_after
    }

    pub async fn show(&self, message: StatusMessage) {
        let mut slot = self.slot.lock().await;
        slot.generation = slot.generation.wrapping_add(1);
        slot.message = Some(message);

        if let Some(task) = slot.clear_task.take() {
            task.abort();
        }

        let generation = slot.generation;
        let weak = Arc::downgrade(&self.slot);
        let delay = self.clear_after;

        slot.clear_task = Some(tokio::spawn(clear_later(weak, generation, delay)));
    }

    pub async fn current(&self) -> Option<StatusMessage> {
        self.slot.lock().await.message.clone()
    }

    pub async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        slot.generation = slot.generation.wrapping_add(1);
        slot.message = None;

        if let Some(task) = slot.clear_task.take() {
            task.abort();
        }
    }
}

async fn clear_later(slot: Weak<Mutex<Slot>>, generation: u64, delay: Duration) {
    tokio::time::sleep(delay).await;

    let Some(slot) = slot.upgrade() else {
        return;
    };

    let mut slot = slot.lock().await;
    if slot.generation != generation {
        return;
    }

    slot.message = None;
    slot.clear_task = None;

    tracing::debug!(generation, "inline status cleared");
}
