#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{ContactPayload, ContactSubmission, Relay, RelayError, RelayReply};
use tokio::sync::Notify;

pub fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Test".to_owned(),
    }
}

/// Relay answering every call with the same reply.
pub struct StaticRelay {
    pub status: u16,
    pub message: Option<String>,
    pub calls: AtomicUsize,
}

impl StaticRelay {
    pub fn new(status: u16, message: Option<&str>) -> Self {
        Self {
            status,
            message: message.map(str::to_owned),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relay for StaticRelay {
    async fn send(&self, _payload: &ContactPayload) -> Result<RelayReply, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(RelayReply {
            status: self.status,
            message: self.message.clone(),
        })
    }
}

/// Relay that holds every call until [`GatedRelay::open`] is called.
#[derive(Default)]
pub struct GatedRelay {
    pub gate: Arc<Notify>,
    pub calls: AtomicUsize,
}

impl GatedRelay {
    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relay for GatedRelay {
    async fn send(&self, _payload: &ContactPayload) -> Result<RelayReply, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;

        Ok(RelayReply {
            status: 200,
            message: Some("Thanks!".to_owned()),
        })
    }
}

/// Waits until `check` holds, yielding to other tasks in between.
pub async fn until(mut check: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if check() {
            return;
        }
        tokio::task::yield_now().await;
    }

    panic!("condition never became true");
}
