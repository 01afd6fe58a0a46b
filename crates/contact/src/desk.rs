use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};

use crate::{
    Result,
    form::{ContactForm, Feedback, FormOptions},
    relay::Relay,
    submission::ContactSubmission,
};

struct Visit {
    form: Arc<ContactForm>,
    last_seen: Instant,
}

struct Visits {
    by_visitor: HashMap<String, Visit>,
    last_sweep: Instant,
}

/// Keeps one [`ContactForm`] per visitor and the relay they all share.
///
/// Visits idle for longer than `idle_after` are swept when a new visitor shows
/// up, at most once every quarter of `idle_after`. At most `max_visits` forms
/// are kept; a new visitor beyond that replaces the least recently seen one.
/// A form with a submit in flight is never dropped.
pub struct ContactDesk {
    relay: Arc<dyn Relay>,
    options: FormOptions,
    idle_after: Duration,
    max_visits: usize,
    visits: Mutex<Visits>,
}

impl ContactDesk {
    pub const DEFAULT_IDLE_AFTER: Duration = Duration::from_secs(30 * 60);
    pub const DEFAULT_MAX_VISITS: usize = 10_000;

    pub fn new(relay: Arc<dyn Relay>, options: FormOptions, idle_after: Duration) -> Self {
        Self {
            relay,
            options,
            idle_after,
            max_visits: Self::DEFAULT_MAX_VISITS,
            visits: Mutex::new(Visits {
                by_visitor: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = max_visits.max(1);
        self
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Form of `visitor`, created empty on first sight.
    pub async fn form(&self, visitor: &str) -> Arc<ContactForm> {
        let mut visits = self.visits.lock().await;
        let now = Instant::now();

        if let Some(visit) = visits.by_visitor.get_mut(visitor) {
            visit.last_seen = now;
            return visit.form.clone();
        }

        let full = visits.by_visitor.len() >= self.max_visits;
        if full || now - visits.last_sweep >= self.idle_after / 4 {
            let idle_after = self.idle_after;
            let before = visits.by_visitor.len();
            visits
                .by_visitor
                .retain(|_, v| now - v.last_seen < idle_after || v.form.is_submitting());
            visits.last_sweep = now;

            if visits.by_visitor.len() < before {
                tracing::debug!(
                    evicted = before - visits.by_visitor.len(),
                    "idle contact visits dropped"
                );
            }
        }

        if visits.by_visitor.len() >= self.max_visits {
            let oldest = visits
                .by_visitor
                .iter()
                .filter(|(_, v)| !v.form.is_submitting())
                .min_by_key(|(_, v)| v.last_seen)
                .map(|(id, _)| id.to_owned());

            if let Some(id) = oldest {
                visits.by_visitor.remove(&id);
                tracing::debug!(max_visits = self.max_visits, "contact visit cap reached");
            }
        }

        let form = Arc::new(ContactForm::new(self.options.clone()));
        visits.by_visitor.insert(
            visitor.to_owned(),
            Visit {
                form: form.clone(),
                last_seen: now,
            },
        );

        form
    }

    /// Form of `visitor` if one exists, without creating it.
    pub async fn peek(&self, visitor: &str) -> Option<Arc<ContactForm>> {
        self.visits
            .lock()
            .await
            .by_visitor
            .get(visitor)
            .map(|v| v.form.clone())
    }

    pub async fn visit_count(&self) -> usize {
        self.visits.lock().await.by_visitor.len()
    }

    /// Replaces the visitor's field values and submits them.
    pub async fn submit(&self, visitor: &str, submission: ContactSubmission) -> Result<Feedback> {
        self.form(visitor)
            .await
            .submit_with(submission, self.relay.as_ref())
            .await
    }
}
