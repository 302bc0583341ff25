use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after: Duration },
}

#[derive(Debug, Default)]
struct HitLog {
    by_client: HashMap<String, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

/// Sliding-window limiter keyed by client address. Clients with no hits left
/// in the window are dropped once per window, so the map only holds callers
/// seen recently.
#[derive(Debug, Clone)]
pub struct ClientRateLimiter {
    hits: Arc<Mutex<HitLog>>,
    window: Duration,
    max_requests: usize,
}

impl ClientRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            hits: Arc::new(Mutex::new(HitLog::default())),
            window,
            max_requests: max_requests.max(1),
        }
    }

    pub fn check(&self, client: &str) -> RateDecision {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> RateDecision {
        let mut log = self.hits.lock();

        let sweep_due = !matches!(
            log.last_sweep,
            Some(at) if now.saturating_duration_since(at) < self.window
        );
        if sweep_due {
            log.by_client.retain(|_, recent| {
                prune(recent, now, self.window);
                !recent.is_empty()
            });
            log.last_sweep = Some(now);
        }

        let recent = log.by_client.entry(client.to_string()).or_default();
        prune(recent, now, self.window);

        if recent.len() >= self.max_requests {
            let oldest = recent.front().copied().unwrap_or(now);
            let retry_after = self
                .window
                .saturating_sub(now.saturating_duration_since(oldest));
            return RateDecision::Limited { retry_after };
        }

        recent.push_back(now);
        RateDecision::Allowed
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.hits.lock().by_client.len()
    }
}

fn prune(recent: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while recent
        .front()
        .is_some_and(|at| now.saturating_duration_since(*at) > window)
    {
        recent.pop_front();
    }
}
