use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct PlannerMetrics {
    requests_total: AtomicU64,
    plans_generated_total: AtomicU64,
    fallback_city_total: AtomicU64,
    extended_trip_total: AtomicU64,
    regenerations_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub plans_generated_total: u64,
    pub fallback_city_total: u64,
    pub extended_trip_total: u64,
    pub regenerations_total: u64,
    pub avg_latency_micros: f64,
}

impl PlannerMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("itinera_requests_total").increment(1);
    }

    /// Records one finished plan and what it involved.
    pub fn record_plan(&self, known_city: bool, extended_trip: bool) {
        self.plans_generated_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("itinera_plans_generated_total").increment(1);

        if !known_city {
            self.fallback_city_total.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("itinera_fallback_city_total").increment(1);
        }
        if extended_trip {
            self.extended_trip_total.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("itinera_extended_trip_total").increment(1);
        }
    }

    pub fn inc_regeneration(&self) {
        self.regenerations_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("itinera_regenerations_total").increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        metrics::histogram!("itinera_plan_latency_seconds").record(duration.as_secs_f64());
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let plans = self.plans_generated_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            plans_generated_total: plans,
            fallback_city_total: self.fallback_city_total.load(Ordering::Relaxed),
            extended_trip_total: self.extended_trip_total.load(Ordering::Relaxed),
            regenerations_total: self.regenerations_total.load(Ordering::Relaxed),
            avg_latency_micros: if plans == 0 {
                0.0
            } else {
                latency as f64 / plans as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,itinera_api=info,itinera_core=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
