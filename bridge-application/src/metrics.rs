use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_received: AtomicU64,
    notifications_delivered: AtomicU64,
    notifications_failed: AtomicU64,
    role_lookups: AtomicU64,
    role_lookups_verified: AtomicU64,
}

impl Metrics {
    pub fn record_event(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivery(&self, delivered: bool) {
        if delivered {
            self.notifications_delivered.fetch_add(1, Ordering::Relaxed);
        } else {
            self.notifications_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_role_lookup(&self, verified: bool) {
        self.role_lookups.fetch_add(1, Ordering::Relaxed);
        if verified {
            self.role_lookups_verified.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn render_prometheus(&self) -> String {
        let events = self.events_received.load(Ordering::Relaxed);
        let delivered = self.notifications_delivered.load(Ordering::Relaxed);
        let failed = self.notifications_failed.load(Ordering::Relaxed);
        let lookups = self.role_lookups.load(Ordering::Relaxed);
        let verified = self.role_lookups_verified.load(Ordering::Relaxed);

        format!(
            "# TYPE bloxbridge_events_received_total counter\n\
bloxbridge_events_received_total {}\n\
# TYPE bloxbridge_notifications_delivered_total counter\n\
bloxbridge_notifications_delivered_total {}\n\
# TYPE bloxbridge_notifications_failed_total counter\n\
bloxbridge_notifications_failed_total {}\n\
# TYPE bloxbridge_role_lookups_total counter\n\
bloxbridge_role_lookups_total {}\n\
# TYPE bloxbridge_role_lookups_verified_total counter\n\
bloxbridge_role_lookups_verified_total {}\n",
            events, delivered, failed, lookups, verified
        )
    }
}
