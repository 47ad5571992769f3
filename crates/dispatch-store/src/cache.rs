//! Read caches for the hot collections.
//!
//! Both caches are plain data owned by the [`RecordStore`](crate::RecordStore)
//! instance and driven by its injected [`Clock`](dispatch_types::Clock) —
//! there is no ambient global state, so tests control freshness directly.
//!
//! Policy:
//! - Events: the unfiltered all-events result set is cached with a fixed
//!   TTL (5 minutes by default). Filtered loads bypass the cache entirely.
//!   `update_event` is the only mutator of the events file and clears the
//!   cache on success, so readers never see their own writes stale; the
//!   TTL only bounds staleness against out-of-process writers.
//! - Venues: cached without a TTL; reloaded only on an explicit
//!   force-refresh.

use chrono::{DateTime, Duration, Utc};

use dispatch_types::{Event, Venue};

/// Default time-to-live for the cached events set: 5 minutes.
pub fn default_events_ttl() -> Duration {
    Duration::minutes(5)
}

/// TTL-bounded cache of the unfiltered, sorted events set.
#[derive(Debug)]
pub struct EventsCache {
    ttl: Duration,
    entries: Option<Vec<Event>>,
    stamped_at: Option<DateTime<Utc>>,
}

impl EventsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: None,
            stamped_at: None,
        }
    }

    /// The cached set, if present and still fresh at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<Vec<Event>> {
        let stamped_at = self.stamped_at?;
        if now - stamped_at >= self.ttl {
            return None;
        }
        self.entries.clone()
    }

    /// Store a freshly loaded set, stamping it at `now`.
    pub fn put(&mut self, now: DateTime<Utc>, entries: Vec<Event>) {
        self.entries = Some(entries);
        self.stamped_at = Some(now);
    }

    /// Drop the cached set and its timestamp.
    pub fn invalidate(&mut self) {
        self.entries = None;
        self.stamped_at = None;
    }
}

impl Default for EventsCache {
    fn default() -> Self {
        Self::new(default_events_ttl())
    }
}

/// Load-once cache of the venues collection.
#[derive(Debug, Default)]
pub struct VenuesCache {
    entries: Option<Vec<Venue>>,
}

impl VenuesCache {
    pub fn get(&self) -> Option<Vec<Venue>> {
        self.entries.clone()
    }

    pub fn put(&mut self, entries: Vec<Venue>) {
        self.entries = Some(entries);
    }

    pub fn clear(&mut self) {
        self.entries = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str) -> Event {
        Event {
            id: id.into(),
            title: "t".into(),
            start_date: "2026-01-01".into(),
            start_time: "20:00".into(),
            end_date: "2026-01-02".into(),
            end_time: "02:00".into(),
            location: "x".into(),
            description: String::new(),
            price: None,
            photo_url: String::new(),
            external_urls: String::new(),
            hosts: Vec::new(),
        }
    }

    #[test]
    fn fresh_until_ttl() {
        let t0 = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let mut cache = EventsCache::new(Duration::minutes(5));

        assert!(cache.get(t0).is_none());
        cache.put(t0, vec![event("e1")]);

        assert!(cache.get(t0 + Duration::minutes(4)).is_some());
        assert!(cache.get(t0 + Duration::minutes(5)).is_none());
    }

    #[test]
    fn invalidate_clears_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let mut cache = EventsCache::default();
        cache.put(t0, vec![event("e1")]);
        cache.invalidate();
        assert!(cache.get(t0).is_none());
    }

    #[test]
    fn venues_cache_holds_until_cleared() {
        let mut cache = VenuesCache::default();
        assert!(cache.get().is_none());
        cache.put(Vec::new());
        assert!(cache.get().is_some());
        cache.clear();
        assert!(cache.get().is_none());
    }
}
