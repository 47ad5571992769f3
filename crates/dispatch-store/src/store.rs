use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use dispatch_types::{Clock, Event, EventPatch, Host, SystemClock, Tag, Venue};

use crate::cache::{EventsCache, VenuesCache};
use crate::codec;
use crate::error::StoreResult;
use crate::files::DataDir;
use crate::records::{EventRecord, HostRecord, TagRecord, VenueRecord};

/// Filters applied to an events load.
///
/// A load with neither `venue` nor `host` set is "unfiltered" and eligible
/// for the read cache; setting either filter bypasses the cache and always
/// re-reads the file. `upcoming_only` is applied in memory after the read
/// (or the cache hit) and does not affect cache eligibility.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    /// Keep only events whose location references this venue id.
    pub venue: Option<String>,
    /// Keep only events listing this host reference.
    pub host: Option<String>,
    /// Keep only events starting at or after the current time.
    pub upcoming_only: bool,
}

impl EventFilter {
    /// Every event, past and future.
    pub fn all() -> Self {
        Self::default()
    }

    /// Upcoming events only.
    pub fn upcoming() -> Self {
        Self {
            upcoming_only: true,
            ..Self::default()
        }
    }

    fn is_unfiltered(&self) -> bool {
        self.venue.is_none() && self.host.is_none()
    }
}

/// The CSV-backed record store.
///
/// Reads parse whole files into typed collections; the events and venues
/// collections are cached per the policies in [`crate::cache`]. Writes
/// re-serialize the entire file. There is no cross-request locking: two
/// concurrent read-modify-write cycles can race, and the later rewrite
/// wins.
///
/// Read failures (missing or corrupt file) are non-fatal: accessors log a
/// warning and return an empty collection so callers can still render.
/// Write failures propagate.
pub struct RecordStore {
    dir: DataDir,
    clock: Arc<dyn Clock>,
    events_cache: Mutex<EventsCache>,
    venues_cache: Mutex<VenuesCache>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore").field("dir", &self.dir).finish()
    }
}

impl RecordStore {
    /// A store over the given data directory, using the system clock.
    pub fn new(dir: DataDir) -> Self {
        Self::with_clock(dir, Arc::new(SystemClock))
    }

    /// A store with an injected clock (tests drive TTL expiry with this).
    pub fn with_clock(dir: DataDir, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir,
            clock,
            events_cache: Mutex::new(EventsCache::default()),
            venues_cache: Mutex::new(VenuesCache::default()),
        }
    }

    /// The data directory this store reads and writes.
    pub fn data_dir(&self) -> &DataDir {
        &self.dir
    }

    /// The store's clock.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    // ---------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------

    /// Load events, filtered and sorted ascending by start date+time.
    ///
    /// Unfiltered loads are served from the cache while it is fresh; the
    /// upcoming-only cut is applied to the cached set in memory, not from
    /// disk. Venue/host-filtered loads always re-read the file.
    pub fn events(&self, filter: &EventFilter) -> Vec<Event> {
        let now = self.clock.now().naive_utc();

        let all = if filter.is_unfiltered() {
            let wall = self.clock.now();
            let mut cache = self.events_cache.lock().expect("events cache mutex poisoned");
            match cache.get(wall) {
                Some(cached) => {
                    debug!(count = cached.len(), "events served from cache");
                    cached
                }
                None => {
                    let loaded = self.read_events_sorted();
                    cache.put(wall, loaded.clone());
                    loaded
                }
            }
        } else {
            self.read_events_sorted()
        };

        all.into_iter()
            .filter(|e| match &filter.venue {
                Some(venue) => e.location.trim() == venue.as_str(),
                None => true,
            })
            .filter(|e| match &filter.host {
                Some(host) => e.hosts.iter().any(|h| h == host),
                None => true,
            })
            .filter(|e| !filter.upcoming_only || is_upcoming(e, now))
            .collect()
    }

    /// A single event by id, across the whole collection (past included).
    pub fn event(&self, id: &str) -> Option<Event> {
        self.events(&EventFilter::all())
            .into_iter()
            .find(|e| e.id == id)
    }

    /// Apply a partial-field update to the event with the given id.
    ///
    /// Re-parses the file, patches the matching row, and rewrites every
    /// row (changed and unchanged) back in full. Returns the updated event,
    /// or `None` if no row matched. On success the events cache is
    /// invalidated so the next unfiltered read re-parses.
    pub fn update_event(&self, id: &str, patch: &EventPatch) -> StoreResult<Option<Event>> {
        let rows: Vec<EventRecord> = codec::read_rows(&self.dir.events())?;
        let mut events: Vec<Event> = rows.into_iter().map(Event::from).collect();

        let Some(target) = events.iter_mut().find(|e| e.id == id) else {
            debug!(id, "update matched no event row");
            return Ok(None);
        };
        patch.apply_to(target);
        let updated = target.clone();

        let records: Vec<EventRecord> = events.iter().map(EventRecord::from).collect();
        codec::write_rows(&self.dir.events(), &records)?;

        self.events_cache
            .lock()
            .expect("events cache mutex poisoned")
            .invalidate();

        debug!(id, "event updated, cache invalidated");
        Ok(Some(updated))
    }

    fn read_events_sorted(&self) -> Vec<Event> {
        let rows: Vec<EventRecord> = match codec::read_rows(&self.dir.events()) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, path = %self.dir.events().display(), "failed to read events");
                return Vec::new();
            }
        };
        let mut events: Vec<Event> = rows.into_iter().map(Event::from).collect();
        // Events with unparseable schedules sort after well-formed ones.
        events.sort_by(|a, b| match (a.start(), b.start()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        events
    }

    // ---------------------------------------------------------------
    // Venues
    // ---------------------------------------------------------------

    /// Load venues. Cached after the first read with no TTL; pass
    /// `force_refresh` to re-read the file.
    pub fn venues(&self, force_refresh: bool) -> Vec<Venue> {
        let mut cache = self.venues_cache.lock().expect("venues cache mutex poisoned");
        if force_refresh {
            cache.clear();
        }
        if let Some(cached) = cache.get() {
            return cached;
        }

        let venues: Vec<Venue> = match codec::read_rows::<VenueRecord>(&self.dir.venues()) {
            Ok(rows) => rows.into_iter().map(Venue::from).collect(),
            Err(e) => {
                warn!(error = %e, path = %self.dir.venues().display(), "failed to read venues");
                return Vec::new();
            }
        };
        cache.put(venues.clone());
        venues
    }

    /// A single venue by id.
    pub fn venue(&self, id: &str) -> Option<Venue> {
        self.venues(false).into_iter().find(|v| v.id == id)
    }

    // ---------------------------------------------------------------
    // Hosts and tags (uncached)
    // ---------------------------------------------------------------

    /// Load all hosts. Uncached; every call re-reads the file.
    pub fn hosts(&self) -> Vec<Host> {
        match codec::read_rows::<HostRecord>(&self.dir.hosts()) {
            Ok(rows) => rows.into_iter().map(Host::from).collect(),
            Err(e) => {
                warn!(error = %e, path = %self.dir.hosts().display(), "failed to read hosts");
                Vec::new()
            }
        }
    }

    /// A single host by id.
    pub fn host(&self, id: &str) -> Option<Host> {
        self.hosts().into_iter().find(|h| h.id == id)
    }

    /// Load all tags. Uncached.
    pub fn tags(&self) -> Vec<Tag> {
        match codec::read_rows::<TagRecord>(&self.dir.tags()) {
            Ok(rows) => rows.into_iter().map(Tag::from).collect(),
            Err(e) => {
                warn!(error = %e, path = %self.dir.tags().display(), "failed to read tags");
                Vec::new()
            }
        }
    }
}

fn is_upcoming(event: &Event, now: NaiveDateTime) -> bool {
    match event.start() {
        Some(start) => start >= now,
        // An event whose schedule fields don't parse is never "upcoming".
        None => false,
    }
}
