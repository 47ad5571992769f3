use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A dance/music event.
///
/// Events are seeded externally and mutated only through partial-field
/// updates ([`EventPatch`]); they are never deleted by the application.
///
/// `location` is either a literal display string ("Main St Loft") or the
/// numeric id of a venue row; resolution to a display name happens in the
/// store layer. `hosts` holds host references (ids or names) parsed from
/// the comma-joined, optionally bracket-wrapped `Hosts` column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the events file.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Start date as stored (`YYYY-MM-DD`).
    pub start_date: String,
    /// Start time as stored (`HH:MM`, seconds optional).
    pub start_time: String,
    /// End date as stored.
    pub end_date: String,
    /// End time as stored.
    pub end_time: String,
    /// Venue id or literal location string.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Ticket price; `None` when the stored field is blank or unparseable.
    pub price: Option<f64>,
    /// Promo image URL.
    pub photo_url: String,
    /// External ticket/info URLs.
    pub external_urls: String,
    /// Host references parsed from the `Hosts` column.
    pub hosts: Vec<String>,
}

impl Event {
    /// The event's start as a date+time, if both fields parse.
    ///
    /// Events with malformed schedule fields sort after well-formed ones
    /// rather than failing the whole load.
    pub fn start(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").ok()?;
        let time = parse_time(self.start_time.trim())?;
        Some(date.and_time(time))
    }

    /// The event's end as a date+time, if both fields parse.
    pub fn end(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").ok()?;
        let time = parse_time(self.end_time.trim())?;
        Some(date.and_time(time))
    }

    /// Parse the stored `Hosts` column: comma-joined host references,
    /// optionally wrapped in bracket notation (`[1, 2]`).
    pub fn parse_host_refs(raw: &str) -> Vec<String> {
        let trimmed = raw.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);
        inner
            .split(',')
            .map(|s| s.trim().trim_matches(|c| c == '\'' || c == '"').trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Serialize the host references back to the stored column form.
    pub fn hosts_column(&self) -> String {
        self.hosts.join(",")
    }

    /// Parse the stored `Price` column. Blank or unparseable values become
    /// `None` rather than an error.
    pub fn parse_price(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|p| p.is_finite())
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Partial-field update for an event.
///
/// Only present fields are applied; everything else round-trips through
/// the rewrite unchanged. Each field accepts the stored column name and
/// its common casings, so a PATCH body may say `"Title"`, `"title"`, or
/// `"photoUrl"` interchangeably.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPatch {
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "StartDate", alias = "startdate", alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(alias = "StartTime", alias = "starttime", alias = "startTime")]
    pub start_time: Option<String>,
    #[serde(alias = "EndDate", alias = "enddate", alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(alias = "EndTime", alias = "endtime", alias = "endTime")]
    pub end_time: Option<String>,
    #[serde(alias = "Location")]
    pub location: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Price")]
    pub price: Option<f64>,
    #[serde(alias = "PhotoURL", alias = "photourl", alias = "photoUrl", alias = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(alias = "ExternalURLs", alias = "externalurls", alias = "externalUrls")]
    pub external_urls: Option<String>,
}

impl EventPatch {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_date.is_none()
            && self.start_time.is_none()
            && self.end_date.is_none()
            && self.end_time.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.photo_url.is_none()
            && self.external_urls.is_none()
    }

    /// Apply every present field to the given event.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(v) = &self.title {
            event.title = v.clone();
        }
        if let Some(v) = &self.start_date {
            event.start_date = v.clone();
        }
        if let Some(v) = &self.start_time {
            event.start_time = v.clone();
        }
        if let Some(v) = &self.end_date {
            event.end_date = v.clone();
        }
        if let Some(v) = &self.end_time {
            event.end_time = v.clone();
        }
        if let Some(v) = &self.location {
            event.location = v.clone();
        }
        if let Some(v) = &self.description {
            event.description = v.clone();
        }
        if let Some(v) = self.price {
            event.price = Some(v);
        }
        if let Some(v) = &self.photo_url {
            event.photo_url = v.clone();
        }
        if let Some(v) = &self.external_urls {
            event.external_urls = v.clone();
        }
    }
}
