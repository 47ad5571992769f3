//! Row types mirroring the stored CSV columns, and their conversions to
//! and from the domain entities.
//!
//! The row structs keep every field as the literal stored string; the
//! conversions own the lossy parsing (price, host lists) so a malformed
//! field degrades that one value instead of failing the row.

use serde::{Deserialize, Serialize};

use dispatch_types::{Event, Host, Tag, Venue};

/// One row of `events.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "StartDate")]
    pub start_date: String,
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "PhotoURL")]
    pub photo_url: String,
    #[serde(rename = "ExternalURLs")]
    pub external_urls: String,
    #[serde(rename = "Hosts")]
    pub hosts: String,
}

impl From<EventRecord> for Event {
    fn from(r: EventRecord) -> Self {
        Self {
            price: Event::parse_price(&r.price),
            hosts: Event::parse_host_refs(&r.hosts),
            id: r.id,
            title: r.title,
            start_date: r.start_date,
            start_time: r.start_time,
            end_date: r.end_date,
            end_time: r.end_time,
            location: r.location,
            description: r.description,
            photo_url: r.photo_url,
            external_urls: r.external_urls,
        }
    }
}

impl From<&Event> for EventRecord {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            start_date: e.start_date.clone(),
            start_time: e.start_time.clone(),
            end_date: e.end_date.clone(),
            end_time: e.end_time.clone(),
            location: e.location.clone(),
            description: e.description.clone(),
            price: e.price.map(|p| p.to_string()).unwrap_or_default(),
            photo_url: e.photo_url.clone(),
            external_urls: e.external_urls.clone(),
            hosts: e.hosts_column(),
        }
    }
}

/// One row of `venues.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VenueRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Type")]
    pub venue_type: String,
    #[serde(rename = "Bio")]
    pub bio: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Residents")]
    pub residents: String,
    #[serde(rename = "PhotoURLs")]
    pub photo_urls: String,
}

impl From<VenueRecord> for Venue {
    fn from(r: VenueRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
            venue_type: r.venue_type,
            bio: r.bio,
            tags: r.tags,
            residents: r.residents,
            photo_urls: r.photo_urls,
        }
    }
}

/// One row of `hosts.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bio")]
    pub bio: String,
    #[serde(rename = "PhotoURL")]
    pub photo_url: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl From<HostRecord> for Host {
    fn from(r: HostRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            bio: r.bio,
            photo_url: r.photo_url,
            tags: r.tags,
        }
    }
}

/// One row of `tags.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
}

impl From<TagRecord> for Tag {
    fn from(r: TagRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            category: r.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_parses_price_and_hosts() {
        let record = EventRecord {
            id: "e1".into(),
            title: "t".into(),
            start_date: "2026-01-01".into(),
            start_time: "20:00".into(),
            end_date: "2026-01-02".into(),
            end_time: "02:00".into(),
            location: "42".into(),
            description: String::new(),
            price: "abc".into(),
            photo_url: String::new(),
            external_urls: String::new(),
            hosts: "[1, 2]".into(),
        };
        let event = Event::from(record);
        assert_eq!(event.price, None);
        assert_eq!(event.hosts, vec!["1", "2"]);
    }

    #[test]
    fn event_roundtrips_through_record() {
        let event = Event {
            id: "e1".into(),
            title: "t".into(),
            start_date: "2026-01-01".into(),
            start_time: "20:00".into(),
            end_date: "2026-01-02".into(),
            end_time: "02:00".into(),
            location: "Main St Loft".into(),
            description: "desc, with comma".into(),
            price: Some(10.0),
            photo_url: "p".into(),
            external_urls: "u".into(),
            hosts: vec!["1".into(), "2".into()],
        };
        let back = Event::from(EventRecord::from(&event));
        assert_eq!(back, event);
    }
}
