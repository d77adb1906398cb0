use chrono::{DateTime, Utc};
use std::fmt;
use std::num::NonZeroU32;

/// A single property record as returned by the listings API.
/// The portal never mutates one, it only displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: PropertyId,
    pub name: String,
    /// Whole yen.
    pub price: u64,
    pub address: String,
    pub station_name: String,
    /// Walking distance to the station, in minutes.
    pub station_distance: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of listings, in backend order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPage {
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
    pub listings: Vec<Listing>,
}

impl PropertyPage {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Opaque listing identifier, kept byte for byte. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
