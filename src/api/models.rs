use crate::domain::listing::{Listing, PropertyId};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

// GET /api/properties
//  └── properties[]
//       ├── id
//       ├── property_name
//       ├── price
//       ├── address
//       ├── station_name
//       ├── station_distance
//       ├── created_at
//       └── updated_at

#[derive(Debug, Deserialize)]
pub struct PropertyListResponse {
    #[serde(default)]
    pub properties: Vec<RawListing>,
}

/// Listing as it arrives on the wire. `id` is optional here so a single bad
/// row can be dropped instead of failing the whole page.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    pub id: Option<String>,
    pub property_name: String,
    pub price: u64,
    pub address: String,
    pub station_name: String,
    pub station_distance: u32,
    #[serde(deserialize_with = "deserialize_instant")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_instant")]
    pub updated_at: DateTime<Utc>,
}

impl RawListing {
    /// Validates the identifier and produces the domain `Listing`.
    pub fn into_listing(self) -> Result<Listing, String> {
        let id = self
            .id
            .as_deref()
            .and_then(PropertyId::parse)
            .ok_or("Missing or empty listing id")?;

        Ok(Listing {
            id,
            name: self.property_name,
            price: self.price,
            address: self.address,
            station_name: self.station_name,
            station_distance: self.station_distance,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Accepts RFC 3339 instants, and naive `YYYY-MM-DDTHH:MM:SS[.f]` which are read as UTC.
fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
