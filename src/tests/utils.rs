use crate::api::{ApiError, PropertyApi};
use crate::auth::{Credential, SessionConfig, SessionStore};
use crate::domain::listing::{Listing, PropertyId, PropertyPage};
use crate::router::App;
use chrono::{TimeZone, Utc};
use std::num::NonZeroU32;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List {
        page: u32,
        page_size: u32,
        credential: Option<String>,
    },
    Get {
        id: String,
        credential: Option<String>,
    },
}

/// In-memory listings backend that records every call.
#[derive(Default)]
pub struct FakeApi {
    listings: Vec<Listing>,
    error: Option<ApiError>,
    calls: Mutex<Vec<ApiCall>>,
    gate: Mutex<Option<Receiver<()>>>,
}

impl FakeApi {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            ..Self::default()
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Calls block until the returned sender fires.
    pub fn gated(self) -> (Self, Sender<()>) {
        let (tx, rx) = channel();
        *self.gate.lock().unwrap() = Some(rx);
        (self, tx)
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn wait_for_gate(&self) {
        if let Some(rx) = self.gate.lock().unwrap().as_ref() {
            let _ = rx.recv();
        }
    }
}

impl PropertyApi for FakeApi {
    fn list_properties(
        &self,
        credential: Option<&Credential>,
        page: NonZeroU32,
        page_size: NonZeroU32,
    ) -> Result<PropertyPage, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::List {
            page: page.get(),
            page_size: page_size.get(),
            credential: credential.map(|c| c.token().to_string()),
        });
        self.wait_for_gate();

        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(PropertyPage {
            page,
            page_size,
            listings: self.listings.clone(),
        })
    }

    fn get_property(
        &self,
        credential: Option<&Credential>,
        id: &PropertyId,
    ) -> Result<Listing, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Get {
            id: id.to_string(),
            credential: credential.map(|c| c.token().to_string()),
        });
        self.wait_for_gate();

        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.listings
            .iter()
            .find(|l| &l.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}

pub fn sample_listing(id: &str) -> Listing {
    Listing {
        id: PropertyId::parse(id).unwrap(),
        name: format!("Sakura Heights {id}"),
        price: 50_000_000,
        address: "東京都渋谷区神南1-2-3".to_string(),
        station_name: "渋谷".to_string(),
        station_distance: 5,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}

/// App wired to a fake backend and a fresh session store.
pub fn test_app(api: FakeApi) -> (App, Arc<FakeApi>) {
    let api = Arc::new(api);
    let app = App {
        api: api.clone(),
        sessions: SessionStore::new(SessionConfig::default()),
        api_base_url: Url::parse("http://backend.test").unwrap(),
    };
    (app, api)
}
