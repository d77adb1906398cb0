// client.rs
use crate::api::models::{PropertyListResponse, RawListing};
use crate::api::ApiError;
use crate::auth::Credential;
use crate::domain::listing::{Listing, PropertyId, PropertyPage};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use std::num::NonZeroU32;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("property-portal/", env!("CARGO_PKG_VERSION"));

/// What the views need from the listings backend. Implemented by `ApiClient`
/// and by in-memory fakes in tests.
pub trait PropertyApi: Send + Sync {
    fn list_properties(
        &self,
        credential: Option<&Credential>,
        page: NonZeroU32,
        page_size: NonZeroU32,
    ) -> Result<PropertyPage, ApiError>;

    fn get_property(
        &self,
        credential: Option<&Credential>,
        id: &PropertyId,
    ) -> Result<Listing, ApiError>;
}

/// Attaches `Authorization: Bearer ...` when a credential is available.
/// Without one the request goes out bare and the backend decides.
pub fn authorize(builder: RequestBuilder, credential: Option<&Credential>) -> RequestBuilder {
    match credential {
        Some(credential) => builder.bearer_auth(credential.token()),
        None => builder,
    }
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/seg/seg...`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Request(format!("unusable base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn list_request(
        &self,
        credential: Option<&Credential>,
        page: NonZeroU32,
        page_size: NonZeroU32,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(&["api", "properties"])?;
        let builder = self
            .client
            .get(url)
            .query(&[("page", page.get()), ("pageSize", page_size.get())]);

        Ok(authorize(builder, credential))
    }

    pub fn property_request(
        &self,
        credential: Option<&Credential>,
        id: &PropertyId,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(&["api", "properties", id.as_str()])?;
        Ok(authorize(self.client.get(url), credential))
    }
}

impl PropertyApi for ApiClient {
    fn list_properties(
        &self,
        credential: Option<&Credential>,
        page: NonZeroU32,
        page_size: NonZeroU32,
    ) -> Result<PropertyPage, ApiError> {
        let resp = self
            .list_request(credential, page, page_size)?
            .send()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Request(format!(
                "listings API returned {status}: {text}"
            )));
        }

        let body: PropertyListResponse = resp
            .json()
            .map_err(|e| ApiError::Request(format!("invalid listings body: {e}")))?;

        let listings = body
            .properties
            .into_iter()
            .filter_map(|raw| match raw.into_listing() {
                Ok(listing) => Some(listing),
                Err(reason) => {
                    tracing::warn!(%reason, "dropping listing from page");
                    None
                }
            })
            .collect();

        Ok(PropertyPage {
            page,
            page_size,
            listings,
        })
    }

    fn get_property(
        &self,
        credential: Option<&Credential>,
        id: &PropertyId,
    ) -> Result<Listing, ApiError> {
        let resp = self
            .property_request(credential, id)?
            .send()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Request(format!(
                "property API returned {status}: {text}"
            )));
        }

        let body: Option<RawListing> = resp
            .json()
            .map_err(|e| ApiError::Request(format!("invalid property body: {e}")))?;

        let Some(raw) = body else {
            return Err(ApiError::NotFound(id.to_string()));
        };

        raw.into_listing().map_err(ApiError::Request)
    }
}
