use crate::domain::model::{
    ApiKey, AuthenticatedUser, Booking, BookingRequest, LoginRequest, Profile, RegisterRequest,
    Venue, VenueDraft,
};
use crate::domain::ports::{
    AuthGateway, BookingGateway, ConfigProvider, ProfileGateway, VenueGateway,
};
use crate::domain::session::Credentials;
use crate::utils::error::{HolidazeError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://v2.api.noroff.dev";
const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Every payload from the API is wrapped as `{ "data": ..., "meta": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Clone)]
pub struct HolidazeClient {
    client: Client,
    base_url: String,
}

impl HolidazeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder, creds: Credentials<'_>) -> RequestBuilder {
        builder
            .bearer_auth(creds.access_token)
            .header(API_KEY_HEADER, creds.api_key)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.errors.into_iter().next())
            .map(|e| e.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        tracing::warn!("❌ API request failed with {}: {}", status, message);
        Err(HolidazeError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let response = Self::check_status(builder.send().await?).await?;
        let body = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }

    async fn send_empty(builder: RequestBuilder) -> Result<()> {
        Self::check_status(builder.send().await?).await?;
        Ok(())
    }

    pub async fn get_venues(&self) -> Result<Vec<Venue>> {
        let url = self.url("/holidaze/venues");
        tracing::debug!("Making API request to: {}", url);
        Self::send_json(self.client.get(url)).await
    }

    pub async fn get_venue_with_bookings(&self, venue_id: &str) -> Result<Venue> {
        let url = self.url(&format!("/holidaze/venues/{}", venue_id));
        tracing::debug!("Making API request to: {}", url);
        Self::send_json(
            self.client
                .get(url)
                .query(&[("_bookings", "true"), ("_owner", "true")]),
        )
        .await
    }

    pub async fn post_venue(&self, creds: Credentials<'_>, draft: &VenueDraft) -> Result<Venue> {
        let builder = self.client.post(self.url("/holidaze/venues")).json(draft);
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn put_venue(
        &self,
        creds: Credentials<'_>,
        venue_id: &str,
        draft: &VenueDraft,
    ) -> Result<Venue> {
        let builder = self
            .client
            .put(self.url(&format!("/holidaze/venues/{}", venue_id)))
            .json(draft);
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn remove_venue(&self, creds: Credentials<'_>, venue_id: &str) -> Result<()> {
        let builder = self
            .client
            .delete(self.url(&format!("/holidaze/venues/{}", venue_id)));
        Self::send_empty(self.authorized(builder, creds)).await
    }

    pub async fn post_booking(
        &self,
        creds: Credentials<'_>,
        request: &BookingRequest,
    ) -> Result<Booking> {
        let builder = self.client.post(self.url("/holidaze/bookings")).json(request);
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn remove_booking(&self, creds: Credentials<'_>, booking_id: &str) -> Result<()> {
        let builder = self
            .client
            .delete(self.url(&format!("/holidaze/bookings/{}", booking_id)));
        Self::send_empty(self.authorized(builder, creds)).await
    }

    pub async fn get_profile(&self, creds: Credentials<'_>, name: &str) -> Result<Profile> {
        let builder = self
            .client
            .get(self.url(&format!("/holidaze/profiles/{}", name)))
            .query(&[("_bookings", "true"), ("_venues", "true")]);
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn get_profile_venues(&self, creds: Credentials<'_>, name: &str) -> Result<Vec<Venue>> {
        let builder = self
            .client
            .get(self.url(&format!("/holidaze/profiles/{}/venues", name)));
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn put_profile(
        &self,
        creds: Credentials<'_>,
        name: &str,
        changes: &serde_json::Value,
    ) -> Result<Profile> {
        let builder = self
            .client
            .put(self.url(&format!("/holidaze/profiles/{}", name)))
            .json(changes);
        Self::send_json(self.authorized(builder, creds)).await
    }

    pub async fn post_login(&self, request: &LoginRequest) -> Result<AuthenticatedUser> {
        let builder = self
            .client
            .post(self.url("/auth/login"))
            .query(&[("_holidaze", "true")])
            .json(request);
        Self::send_json(builder).await
    }

    pub async fn post_register(&self, request: &RegisterRequest) -> Result<Profile> {
        Self::send_json(self.client.post(self.url("/auth/register")).json(request)).await
    }

    pub async fn post_api_key(&self, access_token: &str, name: &str) -> Result<ApiKey> {
        let builder = self
            .client
            .post(self.url("/auth/create-api-key"))
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "name": name }));
        Self::send_json(builder).await
    }
}

#[async_trait]
impl VenueGateway for HolidazeClient {
    async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.get_venues().await
    }

    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue> {
        self.get_venue_with_bookings(venue_id).await
    }

    async fn create_venue(&self, creds: Credentials<'_>, draft: &VenueDraft) -> Result<Venue> {
        self.post_venue(creds, draft).await
    }

    async fn update_venue(
        &self,
        creds: Credentials<'_>,
        venue_id: &str,
        draft: &VenueDraft,
    ) -> Result<Venue> {
        self.put_venue(creds, venue_id, draft).await
    }

    async fn delete_venue(&self, creds: Credentials<'_>, venue_id: &str) -> Result<()> {
        self.remove_venue(creds, venue_id).await
    }
}

#[async_trait]
impl BookingGateway for HolidazeClient {
    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue> {
        self.get_venue_with_bookings(venue_id).await
    }

    async fn create_booking(
        &self,
        creds: Credentials<'_>,
        request: &BookingRequest,
    ) -> Result<Booking> {
        self.post_booking(creds, request).await
    }

    async fn delete_booking(&self, creds: Credentials<'_>, booking_id: &str) -> Result<()> {
        self.remove_booking(creds, booking_id).await
    }
}

#[async_trait]
impl ProfileGateway for HolidazeClient {
    async fn profile(&self, creds: Credentials<'_>, name: &str) -> Result<Profile> {
        self.get_profile(creds, name).await
    }

    async fn profile_venues(&self, creds: Credentials<'_>, name: &str) -> Result<Vec<Venue>> {
        self.get_profile_venues(creds, name).await
    }

    async fn update_profile(
        &self,
        creds: Credentials<'_>,
        name: &str,
        changes: &serde_json::Value,
    ) -> Result<Profile> {
        self.put_profile(creds, name, changes).await
    }
}

#[async_trait]
impl AuthGateway for HolidazeClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthenticatedUser> {
        self.post_login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Profile> {
        self.post_register(request).await
    }

    async fn create_api_key(&self, access_token: &str, name: &str) -> Result<ApiKey> {
        self.post_api_key(access_token, name).await
    }
}
