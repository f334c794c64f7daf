use crate::domain::model::{
    ApiKey, AuthenticatedUser, Booking, BookingRequest, LoginRequest, Profile, RegisterRequest,
    Venue, VenueDraft,
};
use crate::domain::session::Credentials;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn access_token(&self) -> Option<&str>;
    fn api_key(&self) -> Option<&str>;
}

/// Venue reads and writes against the booking API.
#[async_trait]
pub trait VenueGateway: Send + Sync {
    async fn list_venues(&self) -> Result<Vec<Venue>>;
    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue>;
    async fn create_venue(&self, creds: Credentials<'_>, draft: &VenueDraft) -> Result<Venue>;
    async fn update_venue(
        &self,
        creds: Credentials<'_>,
        venue_id: &str,
        draft: &VenueDraft,
    ) -> Result<Venue>;
    async fn delete_venue(&self, creds: Credentials<'_>, venue_id: &str) -> Result<()>;
}

#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue>;
    async fn create_booking(&self, creds: Credentials<'_>, request: &BookingRequest)
        -> Result<Booking>;
    async fn delete_booking(&self, creds: Credentials<'_>, booking_id: &str) -> Result<()>;
}

#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn profile(&self, creds: Credentials<'_>, name: &str) -> Result<Profile>;
    async fn profile_venues(&self, creds: Credentials<'_>, name: &str) -> Result<Vec<Venue>>;
    async fn update_profile(
        &self,
        creds: Credentials<'_>,
        name: &str,
        changes: &serde_json::Value,
    ) -> Result<Profile>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthenticatedUser>;
    async fn register(&self, request: &RegisterRequest) -> Result<Profile>;
    async fn create_api_key(&self, access_token: &str, name: &str) -> Result<ApiKey>;
}
