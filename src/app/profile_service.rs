use crate::core::availability::compute_nights_and_cost;
use crate::domain::model::{BookingSummary, Media, Profile, Venue};
use crate::domain::ports::ProfileGateway;
use crate::domain::session::Session;
use crate::utils::error::{HolidazeError, Result};
use crate::utils::validation::validate_url;

pub struct ProfileService<G: ProfileGateway> {
    gateway: G,
}

impl<G: ProfileGateway> ProfileService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Profile of the logged-in user, including bookings and venues.
    pub async fn load_profile(&self, session: &Session) -> Result<Profile> {
        let creds = session.credentials()?;
        let user = session.require_user()?;
        self.gateway.profile(creds, &user.name).await
    }

    pub async fn owned_venues(&self, session: &Session) -> Result<Vec<Venue>> {
        let creds = session.credentials()?;
        let user = session.require_user()?;
        self.gateway.profile_venues(creds, &user.name).await
    }

    pub async fn set_venue_manager(&self, session: &mut Session, enabled: bool) -> Result<Profile> {
        let profile = {
            let creds = session.credentials()?;
            let user = session.require_user()?;
            self.gateway
                .update_profile(creds, &user.name, &serde_json::json!({ "venueManager": enabled }))
                .await?
        };
        session.set_venue_manager(profile.venue_manager);
        tracing::info!("Venue manager status set to {}", profile.venue_manager);
        Ok(profile)
    }

    pub async fn update_avatar(&self, session: &Session, url: &str) -> Result<Profile> {
        validate_url("avatar.url", url)
            .map_err(|_| HolidazeError::validation("Invalid URL format"))?;
        let creds = session.credentials()?;
        let user = session.require_user()?;
        let avatar = Media {
            url: url.to_string(),
            alt: user.name.clone(),
        };
        self.gateway
            .update_profile(creds, &user.name, &serde_json::json!({ "avatar": avatar }))
            .await
    }
}

/// Nights and total cost for each of the profile's bookings, priced at the
/// booked venue's nightly rate. Bookings returned without their venue cannot
/// be priced and are left out.
pub fn summarize_bookings(profile: &Profile) -> Result<Vec<BookingSummary>> {
    let mut summaries = Vec::new();

    for booking in profile.bookings.iter().flatten() {
        let Some(venue) = booking.venue.as_deref() else {
            tracing::warn!("Booking {} has no venue attached, skipping", booking.id);
            continue;
        };

        let cost = compute_nights_and_cost(booking.date_from, booking.date_to, venue.price)?;
        summaries.push(BookingSummary {
            booking: booking.clone(),
            venue_name: venue.name.clone(),
            nights: cost.nights,
            total_cost: cost.total_cost,
        });
    }

    Ok(summaries)
}
