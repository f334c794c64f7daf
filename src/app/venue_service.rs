use crate::domain::model::{Venue, VenueDraft};
use crate::domain::ports::VenueGateway;
use crate::domain::session::Session;
use crate::utils::error::{HolidazeError, Result};
use crate::utils::validation::Validate;

pub struct VenueService<G: VenueGateway> {
    gateway: G,
}

impl<G: VenueGateway> VenueService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Venue>> {
        let venues = self.gateway.list_venues().await?;
        tracing::debug!("Fetched {} venues", venues.len());
        Ok(match search {
            Some(term) => filter_by_name(venues, term),
            None => venues,
        })
    }

    pub async fn detail(&self, venue_id: &str) -> Result<Venue> {
        self.gateway.venue_with_bookings(venue_id).await
    }

    pub async fn create(&self, session: &Session, draft: &VenueDraft) -> Result<Venue> {
        Self::ensure_manager(session)?;
        draft.validate()?;
        let venue = self.gateway.create_venue(session.credentials()?, draft).await?;
        tracing::info!("✅ Venue {} created ({})", venue.name, venue.id);
        Ok(venue)
    }

    pub async fn update(&self, session: &Session, venue_id: &str, draft: &VenueDraft) -> Result<Venue> {
        Self::ensure_manager(session)?;
        draft.validate()?;
        let venue = self
            .gateway
            .update_venue(session.credentials()?, venue_id, draft)
            .await?;
        tracing::info!("✅ Venue {} updated", venue.id);
        Ok(venue)
    }

    pub async fn delete(&self, session: &Session, venue_id: &str) -> Result<()> {
        self.gateway
            .delete_venue(session.credentials()?, venue_id)
            .await?;
        tracing::info!("🗑️ Venue {} deleted", venue_id);
        Ok(())
    }

    fn ensure_manager(session: &Session) -> Result<()> {
        session.require_user()?;
        if !session.is_venue_manager() {
            return Err(HolidazeError::VenueManagerRequired);
        }
        Ok(())
    }
}

/// Case-insensitive substring match on venue name.
pub fn filter_by_name(venues: Vec<Venue>, term: &str) -> Vec<Venue> {
    let needle = term.to_lowercase();
    venues
        .into_iter()
        .filter(|venue| venue.name.to_lowercase().contains(&needle))
        .collect()
}
