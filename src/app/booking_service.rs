use crate::core::calendar::VenueCalendar;
use crate::domain::model::{Booking, BookingRequest, NightsAndCost};
use crate::domain::ports::BookingGateway;
use crate::domain::session::Session;
use crate::utils::error::{HolidazeError, Result};
use chrono::{DateTime, Utc};

pub struct BookingService<G: BookingGateway> {
    gateway: G,
}

impl<G: BookingGateway> BookingService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetches the venue with its reservations and builds the calendar for this view.
    pub async fn open_calendar(&self, venue_id: &str) -> Result<VenueCalendar> {
        let venue = self.gateway.venue_with_bookings(venue_id).await?;
        Ok(VenueCalendar::from_venue(&venue))
    }

    pub fn quote(
        &self,
        calendar: &VenueCalendar,
        date_from: DateTime<Utc>,
        date_to: DateTime<Utc>,
    ) -> Result<NightsAndCost> {
        calendar.quote(date_from, date_to)
    }

    pub async fn book(
        &self,
        session: &Session,
        calendar: &mut VenueCalendar,
        request: BookingRequest,
    ) -> Result<Booking> {
        self.book_at(session, calendar, request, Utc::now()).await
    }

    /// 完整的訂房流程：登入檢查 → 場地相符 → 不可訂自己的場地 → 請求驗證 → 可用性 → 建立 → 寫回日曆
    pub async fn book_at(
        &self,
        session: &Session,
        calendar: &mut VenueCalendar,
        request: BookingRequest,
        now: DateTime<Utc>,
    ) -> Result<Booking> {
        let creds = session.credentials()?;
        let user = session.require_user()?;

        // 日曆只屬於一個場地
        if request.venue_id != calendar.venue_id() {
            return Err(HolidazeError::validation(format!(
                "Booking is for venue {} but the calendar belongs to venue {}",
                request.venue_id,
                calendar.venue_id()
            )));
        }

        if calendar.owner() == Some(user.name.as_str()) {
            return Err(HolidazeError::OwnVenue);
        }

        let candidate = request.validate(calendar.max_guests(), now)?;

        if !calendar.is_available(&candidate) {
            tracing::info!(
                "Requested {} → {} overlaps an existing booking on {}",
                candidate.start(),
                candidate.end(),
                calendar.venue_id()
            );
            return Err(HolidazeError::DatesUnavailable);
        }

        let booking = self.gateway.create_booking(creds, &request).await?;
        calendar.record_booking(candidate);

        tracing::info!("✅ Booking {} created for venue {}", booking.id, calendar.venue_id());
        Ok(booking)
    }

    pub async fn cancel(&self, session: &Session, booking_id: &str) -> Result<()> {
        let creds = session.credentials()?;
        self.gateway.delete_booking(creds, booking_id).await?;
        tracing::info!("🗑️ Booking {} deleted", booking_id);
        Ok(())
    }
}
