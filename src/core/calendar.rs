use crate::core::availability::{
    build_exclusion_set, compute_nights_and_cost, is_day_blocked, is_range_available,
};
use crate::domain::model::{BookingRequest, DateInterval, ExclusionSet, NightsAndCost, Venue};
use crate::utils::dates::start_of_day;
use crate::utils::error::{HolidazeError, Result};
use chrono::{DateTime, Utc};

/// Booked intervals for one venue, held for as long as the venue is being viewed.
/// Intervals are only ever appended.
#[derive(Debug, Clone)]
pub struct VenueCalendar {
    venue_id: String,
    owner: Option<String>,
    price: f64,
    max_guests: u32,
    booked: Vec<DateInterval>,
}

impl VenueCalendar {
    pub fn new(venue_id: impl Into<String>, price: f64, max_guests: u32) -> Self {
        Self {
            venue_id: venue_id.into(),
            owner: None,
            price,
            max_guests,
            booked: Vec::new(),
        }
    }

    pub fn from_venue(venue: &Venue) -> Self {
        let mut calendar = Self::new(venue.id.clone(), venue.price, venue.max_guests);
        calendar.owner = venue.owner.as_ref().map(|o| o.name.clone());

        for booking in venue.bookings.iter().flatten() {
            match booking.interval() {
                Ok(interval) => calendar.booked.push(interval),
                Err(e) => {
                    tracing::warn!("Skipping booking {} on venue {}: {}", booking.id, venue.id, e)
                }
            }
        }

        tracing::debug!(
            "Loaded {} booked intervals for venue {}",
            calendar.booked.len(),
            calendar.venue_id
        );
        calendar
    }

    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn max_guests(&self) -> u32 {
        self.max_guests
    }

    pub fn booked(&self) -> &[DateInterval] {
        &self.booked
    }

    pub fn is_available(&self, candidate: &DateInterval) -> bool {
        is_range_available(candidate, &self.booked)
    }

    /// Whether `day` falls on a booked date, either end included.
    pub fn is_day_blocked(&self, day: DateTime<Utc>) -> bool {
        is_day_blocked(day, &self.booked)
    }

    pub fn exclusion_set(&self) -> ExclusionSet {
        build_exclusion_set(&self.booked)
    }

    pub fn quote(&self, date_from: DateTime<Utc>, date_to: DateTime<Utc>) -> Result<NightsAndCost> {
        compute_nights_and_cost(date_from, date_to, self.price)
    }

    pub fn record_booking(&mut self, interval: DateInterval) {
        self.booked.push(interval);
    }
}

impl BookingRequest {
    /// Checks the request on its own terms: range order, check-in not in the
    /// past, guest count within the venue's limit.
    pub fn validate(&self, max_guests: u32, now: DateTime<Utc>) -> Result<DateInterval> {
        let interval = DateInterval::new(self.date_from, self.date_to)?;

        if self.date_from < start_of_day(now) {
            return Err(HolidazeError::validation("Check-in date cannot be in the past"));
        }

        if self.guests < 1 || self.guests > max_guests {
            return Err(HolidazeError::GuestLimitExceeded {
                guests: self.guests,
                max_guests,
            });
        }

        Ok(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Booking, ProfileRef};
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn booking(id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Booking {
        Booking {
            id: id.to_string(),
            date_from: from,
            date_to: to,
            guests: 1,
            venue: None,
            customer: None,
        }
    }

    fn venue(bookings: Vec<Booking>) -> Venue {
        Venue {
            id: "v1".to_string(),
            name: "Lake house".to_string(),
            description: String::new(),
            media: vec![],
            price: 150.0,
            max_guests: 3,
            rating: 0.0,
            meta: Default::default(),
            location: Default::default(),
            owner: Some(ProfileRef {
                name: "host".to_string(),
                email: String::new(),
                avatar: None,
            }),
            bookings: Some(bookings),
        }
    }

    #[test]
    fn test_from_venue_skips_malformed_bookings() {
        let calendar = VenueCalendar::from_venue(&venue(vec![
            booking("ok", day(2030, 1, 1), day(2030, 1, 3)),
            booking("bad", day(2030, 2, 3), day(2030, 2, 1)),
        ]));

        assert_eq!(calendar.booked().len(), 1);
        assert_eq!(calendar.owner(), Some("host"));
        assert_eq!(calendar.max_guests(), 3);
    }

    #[test]
    fn test_record_booking_appends_without_merging() {
        let mut calendar = VenueCalendar::new("v1", 100.0, 2);
        let first = DateInterval::new(day(2030, 1, 1), day(2030, 1, 3)).unwrap();
        let second = DateInterval::new(day(2030, 1, 3), day(2030, 1, 5)).unwrap();

        calendar.record_booking(first);
        calendar.record_booking(second);

        assert_eq!(calendar.booked(), &[first, second]);
        assert!(!calendar.is_available(&DateInterval::new(day(2030, 1, 2), day(2030, 1, 4)).unwrap()));
        assert_eq!(calendar.exclusion_set().blocked_days.len(), 6);
    }

    #[test]
    fn test_day_blocking_follows_recorded_bookings() {
        let mut calendar = VenueCalendar::new("v1", 100.0, 2);
        assert!(!calendar.is_day_blocked(day(2030, 1, 2)));

        calendar.record_booking(DateInterval::new(day(2030, 1, 1), day(2030, 1, 3)).unwrap());

        assert!(calendar.is_day_blocked(day(2030, 1, 1)));
        assert!(calendar.is_day_blocked(day(2030, 1, 3)));
        assert!(!calendar.is_day_blocked(day(2030, 1, 4)));
    }

    #[test]
    fn test_quote_uses_venue_price() {
        let calendar = VenueCalendar::new("v1", 150.0, 2);
        let quote = calendar.quote(day(2030, 1, 1), day(2030, 1, 4)).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total_cost, 450.0);
    }

    #[test]
    fn test_request_validation() {
        let now = day(2030, 1, 1);
        let request = BookingRequest {
            date_from: day(2030, 1, 2),
            date_to: day(2030, 1, 4),
            guests: 2,
            venue_id: "v1".to_string(),
        };
        assert!(request.validate(2, now).is_ok());

        let too_many = BookingRequest { guests: 3, ..request.clone() };
        assert!(matches!(
            too_many.validate(2, now),
            Err(HolidazeError::GuestLimitExceeded { guests: 3, max_guests: 2 })
        ));

        let nobody = BookingRequest { guests: 0, ..request.clone() };
        assert!(nobody.validate(2, now).is_err());

        let reversed = BookingRequest {
            date_from: day(2030, 1, 4),
            date_to: day(2030, 1, 2),
            ..request.clone()
        };
        assert!(matches!(
            reversed.validate(2, now),
            Err(HolidazeError::InvalidRange { .. })
        ));

        let past = BookingRequest {
            date_from: day(2029, 12, 30),
            date_to: day(2030, 1, 2),
            ..request
        };
        assert!(matches!(
            past.validate(2, now),
            Err(HolidazeError::ValidationError { .. })
        ));
    }
}
