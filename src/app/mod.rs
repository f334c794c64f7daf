// Application services: orchestrate domain rules over the gateway ports.

pub mod auth_service;
pub mod booking_service;
pub mod profile_service;
pub mod venue_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use profile_service::{summarize_bookings, ProfileService};
pub use venue_service::VenueService;
