pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HolidazeClient;
pub use app::{summarize_bookings, AuthService, BookingService, ProfileService, VenueService};
pub use config::{Settings, SettingsOverrides};
pub use crate::core::availability::{build_exclusion_set, compute_nights_and_cost, is_range_available};
pub use crate::core::calendar::VenueCalendar;
pub use domain::session::Session;
pub use utils::error::{HolidazeError, Result};
