pub mod availability;
pub mod calendar;

pub use crate::domain::model::{DateInterval, ExclusionSet, NightsAndCost};
pub use crate::domain::ports::{
    AuthGateway, BookingGateway, ConfigProvider, ProfileGateway, VenueGateway,
};
pub use crate::utils::error::Result;
