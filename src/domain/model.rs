use crate::utils::error::{HolidazeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reservation's occupied span for one venue. Only [`DateInterval::new`]
/// builds one, so `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(HolidazeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> chrono::TimeDelta {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightsAndCost {
    pub nights: i64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExclusionSet {
    /// 給日期區間排除用（入住日選擇器）
    pub blocked_ranges: Vec<DateInterval>,
    /// 逐日展開，包含頭尾，不去重（退房日選擇器）
    pub blocked_days: Vec<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueMeta {
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub pets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Owner or customer as embedded in venue and booking payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRef {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub avatar: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: Location,
    pub owner: Option<ProfileRef>,
    pub bookings: Option<Vec<Booking>>,
}

impl Venue {
    pub fn is_owned_by(&self, profile_name: &str) -> bool {
        self.owner
            .as_ref()
            .map(|owner| owner.name == profile_name)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
    pub venue: Option<Box<Venue>>,
    pub customer: Option<ProfileRef>,
}

impl Booking {
    pub fn interval(&self) -> Result<DateInterval> {
        DateInterval::new(self.date_from, self.date_to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
    pub venue_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<Media>,
    pub banner: Option<Media>,
    #[serde(default)]
    pub venue_manager: bool,
    pub bookings: Option<Vec<Booking>>,
    pub venues: Option<Vec<Venue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
    pub avatar: Option<Media>,
    pub banner: Option<Media>,
    #[serde(default)]
    pub venue_manager: bool,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub name: String,
    pub status: String,
    pub key: String,
}

/// Body of venue create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    pub venue_manager: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A profile booking paired with its derived display values.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub booking: Booking,
    pub venue_name: String,
    pub nights: i64,
    pub total_cost: f64,
}
