use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidazeError {
    #[error("Invalid date range: end {end} is not after start {start}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Selected dates are unavailable")]
    DatesUnavailable,

    #[error("Guest count {guests} is outside the allowed range 1..={max_guests}")]
    GuestLimitExceeded { guests: u32, max_guests: u32 },

    #[error("You cannot book your own venue")]
    OwnVenue,

    #[error("You must be logged in to perform this action")]
    NotAuthenticated,

    #[error("Venue manager status is required to manage venues")]
    VenueManagerRequired,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not parse date '{value}': {reason}")]
    DateParseError { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Booking,
    Auth,
    Network,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HolidazeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRange { .. }
            | Self::DatesUnavailable
            | Self::GuestLimitExceeded { .. }
            | Self::OwnVenue
            | Self::ValidationError { .. } => ErrorCategory::Booking,
            Self::NotAuthenticated | Self::VenueManagerRequired => ErrorCategory::Auth,
            Self::ApiError(_) | Self::Http { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) | Self::DateParseError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Booking => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Auth | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRange { .. } => {
                "Checkout date must be at least one day after the check-in date.".to_string()
            }
            Self::DatesUnavailable => {
                "Selected dates are unavailable. Please choose different dates.".to_string()
            }
            Self::Http { status: 401, .. } | Self::NotAuthenticated => {
                "You must be logged in to make a booking.".to_string()
            }
            Self::Http { status: 404, .. } => "The requested item was not found.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Booking => "Adjust the dates or guest count and try again",
            ErrorCategory::Auth => "Log in again, or enable venue manager status on your profile",
            ErrorCategory::Network => "Check your network connection and the API base URL",
            ErrorCategory::Data => "The API returned data in an unexpected format",
            ErrorCategory::Configuration => "Check the CLI arguments and the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidazeError>;
