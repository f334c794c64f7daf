use crate::domain::model::{LoginRequest, Media, RegisterRequest, VenueDraft};
use crate::utils::error::{HolidazeError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const STUDENT_EMAIL_DOMAIN: &str = "@stud.noroff.no";
const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HolidazeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HolidazeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HolidazeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HolidazeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HolidazeError::validation(format!("{} is required", field_name)));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HolidazeError::validation(format!(
            "{} must be between {} and {} (got {})",
            field_name, min, max, value
        )));
    }
    Ok(())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_email(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HolidazeError::validation("Email field cannot be left empty"));
    }
    if !email_pattern().is_match(value) {
        return Err(HolidazeError::validation("Must be a valid email address"));
    }
    Ok(())
}

fn validate_media(field_name: &str, media: &Media) -> Result<()> {
    if media.url.is_empty() {
        return Ok(());
    }
    validate_url(field_name, &media.url)
        .map_err(|_| HolidazeError::validation(format!("{}: Invalid URL format", field_name)))
}

impl Validate for VenueDraft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("Venue name", &self.name)?;
        validate_non_empty_string("Description", &self.description)?;

        if self.price < 0.0 {
            return Err(HolidazeError::validation("Price cannot be negative"));
        }
        if self.price == 0.0 || self.price.is_nan() {
            return Err(HolidazeError::validation("Price is required"));
        }
        if self.max_guests == 0 {
            return Err(HolidazeError::validation("Max guests is required"));
        }

        validate_range("Rating", self.rating, 0.0, 5.0)?;

        for media in &self.media {
            validate_media("media.url", media)?;
        }
        Ok(())
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("Name", &self.name)?;
        validate_email(&self.email)?;
        if !self.email.ends_with(STUDENT_EMAIL_DOMAIN) {
            return Err(HolidazeError::validation(
                "Email must be a stud.noroff.no address",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(HolidazeError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.confirm_password != self.password {
            return Err(HolidazeError::validation("Passwords must match"));
        }
        if let Some(avatar) = &self.avatar {
            validate_media("avatar.url", avatar)?;
        }
        Ok(())
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(HolidazeError::validation("Please enter your password"));
        }
        Ok(())
    }
}
