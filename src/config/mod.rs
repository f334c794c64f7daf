#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_BASE;
use crate::domain::model::AuthenticatedUser;
use crate::domain::ports::ConfigProvider;
use crate::domain::session::Session;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use toml_config::{TomlConfig, DEFAULT_TIMEOUT_SECONDS};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

/// Values given on the command line or in the environment. Each one, when
/// present, wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub api_key: Option<String>,
}

/// Effective configuration after merging the file with overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
    pub timeout_seconds: u64,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn resolve(file: Option<TomlConfig>, overrides: SettingsOverrides) -> Self {
        let file = file.unwrap_or_default();

        Self {
            api_base: overrides
                .api_base
                .unwrap_or(file.api.base_url),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.api.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            user_name: overrides.user_name.or(file.auth.name),
            email: overrides.email.or(file.auth.email),
            password: overrides.password.or(file.auth.password),
            access_token: overrides.access_token.or(file.auth.access_token),
            api_key: overrides.api_key.or(file.auth.api_key),
        }
    }

    /// Email and password, when both are configured.
    pub fn login_credentials(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// A session rebuilt from a stored profile name, access token and API key.
    /// All three are needed; venue-manager status is unknown until the profile
    /// is fetched.
    pub fn stored_session(&self) -> Option<Session> {
        match (&self.user_name, &self.access_token, &self.api_key) {
            (Some(name), Some(token), Some(key)) => Some(Session::authenticated(
                AuthenticatedUser {
                    name: name.clone(),
                    email: self.email.clone().unwrap_or_default(),
                    avatar: None,
                    banner: None,
                    venue_manager: false,
                    access_token: token.clone(),
                },
                key.clone(),
            )),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_name: None,
            email: None,
            password: None,
            access_token: None,
            api_key: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
