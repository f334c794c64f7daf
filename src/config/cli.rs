use crate::config::SettingsOverrides;
use crate::utils::dates::parse_date_input;
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "holidaze")]
#[command(about = "Browse, check and book Holidaze venues from the terminal")]
pub struct CliConfig {
    /// Optional TOML config file
    #[arg(long, env = "HOLIDAZE_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "HOLIDAZE_API_BASE")]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Profile name that the access token belongs to
    #[arg(long, env = "HOLIDAZE_USER")]
    pub user: Option<String>,

    #[arg(long, env = "HOLIDAZE_EMAIL")]
    pub email: Option<String>,

    #[arg(long, env = "HOLIDAZE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "HOLIDAZE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long, env = "HOLIDAZE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List venues, optionally filtered by name
    Venues {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a venue with its booked dates
    Venue { id: String },
    /// Check whether dates are free and what they would cost
    Check {
        id: String,
        #[arg(long, value_parser = parse_date_arg)]
        from: DateTime<Utc>,
        #[arg(long, value_parser = parse_date_arg)]
        to: DateTime<Utc>,
    },
    /// Book a venue
    Book {
        id: String,
        #[arg(long, value_parser = parse_date_arg)]
        from: DateTime<Utc>,
        #[arg(long, value_parser = parse_date_arg)]
        to: DateTime<Utc>,
        #[arg(long, default_value = "1")]
        guests: u32,
    },
    /// List your bookings with nights and total cost
    Bookings,
    /// Delete one of your bookings
    CancelBooking { id: String },
    /// Log in and print the credentials for later commands
    Login,
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        venue_manager: bool,
    },
    /// List venues you manage
    MyVenues,
    /// Create a venue from a JSON file
    CreateVenue { file: PathBuf },
    UpdateVenue { id: String, file: PathBuf },
    DeleteVenue { id: String },
    /// Turn venue manager status on or off
    SetManager {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    SetAvatar { url: String },
}

fn parse_date_arg(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_date_input(value).map_err(|e| e.to_string())
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_base: self.api_base.clone(),
            timeout_seconds: self.timeout_seconds,
            user_name: self.user.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            access_token: self.access_token.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
