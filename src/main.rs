use clap::Parser;
use holidaze::config::toml_config::TomlConfig;
use holidaze::config::Command;
use holidaze::core::availability::earliest_check_out;
use holidaze::domain::model::{BookingRequest, Media, RegisterRequest, VenueDraft};
use holidaze::utils::dates::{format_day, start_of_day};
use holidaze::utils::error::ErrorSeverity;
use holidaze::utils::{logger, validation::Validate};
use holidaze::{
    summarize_bookings, AuthService, BookingService, CliConfig, HolidazeClient, HolidazeError,
    ProfileService, Result, Session, Settings, VenueCalendar, VenueService,
};
use std::path::Path;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入設定檔（可選）
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().map(|c| c.verbose()).unwrap_or(false);
    let json_logs = cli.log_json || file_config.as_ref().map(|c| c.json_logs()).unwrap_or(false);
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Some(config) = &file_config {
        if let Err(e) = config.validate() {
            report_and_exit(&e);
        }
    }

    let settings = Settings::resolve(file_config, cli.overrides());
    if let Err(e) = settings.validate() {
        report_and_exit(&e);
    }

    if let Err(e) = run(cli.command, &settings).await {
        report_and_exit(&e);
    }

    Ok(())
}

fn report_and_exit(e: &HolidazeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}

async fn run(command: Command, settings: &Settings) -> Result<()> {
    let client = HolidazeClient::from_config(settings)?;
    tracing::debug!("Using API at {}", client.base_url());

    match command {
        Command::Venues { search } => {
            let venues = VenueService::new(client).list(search.as_deref()).await?;
            if venues.is_empty() {
                println!("No venues found.");
            }
            for venue in venues {
                println!(
                    "{}  {}  {} $/night  max {} guests  ★ {:.1}",
                    venue.id, venue.name, venue.price, venue.max_guests, venue.rating
                );
            }
        }
        Command::Venue { id } => {
            let venue = VenueService::new(client).detail(&id).await?;
            let calendar = VenueCalendar::from_venue(&venue);
            let exclusions = calendar.exclusion_set();
            println!("{} ({})", venue.name, venue.id);
            if !venue.description.is_empty() {
                println!("{}", venue.description);
            }
            println!(
                "{} $/night  max {} guests  ★ {:.1}",
                venue.price, venue.max_guests, venue.rating
            );
            if exclusions.blocked_ranges.is_empty() {
                println!("No bookings yet, every date is open.");
            }
            for range in &exclusions.blocked_ranges {
                println!("  booked {} → {}", format_day(&range.start()), format_day(&range.end()));
            }
            println!("{} blocked days", exclusions.blocked_days.len());
            let today = start_of_day(chrono::Utc::now());
            if calendar.is_day_blocked(today) {
                println!("Booked today ({})", format_day(&today));
            } else {
                println!("Open today ({})", format_day(&today));
            }
        }
        Command::Check { id, from, to } => {
            let service = BookingService::new(client);
            let calendar = service.open_calendar(&id).await?;
            let candidate = holidaze::core::DateInterval::new(from, to)?;
            let quote = service.quote(&calendar, from, to)?;
            let status = if calendar.is_available(&candidate) {
                "✅ available"
            } else {
                "❌ unavailable"
            };
            println!(
                "{} → {}: {}  ({} nights, total {} $)",
                format_day(&from),
                format_day(&to),
                status,
                quote.nights,
                quote.total_cost
            );
            println!("Earliest check-out for this check-in: {}", format_day(&earliest_check_out(from)));
        }
        Command::Book { id, from, to, guests } => {
            let session = establish_session(settings, &client, false).await?;
            let service = BookingService::new(client);
            let mut calendar = service.open_calendar(&id).await?;
            let booking = service
                .book(
                    &session,
                    &mut calendar,
                    BookingRequest {
                        date_from: from,
                        date_to: to,
                        guests,
                        venue_id: id,
                    },
                )
                .await?;
            println!("✅ Booking successful! Booking ID: {}", booking.id);
        }
        Command::Bookings => {
            let session = establish_session(settings, &client, false).await?;
            let profile = ProfileService::new(client).load_profile(&session).await?;
            let summaries = summarize_bookings(&profile)?;
            if summaries.is_empty() {
                println!("No bookings found.");
            }
            for summary in summaries {
                println!(
                    "{}  {}  {} → {}  {} guests  {} nights  total {} $",
                    summary.booking.id,
                    summary.venue_name,
                    format_day(&summary.booking.date_from),
                    format_day(&summary.booking.date_to),
                    summary.booking.guests,
                    summary.nights,
                    summary.total_cost
                );
            }
        }
        Command::CancelBooking { id } => {
            let session = establish_session(settings, &client, false).await?;
            BookingService::new(client).cancel(&session, &id).await?;
            println!("🗑️ Booking {} deleted", id);
        }
        Command::Login => {
            let session = login_session(settings, &client).await?;
            let user = session.require_user()?;
            let creds = session.credentials()?;
            println!("export HOLIDAZE_USER={}", user.name);
            println!("export HOLIDAZE_ACCESS_TOKEN={}", creds.access_token);
            println!("export HOLIDAZE_API_KEY={}", creds.api_key);
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
            avatar,
            venue_manager,
        } => {
            let request = RegisterRequest {
                avatar: avatar.map(|url| Media {
                    url,
                    alt: name.clone(),
                }),
                name,
                email,
                password,
                confirm_password,
                venue_manager,
            };
            let profile = AuthService::new(client).register(&request).await?;
            println!("✅ Registration successful! Welcome, {}", profile.name);
        }
        Command::MyVenues => {
            let session = establish_session(settings, &client, false).await?;
            let venues = ProfileService::new(client).owned_venues(&session).await?;
            for venue in venues {
                println!("{}  {}  {} $/night", venue.id, venue.name, venue.price);
            }
        }
        Command::CreateVenue { file } => {
            let session = establish_session(settings, &client, true).await?;
            let draft = read_draft(&file)?;
            let venue = VenueService::new(client).create(&session, &draft).await?;
            println!("✅ Venue created: {} ({})", venue.name, venue.id);
        }
        Command::UpdateVenue { id, file } => {
            let session = establish_session(settings, &client, true).await?;
            let draft = read_draft(&file)?;
            let venue = VenueService::new(client).update(&session, &id, &draft).await?;
            println!("✅ Venue updated: {} ({})", venue.name, venue.id);
        }
        Command::DeleteVenue { id } => {
            let session = establish_session(settings, &client, false).await?;
            VenueService::new(client).delete(&session, &id).await?;
            println!("🗑️ Venue {} deleted", id);
        }
        Command::SetManager { enabled } => {
            let mut session = establish_session(settings, &client, false).await?;
            let profile = ProfileService::new(client)
                .set_venue_manager(&mut session, enabled)
                .await?;
            println!("Venue manager: {}", profile.venue_manager);
        }
        Command::SetAvatar { url } => {
            let session = establish_session(settings, &client, false).await?;
            ProfileService::new(client).update_avatar(&session, &url).await?;
            println!("✅ Avatar updated");
        }
    }

    Ok(())
}

/// Builds a session from stored credentials, falling back to email/password login.
async fn establish_session(
    settings: &Settings,
    client: &HolidazeClient,
    refresh_profile: bool,
) -> Result<Session> {
    let Some(mut session) = settings.stored_session() else {
        return login_session(settings, client).await;
    };

    if refresh_profile {
        let profile = ProfileService::new(client.clone())
            .load_profile(&session)
            .await?;
        session.set_venue_manager(profile.venue_manager);
    }
    Ok(session)
}

async fn login_session(settings: &Settings, client: &HolidazeClient) -> Result<Session> {
    match settings.login_credentials() {
        Some((email, password)) => AuthService::new(client.clone()).login(email, password).await,
        None => Err(HolidazeError::MissingConfigError {
            field: "credentials (--user/--access-token/--api-key or --email/--password)"
                .to_string(),
        }),
    }
}

fn read_draft(path: &Path) -> Result<VenueDraft> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
