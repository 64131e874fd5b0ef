//! Command-line front end for the course site data layer.
//!
//! Prints every resource as pretty JSON so the static site build (or a human)
//! can consume it. Runs fully offline when no API is configured.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use course_site::auth::{login_url, AuthToken};
use course_site::config::loader::{ENV_API_URL, ENV_SNAPSHOTS};
use course_site::config::{resolve_config, SiteConfig};
use course_site::models::{Countdown, TeamFilter};
use course_site::observability::logging;
use course_site::{build, AuthStatus, DataLoader, WriteOutcome};

#[derive(Parser)]
#[command(name = "course-site")]
#[command(about = "Data client for the ES117 course website", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Remote API base URL (overrides config and environment).
    #[arg(long)]
    api_url: Option<String>,

    /// Snapshot directory (overrides config and environment).
    #[arg(long)]
    snapshots: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List teams, optionally filtered by project type
    Teams {
        #[arg(long, default_value = "all")]
        kind: TeamFilter,
    },
    /// Show one team with its weekly updates
    Team { id: String },
    /// List weekly updates
    Updates {
        #[arg(long)]
        team: Option<String>,
    },
    /// List quotes
    Quotes,
    /// Show the quote of the day
    Quote,
    /// List the shoutout wall
    Shoutouts,
    /// List polls
    Polls,
    /// List gallery photos
    Photos,
    /// List comments on a team
    Comments { team: String },
    /// Show a team's upvote tally
    Upvotes { team: String },
    /// Home page bundle (stats, teams, quote, polls)
    Home,
    /// Check who the stored credential belongs to
    Whoami,
    /// Store a token, or the token carried by an OAuth redirect URL
    Login { token_or_redirect: String },
    /// Print the URL that starts the OAuth flow
    LoginUrl {
        #[arg(long, default_value = "http://localhost:3000/")]
        redirect: String,
    },
    /// Erase the stored credential
    Logout,
    /// Post a shoutout
    Shout { message: String },
    /// Create a poll
    NewPoll {
        question: String,
        #[arg(required = true, num_args = 2..)]
        options: Vec<String>,
    },
    /// Vote in a poll
    Vote { poll: i64, option: i64 },
    /// Comment on a team
    Comment { team: String, text: String },
    /// Upvote a team
    Upvote { team: String },
    /// Time left until demo day
    Countdown,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Flags override the environment; both are validated with the file
    let snapshots = cli.snapshots.as_ref().map(|p| p.display().to_string());
    let lookup = |key: &str| match key {
        ENV_API_URL if cli.api_url.is_some() => cli.api_url.clone(),
        ENV_SNAPSHOTS if snapshots.is_some() => snapshots.clone(),
        _ => std::env::var(key).ok(),
    };
    let config = match resolve_config(cli.config.as_deref(), lookup) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::debug!(
        api = config.api.base_url.as_deref().unwrap_or("<static only>"),
        snapshots = %config.snapshots.root.display(),
        "Configuration loaded"
    );

    let loader = build(&config);
    match run(cli.command, &config, &loader).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &SiteConfig, loader: &DataLoader) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let session = loader.session();

    match command {
        Commands::Teams { kind } => {
            let teams = loader.teams().await;
            print_json(&kind.apply(&teams))?;
        }
        Commands::Team { id } => match loader.team_detail(&id).await {
            Some(detail) => print_json(&detail)?,
            None => {
                eprintln!("Team '{}' not found", id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Updates { team } => {
            let updates = loader.updates().await;
            match team {
                Some(team) => print_json(&course_site::models::updates_for_team(&updates, &team))?,
                None => print_json(&updates)?,
            }
        }
        Commands::Quotes => print_json(&loader.quotes().await)?,
        Commands::Quote => print_json(&loader.quote_of_the_day(SystemTime::now()).await)?,
        Commands::Shoutouts => print_json(&loader.shoutouts().await)?,
        Commands::Polls => print_json(&loader.polls().await)?,
        Commands::Photos => print_json(&loader.photos().await)?,
        Commands::Comments { team } => print_json(&loader.comments(&team).await)?,
        Commands::Upvotes { team } => print_json(&loader.upvotes(&team).await)?,
        Commands::Home => print_json(&loader.home(SystemTime::now()).await)?,
        Commands::Whoami => {
            let status = session.identify().await;
            print_json(&status)?;
            if status == AuthStatus::SignedOut {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Login { token_or_redirect } => {
            let stored = if token_or_redirect.contains("://") {
                session.login_from_redirect(&token_or_redirect)?
            } else {
                match AuthToken::new(token_or_redirect) {
                    Some(token) => {
                        session.login(token)?;
                        true
                    }
                    None => false,
                }
            };
            if !stored {
                eprintln!("No token found");
                return Ok(ExitCode::FAILURE);
            }
            print_json(&session.identify().await)?;
        }
        Commands::LoginUrl { redirect } => match session.client().base() {
            Some(base) => println!("{}", login_url(base, &redirect)?),
            None => {
                eprintln!("No API configured; sign-in is unavailable in static mode");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Logout => session.logout()?,
        Commands::Shout { message } => return report(session.post_shoutout(&message).await),
        Commands::NewPoll { question, options } => return report(session.create_poll(&question, &options).await),
        Commands::Vote { poll: poll_id, option } => {
            let polls = loader.polls().await;
            let Some(poll) = polls.iter().find(|p| p.id == poll_id) else {
                eprintln!("Poll {} not found", poll_id);
                return Ok(ExitCode::FAILURE);
            };
            return report(session.vote(poll, option).await);
        }
        Commands::Comment { team, text } => return report(session.post_comment(&team, &text).await),
        Commands::Upvote { team } => return report(session.upvote(&team).await),
        Commands::Countdown => match config.event.demo_day_unix {
            Some(event) => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs();
                print_json(&serde_json::json!({
                    "event": config.event.name,
                    "countdown": Countdown::until(event, now),
                }))?;
            }
            None => {
                eprintln!("No demo day configured (event.demo_day_unix)");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn report<T: Serialize>(outcome: WriteOutcome<T>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    print_json(&outcome)?;
    Ok(if outcome.is_committed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
