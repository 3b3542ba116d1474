//! Lesson Watch CLI
//!
//! Terminal client for the lesson availability monitor.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use lesson_watch::console::{self, WatchArgs};
use lesson_watch::form::{self, MonitorForm, SearchForm};
use lesson_watch::{load_config, ClientConfig, NotifyMethod};
use tracing::Level;

const PASSWORD_ENV: &str = "LESSON_WATCH_PASSWORD";

#[derive(Parser)]
#[command(name = "lesson-watch")]
#[command(about = "Search lessons and watch them for open slots")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs)]
struct Credentials {
    /// Studio member id
    #[arg(long)]
    user_id: String,

    /// Studio password (falls back to LESSON_WATCH_PASSWORD, then a prompt)
    #[arg(long)]
    password: Option<String>,

    /// Lesson date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List the lessons on a date
    Search {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Watch lessons for open slots until Ctrl-C
    Watch {
        #[command(flatten)]
        credentials: Credentials,

        /// Lesson id to watch (repeatable)
        #[arg(long = "lesson", required = true)]
        lessons: Vec<String>,

        /// Send notifications by email to this address
        #[arg(long, conflicts_with = "webhook_token", required_unless_present = "webhook_token")]
        email: Option<String>,

        /// Send notifications through the messaging webhook with this token
        #[arg(long)]
        webhook_token: Option<String>,

        /// Backend check interval in minutes
        #[arg(long)]
        interval: Option<u32>,
    },
    /// Print the monitoring status
    Status,
    /// Stop monitoring
    Stop,
}

fn resolve_password(given: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(password) = given {
        return Ok(password);
    }
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        tracing::debug!("Using password from {}", PASSWORD_ENV);
        return Ok(password);
    }
    Ok(rpassword::prompt_password("Password: ")?)
}

fn search_form(credentials: Credentials) -> Result<SearchForm, Box<dyn std::error::Error>> {
    Ok(SearchForm {
        user_id: credentials.user_id,
        password: resolve_password(credentials.password)?,
        date: credentials.date.unwrap_or_else(form::today),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        ClientConfig::default()
    };

    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let local = tokio::task::LocalSet::new();
    match args.command {
        Command::Search { credentials } => {
            let form = search_form(credentials)?;
            local.run_until(console::search(config, form)).await?;
        }
        Command::Watch {
            credentials,
            lessons,
            email,
            webhook_token,
            interval,
        } => {
            let search = search_form(credentials)?;
            let method = if webhook_token.is_some() {
                NotifyMethod::Webhook
            } else {
                NotifyMethod::Email
            };
            let watch = WatchArgs {
                form: MonitorForm {
                    user_id: search.user_id,
                    password: search.password,
                    date: search.date,
                    method,
                    email: email.unwrap_or_default(),
                    webhook_token: webhook_token.unwrap_or_default(),
                    interval: interval.map(|m| m.to_string()).unwrap_or_default(),
                },
                lesson_ids: lessons,
            };
            local.run_until(console::watch(config, watch)).await?;
        }
        Command::Status => local.run_until(console::status(config)).await?,
        Command::Stop => local.run_until(console::stop(config)).await?,
    }

    Ok(())
}
