//! StagePass CLI - sign in to the event platform from a terminal.
//!
//! A thin consumer of the session gate: `login` runs the email/password
//! flow, `status` hydrates and prints the current session, `logout`
//! signs out and clears the mirrored session state.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stagepass::gate::{RequestHooks, DASHBOARD_ROUTE};
use stagepass::nav::TracingNavigator;
use stagepass::{AuthClient, Config, FileStore, SessionGate, SessionState};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("StagePass CLI starting");

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("login") => login().await,
        Some("status") => status().await,
        Some("logout") => logout().await,
        _ => {
            eprintln!("Usage: stagepass <login|status|logout>");
            Ok(())
        }
    }
}

fn build_gate(config: &Config) -> Result<SessionGate<AuthClient>> {
    let api = AuthClient::new(config.auth_base_url())?;
    let store = Arc::new(FileStore::new(config.cache_dir()?)?);
    Ok(SessionGate::new(api, store))
}

/// Prints progress around the sign-in request
struct ConsoleHooks;

impl RequestHooks for ConsoleHooks {
    fn on_request(&mut self) {
        println!("\nSigning in...");
    }

    fn on_success(&mut self) {
        println!("Sign-in successful!");
    }
}

async fn login() -> Result<()> {
    let mut config = Config::load()?;
    let gate = build_gate(&config)?;

    println!("\n=== StagePass Login ===\n");

    let email = prompt_email(config.last_email.as_deref())?;
    let password = rpassword::prompt_password("Password: ")?;

    let mut hooks = ConsoleHooks;
    let mut nav = TracingNavigator;
    let data = gate
        .sign_in_with_email(&email, &password, DASHBOARD_ROUTE, &mut hooks, &mut nav)
        .await?;

    config.last_email = Some(email);
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "Failed to save config");
    }

    println!("Signed in as {} ({})", data.user.email, data.user.id);
    Ok(())
}

async fn status() -> Result<()> {
    let config = Config::load()?;
    let gate = build_gate(&config)?;

    match gate.hydrate().await? {
        SessionState::Authenticated(data) => {
            println!("Signed in as {} ({})", data.user.email, data.user.id);
            if let Some(minutes) = data.minutes_until_expiry() {
                println!("Session expires in {}m", minutes);
            }
        }
        SessionState::Unauthenticated => println!("Not signed in."),
        SessionState::Pending => unreachable!("hydrate resolves the pending state"),
    }
    Ok(())
}

async fn logout() -> Result<()> {
    let config = Config::load()?;
    let gate = build_gate(&config)?;

    gate.sign_out().await?;
    println!("Signed out.");
    Ok(())
}

fn prompt_email(last_email: Option<&str>) -> Result<String> {
    match last_email {
        Some(last) => print!("Email [{}]: ", last),
        None => print!("Email: "),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        if let Some(last) = last_email {
            return Ok(last.to_string());
        }
    }
    Ok(input.to_string())
}
