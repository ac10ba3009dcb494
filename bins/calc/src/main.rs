//! SDA Pay calculator
//!
//! Reads one JSON request from stdin and writes the JSON response to stdout.
//! Diagnostics go to stderr.

mod request;

use std::io::{self, Read, Write};

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sdapay_shared::AppConfig;

use crate::request::ErrorResponse;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load()?;

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let outcome = request::parse(&raw).and_then(|req| request::handle(req, &config));

    let mut stdout = io::stdout().lock();
    match outcome {
        Ok(response) => {
            serde_json::to_writer_pretty(&mut stdout, &response)?;
            writeln!(stdout)?;
            info!("Request completed");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            serde_json::to_writer_pretty(&mut stdout, &ErrorResponse::from(&err))?;
            writeln!(stdout)?;
            Err(err.into())
        }
    }
}

/// Human-readable logs on stderr, or JSON lines when `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sdapay=info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
