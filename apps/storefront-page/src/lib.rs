//! # Storefront Page Library
//!
//! Headless runtime for the storefront page. It owns one [`Session`] and
//! turns page events into cart and contact-form commands.
//!
//! ## Module Organization
//! ```text
//! storefront_page/
//! ├── lib.rs          ◄─── You are here (logging, event loop)
//! ├── session.rs      ◄─── Session + PageEvent routing
//! ├── feedback.rs     ◄─── "Added!" button flash and delayed revert
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── page.rs     ◄─── Visible page surface
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── contact.rs  ◄─── Contact form commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Event Loop
//! ```text
//! stdin (one JSON PageEvent per line)
//!      │
//!      ▼
//! Session::dispatch_json ──► command ──► PageSurface updated
//!      │
//!      ▼
//! stdout (one JSON EventOutput per line: response or error, plus page)
//! ```

pub mod commands;
pub mod error;
pub mod feedback;
pub mod session;
pub mod state;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use session::{CommandResponse, PageEvent, Session};
pub use state::{ConfigState, PageSurface};

/// One line of output per input event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<CommandResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub page: PageSurface,
}

impl EventOutput {
    fn new(result: Result<CommandResponse, ApiError>, page: PageSurface) -> Self {
        let (response, error) = match result {
            Ok(response) => (Some(response), None),
            Err(error) => (None, Some(error)),
        };
        EventOutput {
            response,
            error,
            page,
        }
    }
}

/// Runs the stdin/stdout event loop until stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG`)
/// 2. Load configuration from the environment
/// 3. Start a session with an empty cart
/// 4. Dispatch events until EOF
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(?config, "Configuration loaded");

    let session = Session::new(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = session.dispatch_json(&line);
        if let Err(err) = &result {
            warn!(code = ?err.code, message = %err.message, "Event not applied");
        }

        let output = EventOutput::new(result, session.snapshot());
        let mut encoded = serde_json::to_vec(&output)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    info!(session_id = %session.id(), "Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_page=trace` - Trace this crate only
/// - Default: INFO, DEBUG for this crate
///
/// Logs go to stderr; stdout carries the event output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_page=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_output_shapes() {
        let session = Session::default();

        let ok = EventOutput::new(session.dispatch_json(r#"{"type":"get_cart"}"#), session.snapshot());
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["response"]["kind"], "cart");
        assert!(json.get("error").is_none());
        assert_eq!(json["page"]["cartTotal"], "Total: $0.00");

        let bad = EventOutput::new(session.dispatch_json("not json"), session.snapshot());
        let json = serde_json::to_value(&bad).unwrap();
        assert!(json.get("response").is_none());
        assert_eq!(json["error"]["code"], "INVALID_EVENT");
    }
}
