//! buildhook entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Wire observability**: configure `tracing-subscriber` with an
//!    `EnvFilter` (`RUST_LOG`, default `info`) writing to stderr. Setting
//!    `BUILDHOOK_LOG_FORMAT=json` switches to the JSON layer.
//! 2. **Load configuration**: read `BUILDHOOK_*` overrides onto the
//!    [`listener::ServerConfig`] defaults and validate them.
//! 3. **Run**: spawn the print consumer on the queue, serve webhooks over HTTP
//!    until Ctrl-C, then shut the queue down and wait for the consumer to
//!    finish delivering what was already accepted.

mod print;

use anyhow::Context;
use listener::{run_consumer, Server, ServerConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::print::PrintHandler;

const LOG_FORMAT_ENV: &str = "BUILDHOOK_LOG_FORMAT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env().context("failed to read configuration")?;
    let server = Server::new(config).context("invalid configuration")?;

    let stream = server.queue().drain()?;
    let consumer = tokio::spawn(run_consumer(stream, PrintHandler::stdout()));

    let shutdown = server.queue().shutdown_handle();
    listener::http::serve(&server, async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
        shutdown.trigger();
    })
    .await
    .context("webhook listener failed")?;

    server.queue().shutdown();
    let report = consumer.await.context("event consumer panicked")?;
    tracing::info!(handled = report.handled, failed = report.failed, "buildhook stopped");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
