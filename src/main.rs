// Entrypoint for the batch submitter.
// - Keeps `main` small: build the shared API client and hand it to `run`.
// - Returns `anyhow::Result` so unreadable or malformed input ends the
//   process with a nonzero exit.

use std::io;
use tracing_subscriber::EnvFilter;
use users_submit::{api::ApiClient, config::Config, submit::run};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only response bodies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let api = ApiClient::new(&config)?;

    let stdout = io::stdout();
    run(&config, &api, &mut stdout.lock())?;
    Ok(())
}
