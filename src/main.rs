use horizon_client::cli::{build_config, parse_args, run_cli_command, stream_to, CliCommand, USAGE};
use horizon_client::{cancel_after, CancellationToken, HorizonClient};

use color_eyre::Result;
use std::time::Duration;

/// Logs go to stderr so stdout carries only records.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("horizon_client=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Cancel `token` on Ctrl+C.
fn setup_interrupt_handler(token: CancellationToken) {
    // Install the handler - ignore errors if already set
    let _ = ctrlc::set_handler(move || {
        token.cancel();
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    if run_cli_command(&command) {
        return Ok(());
    }
    let CliCommand::Stream(args) = command else {
        return Ok(());
    };

    init_tracing();

    let cancel = CancellationToken::new();
    setup_interrupt_handler(cancel.clone());
    if let Some(seconds) = args.seconds {
        cancel_after(cancel.clone(), Duration::from_secs(seconds));
    }

    let client = HorizonClient::new(build_config(&args))?;
    tracing::info!(
        horizon_url = %client.horizon_url(),
        resource = ?args.resource,
        "Streaming"
    );

    let mut stdout = std::io::stdout();
    let written = stream_to(&client, &args, cancel, &mut stdout).await?;
    tracing::info!(records = written, "Stream finished");

    Ok(())
}
