use anyhow::Result;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};

use game_host::{build_session, config::Config, driver, terminal::TerminalDisplay};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the game screen
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .init();

    info!("Loading words from directory: {}", config.words_directory.display());
    info!(
        "Scores stored in {} and {}",
        config.high_score_file.display(),
        config.score_history_file.display()
    );

    let mut session = build_session(&config);
    session.add_handler(Box::new(TerminalDisplay::new(std::io::stdout())));
    session.publish_initial_state();

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    tokio::select! {
        result = driver::run(&mut session, input, Duration::from_secs(1), &mut out) => result?,
        _ = signal::ctrl_c() => {
            warn!("Received Ctrl+C, leaving the game");
        }
    }

    info!("Goodbye.");
    Ok(())
}
