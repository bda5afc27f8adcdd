use anyhow::Result;
use game_core::GameSession;
use game_types::{GameError, PlayerIntent};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::commands::parse_input;

/// Feed input lines and timer ticks into the session until input closes
pub async fn run<R, W>(
    session: &mut GameSession,
    input: R,
    tick_period: Duration,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut ticker = time::interval(tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;

            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed, leaving session {}", session.id());
                    break;
                };

                let was_running = session.is_timer_running();
                handle_line(session, &line, out)?;
                if !was_running && session.is_timer_running() {
                    // A round just started, count whole periods from now
                    ticker.reset();
                }
            }
            _ = ticker.tick(), if session.is_timer_running() => {
                session.dispatch(PlayerIntent::Tick)?;
            }
        }
    }

    Ok(())
}

fn handle_line<W: Write>(session: &mut GameSession, line: &str, out: &mut W) -> Result<()> {
    let intent = match parse_input(session.screen(), line) {
        Ok(intent) => intent,
        Err(e) => {
            writeln!(out, "! {}", e)?;
            return Ok(());
        }
    };

    debug!("Session {} dispatching {:?}", session.id(), intent);
    match session.dispatch(intent) {
        Ok(()) => {}
        Err(e @ GameError::InvalidState { .. }) => writeln!(out, "! {}", e)?,
        // Validation and data errors are already shown as warnings
        Err(e) => debug!("Intent rejected: {}", e),
    }
    out.flush()?;
    Ok(())
}
