//! Snakes & Ladders
//!
//! Terminal front-end. Plays a full demo game by default; set
//! `SNAKES_INTERACTIVE=1` to roll by pressing Enter.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::{
    VERSION,
    game::board::{ladders, snakes, validate_topology},
    session::{GameSession, SessionConfig, SharedSession, Snapshot},
};

/// Environment variable selecting the hot-seat prompt.
const INTERACTIVE_ENV: &str = "SNAKES_INTERACTIVE";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Snakes & Ladders v{}", VERSION);

    validate_topology().context("board topology is inconsistent")?;
    info!("Ladders: {:?}", ladders().collect::<Vec<_>>());
    info!("Snakes: {:?}", snakes().collect::<Vec<_>>());

    let config = SessionConfig::from_env().context("reading session config")?;
    let session = GameSession::start(&config).context("starting session")?;
    info!("Session {} with {} players (seed: {:?})", session.id(), config.player_count, config.seed);

    let shared = SharedSession::new(session);

    let interactive = std::env::var(INTERACTIVE_ENV).is_ok_and(|v| v == "1" || v == "true");
    if interactive {
        play_interactive(&shared).await?;
    } else {
        play_demo(&shared).await?;
    }

    report_results(&shared.snapshot().await);
    Ok(())
}

/// Roll for every player until the game ends.
async fn play_demo(shared: &SharedSession) -> Result<()> {
    info!("=== Starting Demo Game ===");

    while !shared.is_ended().await {
        if let Some(result) = shared.roll().await? {
            info!("[rolled {}] {}", result.roll, result.event);
        }
        shared.settle().await;
    }

    Ok(())
}

/// Hot-seat play: each Enter press rolls for the current player.
async fn play_interactive(shared: &SharedSession) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while !shared.is_ended().await {
        let snapshot = shared.snapshot().await;
        println!("{}", snapshot.message);
        print_positions(&snapshot);
        if let Some(player) = snapshot.current_player {
            println!("{player}: press Enter to roll (q to quit)");
        }

        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        if let Some(result) = shared.roll().await? {
            println!("Rolled a {}", result.roll);
        }
        shared.settle().await;
    }

    Ok(())
}

fn print_positions(snapshot: &Snapshot) {
    for player in &snapshot.players {
        println!("  {}: Position {}", player.index, player.position);
    }
}

fn report_results(snapshot: &Snapshot) {
    info!("=== Results ===");
    info!("{}", snapshot.message);
    for standing in &snapshot.standings {
        info!("#{}: {}", standing.place, standing.player);
    }
    info!("Turns played: {}", snapshot.turn);
    info!("Final State Hash: {}", snapshot.state_hash);
}
