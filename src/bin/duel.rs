use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_ai::ai::{Agent, EvaluationPolicy};
use connect_four_ai::config::{AgentConfig, AppConfig};
use connect_four_ai::game::{Board, IdAllocator};

/// Pit two Connect Four search agents against each other.
#[derive(Parser)]
#[command(name = "duel", about = "Run a series of games between two agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "duel.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth for both agents
    #[arg(long)]
    depth: Option<u32>,
}

struct Side {
    agent: Box<dyn Agent>,
    policy: Box<dyn EvaluationPolicy>,
    depth: u32,
    wins: usize,
}

impl Side {
    fn new(config: &AgentConfig, ids: &IdAllocator) -> Self {
        Side {
            agent: config.build(ids),
            policy: config.difficulty.policy(),
            depth: config.depth,
            wins: 0,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.games = games;
    }
    if let Some(depth) = cli.depth {
        config.first.depth = depth;
        config.second.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let ids = IdAllocator::new();
    let mut first = Side::new(&config.first, &ids);
    let mut second = Side::new(&config.second, &ids);
    let mut draws = 0;

    for game in 0..config.games {
        // Alternate who starts
        let (starter, follower) = if game % 2 == 0 {
            (&mut first, &mut second)
        } else {
            (&mut second, &mut first)
        };
        match play_game(starter, follower) {
            Some(winner_id) => {
                if winner_id == starter.agent.id() {
                    starter.wins += 1;
                } else {
                    follower.wins += 1;
                }
            }
            None => draws += 1,
        }
    }

    println!(
        "{} (depth {}): {} wins",
        first.agent.name(),
        first.depth,
        first.wins
    );
    println!(
        "{} (depth {}): {} wins",
        second.agent.name(),
        second.depth,
        second.wins
    );
    println!("Draws: {draws}");

    Ok(())
}

/// Play one game; returns the winner's id, or `None` on a draw.
fn play_game(
    starter: &mut Side,
    follower: &mut Side,
) -> Option<connect_four_ai::game::PlayerId> {
    let mut board = Board::new();
    let mut turn = 0;

    loop {
        let starter_to_move = turn % 2 == 0;
        let (side, opponent_id) = if starter_to_move {
            let opp = follower.agent.id();
            (&mut *starter, opp)
        } else {
            let opp = starter.agent.id();
            (&mut *follower, opp)
        };

        let Some(col) =
            side.agent
                .choose_column(&board, side.depth, side.policy.as_ref(), opponent_id)
        else {
            return None; // board full
        };
        let mover = side.agent.id();
        board
            .drop_piece(col, mover)
            .expect("agents only choose open columns");

        if board.has_four_in_a_row(mover) {
            return Some(mover);
        }
        if board.is_full() {
            return None;
        }
        turn += 1;
    }
}
