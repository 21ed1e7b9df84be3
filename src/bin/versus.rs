//! Head-to-Head Equity
//!
//! Evaluates one matchup from the command line and prints the result
//! as JSON. Hold'em boards may be empty, a flop, a turn, or a river;
//! stud games take three to seven cards per hand plus optional dead
//! cards visible in other players' upcards.
//!
//! Options: --hero, --villain, --game, --board, --dead, --iterations, --seed

use clap::Parser;
use clap::ValueEnum;
use potshare::cards::hand::Hand;
use potshare::equity::config::EquityConfig;
use potshare::equity::engine::Engine;
use potshare::equity::stud::StudGame;

#[derive(Clone, Copy, ValueEnum)]
enum Game {
    Holdem,
    Razz,
    High,
    Hilo8,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hero's cards, spaced or packed ("As Kd" or "AsKd")
    #[arg(long)]
    hero: String,
    /// villain's cards
    #[arg(long)]
    villain: String,
    /// which showdown rule applies
    #[arg(long, value_enum, default_value = "holdem")]
    game: Game,
    /// community cards, hold'em only
    #[arg(long, default_value = "")]
    board: String,
    /// folded or exposed cards out of play, stud only
    #[arg(long, default_value = "")]
    dead: String,
    /// how many run-outs to simulate when sampling
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,
    /// fixed seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    potshare::log();
    let args = Args::parse();
    anyhow::ensure!(args.iterations > 0, "iterations must be positive");
    let engine = match args.seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::new(),
    };
    let hero = hand(&args.hero)?;
    let villain = hand(&args.villain)?;
    let report = match args.game {
        Game::Holdem => holdem(&engine, hero, villain, hand(&args.board)?, args.iterations)?,
        Game::Razz => stud(&engine, &args, hero, villain, StudGame::Razz)?,
        Game::High => stud(&engine, &args, hero, villain, StudGame::High)?,
        Game::Hilo8 => stud(&engine, &args, hero, villain, StudGame::HighLow8)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// exhaustive once the flop is down, sampled before it
fn holdem(
    engine: &Engine,
    hero: Hand,
    villain: Hand,
    board: Hand,
    iterations: usize,
) -> anyhow::Result<serde_json::Value> {
    anyhow::ensure!(
        matches!(board.size(), 0 | 3 | 4 | 5),
        "hold'em boards take 0, 3, 4, or 5 cards, got {}",
        board.size()
    );
    let matchup = serde_json::json!({
        "hero": hero.to_string(),
        "villain": villain.to_string(),
        "board": board.to_string(),
    });
    let mut report = matchup;
    if board.size() == 0 {
        let config = EquityConfig {
            max_iterations: iterations,
            ..EquityConfig::default()
        };
        let ref mut rng = engine.rng(0);
        let (equity, samples) = engine.converging(hero, villain, board, &config, rng)?;
        report["equity"] = serde_json::json!(equity);
        report["method"] = serde_json::json!("monte_carlo");
        report["samples"] = serde_json::json!(samples);
    } else {
        report["equity"] = serde_json::json!(engine.exact(hero, villain, board)?);
        report["method"] = serde_json::json!("exact");
    }
    Ok(report)
}

fn stud(
    engine: &Engine,
    args: &Args,
    hero: Hand,
    villain: Hand,
    game: StudGame,
) -> anyhow::Result<serde_json::Value> {
    let dead = hand(&args.dead)?;
    let ref mut rng = engine.rng(0);
    let result = engine.stud(hero, villain, dead, game, args.iterations, rng)?;
    Ok(serde_json::json!({
        "hero": hero.to_string(),
        "villain": villain.to_string(),
        "dead": dead.to_string(),
        "result": result,
    }))
}

/// cards in rank-then-suit pairs, whitespace optional between them
fn hand(s: &str) -> anyhow::Result<Hand> {
    const RANKS: &str = "23456789TJQKA";
    const SUITS: &str = "cdhs";
    let text = s.split_whitespace().collect::<String>();
    anyhow::ensure!(text.len() % 2 == 0, "dangling card character in {:?}", s);
    let mut cards = Vec::new();
    for pair in text.as_bytes().chunks(2) {
        let rank = RANKS
            .find(pair[0] as char)
            .ok_or_else(|| anyhow::anyhow!("unknown rank {:?}", pair[0] as char))?;
        let suit = SUITS
            .find(pair[1] as char)
            .ok_or_else(|| anyhow::anyhow!("unknown suit {:?}", pair[1] as char))?;
        cards.push((rank * 4 + suit) as u8);
    }
    Ok(Hand::try_from(cards.as_slice())?)
}
