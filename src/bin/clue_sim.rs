use std::path::PathBuf;

use clap::Parser;

use clue_engine::agents::AgentKind;
use clue_engine::core::GameConfig;
use clue_engine::driver::TurnDriver;
use clue_engine::rules::{GameBuilder, GameResult};

#[derive(Debug, Parser, Clone)]
#[command(name = "clue-sim")]
#[command(about = "Clue Simulator - play automated games and report who solved the murder")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 5)]
    games: u32,

    /// Seed for the first game; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Number of seats (2-6)
    #[arg(long)]
    players: Option<usize>,

    /// Comma-separated agent kinds, one per seat, repeated to fill the table
    /// (random, deduction)
    #[arg(long, value_delimiter = ',', default_value = "deduction")]
    agents: Vec<AgentKind>,

    /// Give up on a game after this many turns
    #[arg(long, default_value_t = clue_engine::driver::DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// JSON game config; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the summary
    #[arg(long)]
    quiet: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Error: cannot read {}: {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("Error: bad config {}: {e}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(players) = args.players {
        config.player_count = players;
    }
    config.check().map_err(|e| e.to_string())?;
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let base = load_config(&args).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });
    if args.agents.is_empty() {
        eprintln!("Error: at least one agent kind is required");
        std::process::exit(1);
    }

    let mut solved = 0u32;
    let mut unsolved = 0u32;
    let mut timed_out = 0u32;
    let mut total_turns = 0u64;

    for game_idx in 0..args.games {
        let config = GameConfig {
            seed: base.seed.wrapping_add(u64::from(game_idx)),
            ..base.clone()
        };
        let state = GameBuilder::new(config).build();
        let seed = state.config().seed;
        let agents = (0..state.player_count())
            .map(|seat| {
                let kind = args.agents[seat % args.agents.len()];
                kind.build(seed.wrapping_mul(31).wrapping_add(seat as u64))
            })
            .collect();

        let mut driver = TurnDriver::new(state, agents).with_max_turns(args.max_turns);
        let result = match driver.play() {
            Ok(result) => result,
            Err(err) => {
                eprintln!("Game {game_idx} (seed {seed}) stopped: {err}");
                continue;
            }
        };
        let state = driver.state();
        let turns = state.turn_number();
        total_turns += u64::from(turns);

        let line = match result {
            Some(GameResult::Winner(seat)) => {
                solved += 1;
                let envelope = state
                    .revealed_solution()
                    .map(|s| format!(" ({s})"))
                    .unwrap_or_default();
                format!("{} solved it on turn {turns}{envelope}", state.player(seat).name())
            }
            Some(GameResult::Unsolved) => {
                unsolved += 1;
                format!("everyone was eliminated on turn {turns}")
            }
            None => {
                timed_out += 1;
                format!("no result after {turns} turns")
            }
        };
        if !args.quiet {
            println!("Game {game_idx} (seed {seed}): {line}");
        }
    }

    println!(
        "{} games: {solved} solved, {unsolved} unsolved, {timed_out} hit the turn limit, {:.1} turns on average",
        args.games,
        if args.games == 0 {
            0.0
        } else {
            total_turns as f64 / f64::from(args.games)
        }
    );
}
