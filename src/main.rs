//! Omok: inspect five-in-a-row boards from the command line.
//!
//! ## Usage
//!
//! - `omok` - Run a random demo game
//! - `omok demo --size 15 --seed 7` - Random demo game with a fixed seed
//! - `omok check --first 5,10 --first 6,10 --second 9,11` - Place stones and
//!   report the winner

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use omok::constants::{DEFAULT_SIZE, MIN_WINNABLE_SIZE};
use omok::{Board, Place, Player};

/// Omok: a five-in-a-row board tracker
#[derive(Parser)]
#[command(name = "omok")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Place the given stones and report whether someone has won
    Check(CheckArgs),
    /// Let two players drop stones at random until the game ends
    Demo(DemoArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Stone for the first player, as X,Y
    #[arg(long = "first", value_parser = parse_place)]
    first: Vec<Place>,
    /// Stone for the second player, as X,Y
    #[arg(long = "second", value_parser = parse_place)]
    second: Vec<Place>,
    #[arg(long, default_value = "black")]
    first_name: String,
    #[arg(long, default_value = "white")]
    second_name: String,
}

#[derive(Args)]
struct DemoArgs {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Random seed; a fresh one is drawn if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check(args)) => run_check(&args),
        Some(Commands::Demo(args)) => run_demo(&args),
        None => run_demo(&DemoArgs {
            size: DEFAULT_SIZE,
            seed: None,
        }),
    }
}

/// Parse `X,Y` into a place. Negative numbers are rejected here since the
/// board only addresses non-negative coordinates.
fn parse_place(s: &str) -> Result<Place> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y but got {s:?}"))?;
    let coord = |v: &str| -> Result<usize> {
        let v = v.trim();
        let n: i64 = v.parse().with_context(|| format!("invalid coordinate {v:?}"))?;
        if n < 0 {
            bail!("coordinate {n} is out of range");
        }
        usize::try_from(n).with_context(|| format!("coordinate {n} is out of range"))
    };
    Ok(Place::new(coord(x)?, coord(y)?))
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let first = Player::new(args.first_name.as_str());
    let second = Player::new(args.second_name.as_str());
    let mut board = Board::new(args.size)?;

    for (player, places) in [(&first, &args.first), (&second, &args.second)] {
        for place in places {
            board
                .place_stone(place.x, place.y, player)
                .with_context(|| format!("cannot place {player}'s stone at {place}"))?;
        }
    }

    println!("{board}");
    report(&board);
    Ok(())
}

fn run_demo(args: &DemoArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);
    let players = [Player::new("X"), Player::new("O")];
    let mut board = Board::new(args.size)?;
    info!(seed, size = args.size, "starting demo game");
    if args.size < MIN_WINNABLE_SIZE {
        warn!(size = args.size, "board is too small for anyone to win");
    }

    let mut turn = 0;
    while !board.is_full() && board.winner().is_none() {
        let empty: Vec<Place> = board.empty_places().collect();
        // Not full, so there is at least one empty place.
        let place = empty[rng.usize(..empty.len())];
        let player = &players[turn % players.len()];
        board.place_stone(place.x, place.y, player)?;
        debug!(turn, %player, %place, "demo move");
        turn += 1;
    }

    println!("Seed: {seed}");
    println!("{board}");
    report(&board);
    Ok(())
}

fn report(board: &Board<'_>) {
    match (board.winner(), board.winning_row()) {
        (Some(winner), Some(row)) => {
            let row: Vec<String> = row.iter().map(Place::to_string).collect();
            println!("Winner: {winner}");
            println!("Winning row: {}", row.join(" "));
        }
        _ if board.is_full() => println!("No winner: the board is full"),
        _ => println!("No winner yet"),
    }
}
