//! Print a daily SET board.
//!
//! ```bash
//! daily-set                       # today's board (America/New_York)
//! daily-set --seed -613341632     # replay a shared board
//! daily-set --date 2025-06-15 --solve
//! daily-set --matches 4 --json
//! ```
//!
//! Every option can also come from the environment (`DAILY_SET_SEED`,
//! `DAILY_SET_DATE`, `DAILY_SET_MATCHES`, ...). Diagnostics go to stderr and
//! honour `RUST_LOG`.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use daily_set::board_engine::{
    client::{board_json, share_url},
    helpers::{board_grid, card_name, triple_str},
    models::DEFAULT_MAX_SHUFFLES,
    seed::{date_key, parse_date, parse_seed, reference_date},
};
use daily_set::{find_matches, generate, Board, BoardError, BoardRequest, GenerationLimits, SeedSource};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "daily-set")]
#[command(about = "Deal the daily SET puzzle board")]
struct Args {
    /// Literal seed, as found in a shared link's `id` parameter.
    #[arg(long, alias = "id", env = "DAILY_SET_SEED", allow_hyphen_values = true, conflicts_with = "date")]
    seed: Option<String>,

    /// Calendar date (YYYY-MM-DD) whose daily board to deal. Defaults to today.
    #[arg(long, env = "DAILY_SET_DATE")]
    date: Option<String>,

    /// Exact number of matches the board must hold.
    #[arg(long, env = "DAILY_SET_MATCHES", default_value_t = 6)]
    matches: u32,

    /// Give up after this many full-deck shuffles.
    #[arg(long, env = "DAILY_SET_MAX_SHUFFLES", default_value_t = DEFAULT_MAX_SHUFFLES)]
    max_shuffles: u32,

    /// Search without a shuffle cap.
    #[arg(long, conflicts_with = "max_shuffles")]
    unbounded: bool,

    /// Give up after this many milliseconds.
    #[arg(long, env = "DAILY_SET_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Page the share link points at.
    #[arg(long, env = "DAILY_SET_BASE_URL", default_value = "set.html")]
    base_url: String,

    /// Print the board as JSON for the page instead of a text grid.
    #[arg(long)]
    json: bool,

    /// Also list every match on the board.
    #[arg(long)]
    solve: bool,

    /// Log the search at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn request(&self) -> Result<BoardRequest, BoardError> {
        let seed = match (&self.seed, &self.date) {
            (Some(seed), _) => SeedSource::Explicit(parse_seed(seed)?),
            (None, Some(date)) => SeedSource::Date(parse_date(date)?),
            (None, None) => SeedSource::Date(reference_date(chrono::Utc::now())),
        };
        let limits = GenerationLimits {
            max_shuffles: if self.unbounded { None } else { Some(self.max_shuffles) },
            time_budget: self.timeout_ms.map(Duration::from_millis),
        };
        Ok(BoardRequest::new(seed).with_target(self.matches).with_limits(limits))
    }
}

fn print_board(board: &Board, seed_source: SeedSource, args: &Args) {
    let label = match seed_source {
        SeedSource::Date(date) => format!("Daily SET for {}", date_key(date)),
        _ => "SET board".to_string(),
    };
    println!("{label}  (seed {}, {} matches)", board.seed, board.target_matches);
    println!();
    println!("{}", board_grid(board));
    println!();
    println!("Share: {}", share_url(&args.base_url, board.seed));

    if args.solve {
        println!();
        for (n, triple) in find_matches(&board.cards).iter().enumerate() {
            let names: Vec<String> = triple.cards.iter().map(card_name).collect();
            println!("{:>2}. {}  ({})", n + 1, triple_str(triple), names.join(", "));
        }
    }
}

fn run(args: &Args) -> Result<(), BoardError> {
    let request = args.request()?;
    let board = generate(request)?;

    if args.json {
        let mut value = board_json(&board);
        if args.solve {
            value["matches"] = find_matches(&board.cards)
                .iter()
                .map(|t| t.cards.iter().map(|c| c.index()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
                .into();
        }
        value["share_url"] = share_url(&args.base_url, board.seed).into();
        println!("{value:#}");
    } else {
        print_board(&board, request.seed, args);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(kind = ?err.kind(), "{err}");
            eprintln!("could not build the puzzle: {err}");
            ExitCode::FAILURE
        }
    }
}
