//! Wordle Sieve - CLI
//!
//! Interactive solving, simulation against a known answer, benchmarking and
//! ranking over a five-letter word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_sieve::{
    commands::{BenchmarkConfig, Order, run_benchmark, run_interactive, simulate_answer, top_ranked},
    output::{print_benchmark_result, print_ranking, print_simulation},
    solver::{CountPolicy, SessionConfig},
    wordlists::{DEFAULT_CACHE, StoreOptions, WordStore},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle solver that filters a word list by accumulated feedback constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text word list (one word per line), read when no cache is present
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Binary word list cache, created from the text list when missing
    #[arg(long, global = true, default_value = DEFAULT_CACHE)]
    cache: PathBuf,

    /// Ignore the binary cache and always read the text list
    #[arg(long, global = true)]
    no_cache: bool,

    /// Candidate order for interactive solving
    #[arg(short, long, global = true, value_enum, default_value_t = Order::Ranked)]
    order: Order,

    /// Keep minimum letter counts across rounds instead of per round
    #[arg(long, global = true)]
    accumulate_counts: bool,

    /// Give up after this many guesses
    #[arg(long, global = true)]
    max_rounds: Option<usize>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): type the feedback the puzzle shows
    Solve,

    /// Solve a known answer in plain and ranked order
    Sim {
        /// The answer to solve
        answer: String,
    },

    /// Simulate every word in the list in both orders
    Bench {
        /// Only test this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Test words in random order
        #[arg(short, long)]
        shuffle: bool,
    },

    /// Show the top frequency-ranked words
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_rounds: self.max_rounds,
            count_policy: if self.accumulate_counts {
                CountPolicy::Accumulate
            } else {
                CountPolicy::PerRound
            },
        }
    }

    fn store_options(&self) -> StoreOptions {
        StoreOptions {
            cache: (!self.no_cache).then(|| self.cache.clone()),
            text: self.wordlist.clone(),
        }
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let store = WordStore::open(&cli.store_options()).context("failed to load the word list")?;
    let config = cli.session_config();

    // Default to interactive mode if no command given
    match cli.command.unwrap_or(Commands::Solve) {
        Commands::Solve => {
            let words = cli.order.arrange(store.words());
            run_interactive(&words, config, io::stdin().lock(), io::stdout())
                .context("interactive session failed")?;
        }
        Commands::Sim { answer } => {
            let result = simulate_answer(store.words(), &answer, config)
                .with_context(|| format!("cannot simulate {answer:?}"))?;
            print_simulation(&result, store.words(), cli.verbose > 0);
        }
        Commands::Bench { limit, shuffle } => {
            let count = limit.map_or(store.len(), |n| n.min(store.len()));
            println!("Running benchmark on {count} words...");
            let bench = BenchmarkConfig {
                limit,
                shuffle,
                session: config,
                progress: true,
            };
            let result = run_benchmark(store.words(), &bench).context("benchmark failed")?;
            print_benchmark_result(&result);
        }
        Commands::Rank { top } => {
            print_ranking(&top_ranked(store.words(), top), store.len());
        }
    }

    Ok(())
}
