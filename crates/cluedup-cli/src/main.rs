#![deny(unsafe_code)]

mod tsv;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cluedup::{DedupConfig, remove_redundancies, subset};
use tracing_subscriber::EnvFilter;

/// Redundancy removal for quiz-bowl clue files
#[derive(Parser)]
#[command(name = "cluedup")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove redundant rows from a TSV clue file
    Dedup {
        /// Path to the clue TSV
        path: PathBuf,

        /// Answer substring filter (prompted for when omitted)
        #[arg(long)]
        ans_term: Option<String>,

        /// Clue substring filter (prompted for when omitted)
        #[arg(long)]
        clue_term: Option<String>,

        /// Answer-similarity cutoff
        #[arg(long, default_value_t = 0.70)]
        ans_thresh: f64,

        /// Clue-overlap cutoff
        #[arg(long, default_value_t = 0.55)]
        clue_thresh: f64,

        /// Minimum canonical-answer occurrences for a row to be scanned
        /// (0 disables skipping)
        #[arg(long, default_value_t = 3)]
        skip_thresh: usize,

        /// Compare raw answer lines instead of canonical ones
        #[arg(long)]
        raw_answers: bool,

        /// Sort canonical answers Z-0 instead of 0-Z
        #[arg(long)]
        descending: bool,

        /// Skip the interactive filter prompts
        #[arg(long)]
        no_prompt: bool,

        /// Output TSV path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter a clue file by answer/clue substring without deduplicating
    Subset {
        /// Path to the clue TSV
        path: PathBuf,

        /// Answer substring filter
        #[arg(long)]
        ans_term: Option<String>,

        /// Clue substring filter
        #[arg(long)]
        clue_term: Option<String>,

        /// Output TSV path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dedup {
            path,
            ans_term,
            clue_term,
            ans_thresh,
            clue_thresh,
            skip_thresh,
            raw_answers,
            descending,
            no_prompt,
            output,
        } => {
            let ans_term = resolve_term(
                ans_term,
                no_prompt,
                "Choose phrase to filter answer lines by, or press Enter to continue: ",
            )?;
            let clue_term = resolve_term(
                clue_term,
                no_prompt,
                "Choose phrase to filter clues by, or press Enter to continue: ",
            )?;

            let config = DedupConfig {
                ans_term,
                clue_term,
                skip_thresh: (skip_thresh > 0).then_some(skip_thresh),
                ans_thresh,
                clue_thresh,
                simplify_answers: !raw_answers,
                ascending: !descending,
            };

            let records = tsv::read_clues(&path)?;
            let total = records.len();
            let surviving = remove_redundancies(records, &config)?;
            eprintln!("{} of {} rows remain", surviving.len(), total);
            write_output(&surviving, output.as_deref())?;
        }

        Commands::Subset {
            path,
            ans_term,
            clue_term,
            output,
        } => {
            let records = tsv::read_clues(&path)?;
            let rows = subset(records, ans_term.as_deref(), clue_term.as_deref());
            write_output(&rows, output.as_deref())?;
        }

        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn resolve_term(flag: Option<String>, no_prompt: bool, label: &str) -> Result<Option<String>> {
    if flag.is_some() || no_prompt {
        return Ok(flag);
    }
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn write_output(records: &[cluedup::ClueRecord], output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => tsv::write_clues_to_path(records, path),
        None => tsv::write_clues(records, io::stdout().lock()),
    }
}
