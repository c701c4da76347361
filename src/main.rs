use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

mod logger;

use prompter_lex::chunking::{self, ChunkOptions, Chunker};
use prompter_lex::config::Settings;
use prompter_lex::doctor::Doctor;
use prompter_lex::i18n;
use prompter_lex::merging::Merger;
use prompter_lex::table::Table;
use prompter_lex::table::loader::{LoadOptions, load_table};
use prompter_lex::ui::{notice, preview};

#[derive(Debug, Parser)]
#[command(name = "prompter", version, about = "Split tables into CSV chunks and wrap each chunk in a prompt")]
struct Cli {
    /// Print the resulting paths as JSON instead of progress notices
    #[arg(long, global = true)]
    json: bool,

    /// UI language (en, zh-TW)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Read settings from this file only
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a table into chunk_<N>.csv files
    Chunk(ChunkArgs),
    /// Prepend a prompt to every chunk file and write <name>.md files
    Merge(MergeArgs),
    /// Chunk a table, then merge the prompt into the chunks
    Run(RunArgs),
    /// Render a merged document in the terminal
    Preview { file: PathBuf },
    /// Check configuration and output directories
    Doctor,
}

#[derive(Debug, Args)]
struct ChunkArgs {
    /// Table to split (.csv, .tsv or .json)
    table: PathBuf,

    /// Number of chunks
    #[arg(short = 'n', long = "chunks")]
    chunks: Option<usize>,

    /// Directory for the chunk files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter of a .csv table
    #[arg(long)]
    delimiter: Option<String>,

    /// Remove chunk files left over from a larger previous run
    #[arg(long)]
    clean: bool,

    /// Show the row ranges without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct PromptArgs {
    /// Prompt text
    #[arg(long, conflicts_with = "prompt_file")]
    prompt: Option<String>,

    /// File holding the prompt text
    #[arg(long)]
    prompt_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct MergeArgs {
    /// Directory holding the chunk files
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the merged documents
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    prompt: PromptArgs,
}

#[derive(Debug, Args)]
struct RunArgs {
    table: PathBuf,

    #[arg(short = 'n', long = "chunks")]
    chunks: Option<usize>,

    #[arg(long)]
    chunk_dir: Option<PathBuf>,

    #[arg(long)]
    merged_dir: Option<PathBuf>,

    #[arg(long)]
    delimiter: Option<String>,

    #[arg(long)]
    clean: bool,

    #[command(flatten)]
    prompt: PromptArgs,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    chunks: &'a [PathBuf],
    merged: &'a [PathBuf],
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logger::init_logger(cli.verbose)?;

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Settings::new().context("failed to load configuration")?,
    };

    i18n::set_locale(cli.lang.as_deref().unwrap_or(&settings.language));
    notice::set_quiet(cli.json);

    match cli.command {
        Command::Chunk(args) => {
            let table = read_table(&args.table, args.delimiter.as_deref(), &settings)?;
            let n_chunks = args.chunks.unwrap_or(settings.chunk_count);

            if args.dry_run {
                let ranges = chunking::plan(table.len(), n_chunks)?;
                if cli.json {
                    let planned: Vec<_> = ranges
                        .iter()
                        .enumerate()
                        .map(|(i, r)| {
                            json!({
                                "file": chunking::chunk_file_name(i + 1),
                                "start": r.start,
                                "end": r.end,
                                "rows": r.len(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&planned)?);
                } else {
                    for (i, r) in ranges.iter().enumerate() {
                        notice::chunk_planned(i + 1, r);
                    }
                }
                return Ok(());
            }

            let output = args.output.unwrap_or_else(|| PathBuf::from(&settings.chunk_dir));
            let options = ChunkOptions {
                clean_stale: args.clean || settings.clean_stale,
            };
            let paths = Chunker::chunk_with(&table, n_chunks, &output, &options)?;
            notice::chunks_summary(paths.len(), &output);
            print_json(cli.json, &paths)?;
        }
        Command::Merge(args) => {
            let input = args.input.unwrap_or_else(|| PathBuf::from(&settings.chunk_dir));
            let output = args.output.unwrap_or_else(|| PathBuf::from(&settings.merged_dir));
            let prompt = read_prompt(&args.prompt, &settings)?;

            let paths = Merger::merge(&prompt, &input, &output)?;
            notice::merged_summary(paths.len(), &output);
            print_json(cli.json, &paths)?;
        }
        Command::Run(args) => {
            let table = read_table(&args.table, args.delimiter.as_deref(), &settings)?;
            let n_chunks = args.chunks.unwrap_or(settings.chunk_count);
            let chunk_dir = args.chunk_dir.unwrap_or_else(|| PathBuf::from(&settings.chunk_dir));
            let merged_dir = args.merged_dir.unwrap_or_else(|| PathBuf::from(&settings.merged_dir));
            let prompt = read_prompt(&args.prompt, &settings)?;

            let options = ChunkOptions {
                clean_stale: args.clean || settings.clean_stale,
            };
            let chunks = Chunker::chunk_with(&table, n_chunks, &chunk_dir, &options)?;
            notice::chunks_summary(chunks.len(), &chunk_dir);

            let merged = Merger::merge(&prompt, &chunk_dir, &merged_dir)?;
            notice::merged_summary(merged.len(), &merged_dir);

            if cli.json {
                let output = RunOutput {
                    chunks: &chunks,
                    merged: &merged,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Command::Preview { file } => {
            preview::preview(&file)?;
        }
        Command::Doctor => {
            Doctor::check(&settings);
        }
    }

    Ok(())
}

fn read_table(path: &Path, delimiter: Option<&str>, settings: &Settings) -> Result<Table> {
    let options = LoadOptions::with_delimiter(delimiter.unwrap_or(&settings.delimiter))?;
    let table = load_table(path, &options)
        .with_context(|| format!("failed to load table {}", path.display()))?;
    notice::table_loaded(path, table.len(), table.headers().len());
    Ok(table)
}

fn read_prompt(args: &PromptArgs, settings: &Settings) -> Result<String> {
    let prompt = settings.resolve_prompt(args.prompt.as_deref(), args.prompt_file.as_deref())?;
    if prompt.is_empty() {
        tracing::warn!("Merging with an empty prompt");
        notice::prompt_empty();
    }
    Ok(prompt)
}

fn print_json(enabled: bool, paths: &[PathBuf]) -> Result<()> {
    if enabled {
        println!("{}", serde_json::to_string_pretty(paths)?);
    }
    Ok(())
}
