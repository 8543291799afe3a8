//! CLI entry point for maze search.
//!
//! Usage:
//!   maze-search solve <maze.json> [options]
//!   maze-search solve --stdin [options]
//!   maze-search render <maze.json>
//!
//! Options:
//!   --algorithm <dfs|bfs|both>  Search strategy to run (default: both)
//!   --shuffle                   Shuffle the edge list before building the graph
//!   --seed <n>                  Seed for --shuffle (default: random)
//!   --format <text|json>        Output format (default: text)
//!   --render                    Draw the maze with each path found
//!   --verbose                   Debug logging on stderr
//!
//! Exit codes: 0 when every search found a path (or the maze was drawn), 1
//! when at least one did not (or nothing could be drawn), 2 when the maze
//! could not be loaded.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use maze_search::{render, search, MazeConfig, RunReport, SearchReport, Strategy};

#[derive(Parser)]
#[command(name = "maze-search")]
#[command(about = "Find paths through a maze with depth-first and breadth-first search")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a path from the maze's start to its goal
    Solve {
        #[command(flatten)]
        input: InputArgs,

        /// Search strategy to run
        #[arg(long, value_enum, default_value_t = Algorithm::Both)]
        algorithm: Algorithm,

        /// Shuffle the edge list before building the graph
        #[arg(long)]
        shuffle: bool,

        /// Seed for --shuffle
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Draw the maze with each path found (text format only)
        #[arg(long = "render")]
        draw: bool,
    },

    /// Draw the maze without searching
    Render {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Path to maze JSON file (use --stdin to read from stdin)
    #[arg(value_name = "FILE", required_unless_present = "stdin")]
    file: Option<PathBuf>,

    /// Read maze from stdin instead of file
    #[arg(long, conflicts_with = "file")]
    stdin: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Both,
}

impl Algorithm {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            Algorithm::Dfs => &[Strategy::DepthFirst],
            Algorithm::Bfs => &[Strategy::BreadthFirst],
            Algorithm::Both => &[Strategy::DepthFirst, Strategy::BreadthFirst],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Solve {
            input,
            algorithm,
            shuffle,
            seed,
            format,
            draw,
        } => {
            let shuffle_seed = shuffle.then(|| seed.unwrap_or_else(rand::random));
            run_solve(&input, algorithm, shuffle_seed, format, draw)
        }
        Commands::Render { input } => run_render(&input),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "maze_search=debug"
    } else {
        "maze_search=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_maze(input: &InputArgs) -> anyhow::Result<MazeConfig> {
    if input.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read maze from stdin")?;
        return Ok(MazeConfig::from_json(&buffer)?);
    }

    match &input.file {
        Some(path) => Ok(MazeConfig::from_file(path)?),
        None => bail!("must provide either a file path or --stdin"),
    }
}

/// Returns whether every requested search found a path
fn run_solve(
    input: &InputArgs,
    algorithm: Algorithm,
    shuffle_seed: Option<u64>,
    format: Format,
    draw: bool,
) -> anyhow::Result<bool> {
    let mut maze = load_maze(input)?;
    if let Some(seed) = shuffle_seed {
        info!(seed, "shuffling edges");
        maze.shuffle_edges(seed);
    }

    let graph = maze.build_graph().context("failed to build maze graph")?;

    let results: Vec<_> = algorithm
        .strategies()
        .iter()
        .map(|&strategy| search(&graph, &maze.start, &maze.goal, strategy))
        .collect();

    let report = RunReport {
        start: maze.start.clone(),
        goal: maze.goal.clone(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        shuffle_seed,
        searches: results.iter().map(SearchReport::from).collect(),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            println!("{}", report);
            if draw {
                for result in results.iter().filter(|r| r.is_found()) {
                    print_drawing(&maze, &result.path, &format!("{} path", result.strategy));
                }
            }
        }
    }

    Ok(report.all_found())
}

fn run_render(input: &InputArgs) -> anyhow::Result<bool> {
    let maze = load_maze(input)?;
    Ok(print_drawing(&maze, &[], "Original maze"))
}

/// Returns whether anything was drawn
fn print_drawing(maze: &MazeConfig, path: &[String], title: &str) -> bool {
    match render(maze, path) {
        Some(drawing) => {
            println!("\n{}\n{}", title, drawing);
            true
        }
        None => {
            eprintln!("{}: maze has no drawable node positions", title);
            false
        }
    }
}
