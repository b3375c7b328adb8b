//! CLI entry point for dyad-tree

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use dyad_tree::{TreeError, TreeRenderer, print_report, write_report};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dyad-tree")]
#[command(about = "Generate JPNB-DYAD project tree structure")]
#[command(version)]
struct Args {
    /// Path to generate tree from
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Output file path (empty to skip writing)
    #[arg(short, long, default_value = "HELPFILES/project_structure.txt")]
    output: String,

    /// Maximum folder depth to display
    #[arg(short = 'L', long = "max-depth", default_value_t = 4)]
    max_depth: usize,

    /// Output the walked tree as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), TreeError> {
    let renderer = TreeRenderer::new();
    let report = renderer.report(&args.path, args.max_depth)?;

    let contents = if args.json {
        let json = report.to_json()?;
        println!("{}", json);
        json
    } else {
        print_report(&report, should_use_color(args.color)).map_err(TreeError::Output)?;
        report.to_text()
    };

    if !args.output.is_empty() {
        write_report(Path::new(&args.output), &contents)?;
        println!("\nProject structure saved to {}", args.output);
    }

    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("dyad-tree: {}", e);
        process::exit(1);
    }
}
