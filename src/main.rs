//! Tag Flow CLI
//!
//! Usage:
//!   tag-flow [OPTIONS] [FILE]
//!
//! Options:
//!   -w, --width <PX>       Container width (default 360)
//!   --exact                Fill the width instead of shrinking to fit
//!   -s, --style <FILE>     Style file (TOML format)
//!   --density <FACTOR>     Scale style lengths from dp to px
//!   -d, --debug            Log layout decisions to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tag_flow::{render, MeasureSpec, RenderConfig, TagStyle, DEFAULT_WIDTH};

#[derive(Parser)]
#[command(name = "tag-flow")]
#[command(about = "Lay out tag labels as wrapped chips and render them to SVG")]
struct Cli {
    /// Labels file, one label per line (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Container width in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Use the full width instead of shrinking to the widest line
    #[arg(long)]
    exact: bool,

    /// Style file (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Pixels per density-independent pixel applied to style lengths
    #[arg(long)]
    density: Option<f64>,

    /// Log layout decisions to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let style = match &cli.style {
        Some(path) => match TagStyle::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TagStyle::default(),
    };

    let style = match cli.density {
        Some(density) if density.is_finite() && density > 0.0 => style.scaled(density),
        Some(density) => {
            eprintln!("Error: density must be a positive number, got {}", density);
            std::process::exit(1);
        }
        None => style,
    };

    let width = match width_spec(cli.width, cli.exact) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let labels = parse_labels(&source);
    tracing::debug!(labels = labels.len(), width = cli.width, "rendering");

    let config = RenderConfig::new().with_style(style).with_width(width);
    println!("{}", render(&labels, &config));
}

/// The width constraint for `--width`, rejecting negative and non-finite values
fn width_spec(width: f64, exact: bool) -> Result<MeasureSpec, String> {
    if !width.is_finite() || width < 0.0 {
        return Err(format!("width must be a non-negative number, got {}", width));
    }
    Ok(if exact {
        MeasureSpec::Exact(width)
    } else {
        MeasureSpec::AtMost(width)
    })
}

/// One label per line, surrounding whitespace trimmed, blank lines skipped
fn parse_labels(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn print_intro() {
    println!(
        r##"Tag Flow - wrapped flow layout for tag chips

USAGE:
    tag-flow [OPTIONS] [FILE]
    printf 'rust\nlayout\nsvg\n' | tag-flow

OPTIONS:
    -w, --width <PX>      Container width (default 360)
    --exact               Fill the width instead of shrinking to fit
    -s, --style <FILE>    Style file (TOML)
    --density <FACTOR>    Scale style lengths from dp to px
    -d, --debug           Log layout decisions to stderr
    -h, --help            Print help

STYLE FILE:
    background = "#E3F2FD"
    text_color = "#1565C0"
    text_size = 14
    radius = 6
    divider = 8
    max_lines = 2
    padding = {{ left = 10, top = 4, right = 10, bottom = 4 }}"##
    );
}
