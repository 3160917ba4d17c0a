//! dirdiff-html: directory tree comparison with an HTML report.

use anyhow::Result;
use clap::Parser;
use dirdiff_html::cli::run_diff;
use dirdiff_html::config::{AssetConfig, BehaviorConfig, DiffConfig, OutputConfig, TreePaths};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dirdiff-html")]
#[command(version)]
#[command(about = "Create an HTML diff report between two directory trees", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Compare two checkouts, report written to the current directory
    dirdiff-html v1.2/ v1.3/

    # Write into a directory, skipping build output and logs
    dirdiff-html old new reports/ -e '^target/' -e '\\.log$'

    # Explicit output file and a custom template
    dirdiff-html old new diff.html --template my-report.hbs")]
struct Cli {
    /// First (left, "a/") directory tree
    dir1: PathBuf,

    /// Second (right, "b/") directory tree
    dir2: PathBuf,

    /// Output file, or a directory to receive the derived
    /// diff_<name1>-<rev1>_<name2>-<rev2>.html filename
    output: Option<PathBuf>,

    /// Exclude paths matching this regex (repeatable, searched in the
    /// root-relative path)
    #[arg(short = 'e', long = "exclude", value_name = "REGEX")]
    exclude: Vec<String>,

    /// Handlebars template overriding the embedded one
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Stylesheet inlined into the report, overriding the embedded one
    #[arg(long, value_name = "PATH")]
    css: Option<PathBuf>,

    /// Script inlined into the report, overriding the embedded one
    #[arg(long, value_name = "PATH")]
    js: Option<PathBuf>,

    /// Token used when a tree's git revision cannot be determined
    #[arg(long, value_name = "TOKEN", default_value = "fallback")]
    rev_fallback: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = DiffConfig {
        paths: TreePaths {
            left: cli.dir1,
            right: cli.dir2,
        },
        excludes: cli.exclude,
        output: OutputConfig { path: cli.output },
        assets: AssetConfig {
            template: cli.template,
            css: cli.css,
            js: cli.js,
        },
        behavior: BehaviorConfig {
            quiet: cli.quiet,
            rev_fallback: cli.rev_fallback,
        },
    };

    run_diff(&config)?;
    Ok(())
}
