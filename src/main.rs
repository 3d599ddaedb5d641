use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use mdcanon::{DEFAULT_WIDTH, ItemMarkers, RenderOptions, format_markdown, rewrite};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Render Markdown documents in canonical CommonMark form")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Markdown files to format
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct FormatOpts {
    /// Soft-wrap width; 0 disables wrapping
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Write ordered list items with their ordinal instead of `1.`
    #[arg(long = "number-items")]
    number_items: bool,
}

impl From<FormatOpts> for RenderOptions {
    fn from(opts: FormatOpts) -> Self {
        let markers = if opts.number_items {
            ItemMarkers::Ordinal
        } else {
            ItemMarkers::Fixed
        };
        RenderOptions::default()
            .with_width(opts.width)
            .with_item_markers(markers)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line formatter.
///
/// Without file arguments the document is read from standard input and the
/// canonical rendering written to standard output. With `--in-place` every
/// file is rewritten, in parallel.
///
/// # Examples
///
/// ```sh
/// mdcanon notes.md
/// mdcanon --in-place --width 72 docs/*.md
/// cat notes.md | mdcanon --number-items
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let options = RenderOptions::from(cli.opts);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        io::stdout().write_all(format_markdown(&input, &options).as_bytes())?;
        return Ok(());
    }

    if cli.in_place {
        return cli.files.par_iter().try_for_each(|path| {
            rewrite(path, &options).with_context(|| format!("failed to rewrite {}", path.display()))
        });
    }

    let mut stdout = io::stdout().lock();
    for path in &cli.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        stdout.write_all(format_markdown(&content, &options).as_bytes())?;
    }
    Ok(())
}
