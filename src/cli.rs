// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{Config, load_config};
use crate::core::counter::ClocCounter;
use crate::core::generator::render_page;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the nearest pagegen.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTML template holding the SOURCE, MINIFIED_SIZE, GZIP_SIZE and CLOC placeholders
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Pre-rendered source listing inlined in place of SOURCE
    #[arg(long)]
    pub source_listing: Option<PathBuf>,

    /// Minified bundle whose size replaces MINIFIED_SIZE
    #[arg(long)]
    pub minified_bundle: Option<PathBuf>,

    /// Gzipped bundle whose size replaces GZIP_SIZE
    #[arg(long)]
    pub gzip_bundle: Option<PathBuf>,

    /// Source file whose lines of code replace CLOC
    #[arg(long)]
    pub counted_source: Option<PathBuf>,

    /// Line counting program (e.g., "cloc")
    #[arg(long)]
    pub cloc: Option<String>,

    /// Argument passed to the line counter before the source path (repeatable)
    #[arg(long = "cloc-arg", allow_hyphen_values = true)]
    pub cloc_args: Vec<String>,

    /// Seconds to wait for the line counter, 0 to wait forever
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Fail unless every placeholder appears exactly once
    #[arg(long)]
    pub strict: bool,

    /// Print inputs and computed sizes to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Loads the config file (explicit or discovered) and applies flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable or a config
    /// file cannot be read or parsed.
    #[inline]
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => load_config(&env::current_dir()?)?,
        };

        let overrides = [
            (&self.template, &mut config.inputs.template),
            (&self.source_listing, &mut config.inputs.source_listing),
            (&self.minified_bundle, &mut config.inputs.minified_bundle),
            (&self.gzip_bundle, &mut config.inputs.gzip_bundle),
            (&self.counted_source, &mut config.line_counter.target),
        ];
        for (flag, slot) in overrides {
            if let Some(path) = flag {
                slot.clone_from(path);
            }
        }

        if let Some(program) = &self.cloc {
            config.line_counter.program.clone_from(program);
        }
        if !self.cloc_args.is_empty() {
            config.line_counter.args.clone_from(&self.cloc_args);
        }
        if let Some(secs) = self.timeout_secs {
            config.line_counter.timeout_secs = secs;
        }
        if self.strict {
            config.render.strict = true;
        }

        Ok(config)
    }
}

/// Generates the page and writes it to stdout.
///
/// # Errors
///
/// See [`run_to`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Generates the page and writes it to `out`. Nothing is written unless the
/// whole page was produced.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration cannot be loaded
/// * Any input file is missing or unreadable
/// * The line counter fails or its report cannot be parsed
/// * Strict substitution finds a missing or repeated placeholder
/// * Writing to `out` fails
#[inline]
pub fn run_to<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let config = args.resolve_config()?;
    let counter = ClocCounter::new(
        config.line_counter.program.clone(),
        config.line_counter.args.clone(),
        config.line_counter.timeout(),
    );

    if args.verbose {
        eprintln!("Template: {}", config.inputs.template.display());
        eprintln!("Source listing: {}", config.inputs.source_listing.display());
        eprintln!(
            "Counting lines with `{}` in {}",
            counter.program(),
            config.line_counter.target.display()
        );
    }

    let page = render_page(&config, &counter).with_context(|| {
        format!(
            "Failed to generate page from template: {}",
            config.inputs.template.display()
        )
    })?;

    if args.verbose {
        eprintln!(
            "Minified: {} bytes ({} KiB)",
            page.stats.minified_bytes,
            page.stats.minified_kib()
        );
        eprintln!(
            "Gzipped: {} bytes ({} KiB)",
            page.stats.gzip_bytes,
            page.stats.gzip_kib()
        );
        eprintln!(
            "Code: {} lines ({}k)",
            page.stats.code_lines,
            page.stats.kloc()
        );
    }

    out.write_all(page.html.as_bytes())
        .context("Failed to write page")?;
    out.flush().context("Failed to write page")?;
    Ok(())
}
