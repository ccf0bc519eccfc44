// src/core/generator.rs
use crate::config::Config;
use crate::core::counter::LineCounter;
use crate::core::inputs::{file_size, read_text};
use crate::core::render::{Substitution, substitute};
use crate::error::PageError;
use crate::models::{PageStats, Placeholder};

/// A rendered page together with the numbers that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub stats: PageStats,
}

/// Builds the page from the inputs named in `config`.
///
/// Inputs are read in a fixed order (template, source listing, line count,
/// minified bundle, gzip bundle) and the first failure aborts the run, so
/// no partial page is ever returned.
///
/// # Errors
///
/// This function may return an error if:
/// * Any input file is missing or unreadable (`PageError::FileNotFound`)
/// * The line counter fails or prints an unexpected report (`PageError::ExternalTool`)
/// * The count is not numeric, or strict substitution fails (`PageError::Format`)
#[inline]
pub fn render_page(config: &Config, counter: &dyn LineCounter) -> Result<Page, PageError> {
    let template = read_text(&config.inputs.template)?;
    let source = read_text(&config.inputs.source_listing)?;
    let code_lines = counter.count_code_lines(&config.line_counter.target)?;
    let minified_bytes = file_size(&config.inputs.minified_bundle)?;
    let gzip_bytes = file_size(&config.inputs.gzip_bundle)?;

    let stats = PageStats::new(minified_bytes, gzip_bytes, code_lines);
    let minified = stats.minified_kib();
    let gzip = stats.gzip_kib();
    let kloc = stats.kloc();

    let mode = if config.render.strict {
        Substitution::Strict
    } else {
        Substitution::Permissive
    };
    let html = substitute(
        &template,
        &[
            (Placeholder::Source, source.as_str()),
            (Placeholder::MinifiedSize, minified.as_str()),
            (Placeholder::GzipSize, gzip.as_str()),
            (Placeholder::Cloc, kloc.as_str()),
        ],
        mode,
    )?;

    Ok(Page { html, stats })
}

/// Same as [`render_page`], keeping only the HTML.
///
/// # Errors
///
/// See [`render_page`].
#[inline]
pub fn generate(config: &Config, counter: &dyn LineCounter) -> Result<String, PageError> {
    render_page(config, counter).map(|page| page.html)
}
