// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

pub use crate::cli::{Args, run, run_to};
pub use crate::config::{Config, load_config};
pub use crate::core::counter::{ClocCounter, LineCounter, parse_cloc_csv};
pub use crate::core::generator::{Page, generate, render_page};
pub use crate::core::render::{Substitution, substitute};
pub use crate::error::{FormatError, PageError, ToolFailure};
pub use crate::models::{PageStats, Placeholder};
