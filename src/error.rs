// src/error.rs
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Everything that can abort page generation.
#[derive(Debug, Error)]
pub enum PageError {
    /// A required input file is missing or unreadable.
    #[error("cannot read input file {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The line counter could not be run or produced unusable output.
    #[error("line counter `{program}` failed")]
    ExternalTool {
        program: String,
        #[source]
        failure: ToolFailure,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Debug, Error)]
pub enum ToolFailure {
    #[error("program not found on PATH")]
    NotFound,
    #[error("could not be started")]
    Spawn(#[source] io::Error),
    #[error("exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },
    #[error("did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("printed {0} line(s), expected at least 3")]
    ShortOutput(usize),
    #[error("third line has {0} field(s), expected at least 5")]
    MissingField(usize),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line count field {0:?} is not a non-negative integer")]
    InvalidLineCount(String),
    #[error("{} is not valid UTF-8", .0.display())]
    NotUtf8(PathBuf),
    #[error("placeholder {0} does not appear in the template")]
    MissingPlaceholder(&'static str),
    #[error("placeholder {token} appears {count} times in the template, expected once")]
    RepeatedPlaceholder { token: &'static str, count: usize },
}

impl PageError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn tool(program: &str, failure: ToolFailure) -> Self {
        Self::ExternalTool {
            program: program.to_owned(),
            failure,
        }
    }
}
