// src/core/counter.rs
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{FormatError, PageError, ToolFailure};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Counts the lines of code in a single source file.
pub trait LineCounter {
    /// # Errors
    ///
    /// Returns `PageError::ExternalTool` when the count cannot be obtained and
    /// `PageError::Format` when the reported count is not a number.
    fn count_code_lines(&self, target: &Path) -> Result<u64, PageError>;
}

/// Runs `cloc` (or a compatible program) and reads its CSV report.
#[derive(Debug, Clone)]
pub struct ClocCounter {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ClocCounter {
    #[inline]
    #[must_use]
    pub const fn new(program: String, args: Vec<String>, timeout: Option<Duration>) -> Self {
        Self {
            program,
            args,
            timeout,
        }
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, target: &Path) -> Result<String, PageError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                let failure = if e.kind() == ErrorKind::NotFound {
                    ToolFailure::NotFound
                } else {
                    ToolFailure::Spawn(e)
                };
                PageError::tool(&self.program, failure)
            })?;

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);

        // Drained on their own threads so a chatty child cannot fill a pipe
        // and block while we wait on it.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait(&mut child, deadline)?;
        // A background process started by the child can hold the pipes open
        // after the child exits, so collecting output shares the deadline.
        let stdout = self.collect(&stdout, deadline)?;
        let stderr = self.collect(&stderr, deadline)?;

        if !status.success() {
            return Err(PageError::tool(
                &self.program,
                ToolFailure::Exit {
                    status: status.to_string(),
                    stderr: String::from_utf8_lossy(&stderr).trim().to_owned(),
                },
            ));
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn wait(&self, child: &mut Child, deadline: Option<Instant>) -> Result<ExitStatus, PageError> {
        let Some(deadline) = deadline else {
            return child
                .wait()
                .map_err(|e| PageError::tool(&self.program, ToolFailure::Spawn(e)));
        };

        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    // The child may already be gone; either way it gets reaped.
                    child.kill().ok();
                    child.wait().ok();
                    return Err(self.timed_out());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(PageError::tool(&self.program, ToolFailure::Spawn(e))),
            }
        }
    }

    fn collect(
        &self,
        output: &Receiver<Vec<u8>>,
        deadline: Option<Instant>,
    ) -> Result<Vec<u8>, PageError> {
        let Some(deadline) = deadline else {
            return Ok(output.recv().unwrap_or_default());
        };

        match output.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(buf) => Ok(buf),
            Err(RecvTimeoutError::Timeout) => Err(self.timed_out()),
            Err(RecvTimeoutError::Disconnected) => Ok(Vec::new()),
        }
    }

    fn timed_out(&self) -> PageError {
        PageError::tool(
            &self.program,
            ToolFailure::TimedOut(self.timeout.unwrap_or_default()),
        )
    }
}

impl LineCounter for ClocCounter {
    #[inline]
    fn count_code_lines(&self, target: &Path) -> Result<u64, PageError> {
        let report = self.run(target)?;
        parse_cloc_csv(&self.program, &report)
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            // A read error leaves a truncated report, which parsing rejects.
            pipe.read_to_end(&mut buf).ok();
        }
        // The receiver is gone once the run has timed out.
        tx.send(buf).ok();
    });
    rx
}

/// Extracts the code-line count from `cloc --quiet --csv` output.
///
/// The report starts with a blank line and a header, so the count sits in the
/// fifth column (`code`) of the third line.
///
/// # Errors
///
/// * `PageError::ExternalTool` if the report has fewer than three lines or the
///   third line has fewer than five fields
/// * `PageError::Format` if the field is not a non-negative integer
#[inline]
pub fn parse_cloc_csv(program: &str, report: &str) -> Result<u64, PageError> {
    let Some(line) = report.lines().nth(2) else {
        return Err(PageError::tool(
            program,
            ToolFailure::ShortOutput(report.lines().count()),
        ));
    };

    let fields: Vec<&str> = line.split(',').collect();
    let Some(field) = fields.get(4) else {
        return Err(PageError::tool(
            program,
            ToolFailure::MissingField(fields.len()),
        ));
    };

    let field = field.trim();
    field
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidLineCount(field.to_owned()).into())
}
