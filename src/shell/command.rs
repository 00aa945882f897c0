//! Shell command execution.

use crate::error::{EnvCheckError, Result};
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed after exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Shell executable override (None = detect from environment).
    pub shell: Option<String>,

    /// Give up on the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Execute a shell command, capturing stdout and stderr separately.
///
/// Spawn and wait failures are returned as errors. A non-zero exit or a
/// timeout is a normal [`CommandResult`] with `success == false`.
///
/// The timeout covers the whole call: a command that exits but leaves a
/// background process holding its output open still times out.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let deadline = options.timeout.map(|limit| start + limit);

    let shell = options.shell.clone().unwrap_or_else(super::detect_shell);

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to spawn {} for '{}': {}", shell, command, e);
        EnvCheckError::CommandFailed {
            command: command.to_string(),
            message: e.to_string(),
        }
    })?;

    // Pipes are drained on their own threads so a chatty child never blocks
    // on a full pipe buffer while we wait on it. The readers are never
    // joined; their output arrives over the channel.
    let (tx, rx) = mpsc::channel();
    drain(child.stdout.take(), Stream::Stdout, tx.clone());
    drain(child.stderr.take(), Stream::Stderr, tx);

    let status = match deadline {
        None => child.wait()?,
        Some(deadline) => match wait_until(&mut child, deadline)? {
            Some(status) => status,
            None => {
                tracing::debug!("Killed '{}' at its deadline", command);
                return Ok(CommandResult::timed_out(start.elapsed()));
            }
        },
    };

    let Some((stdout, stderr)) = collect(&rx, deadline) else {
        tracing::debug!("'{}' exited but its output stayed open past the deadline", command);
        return Ok(CommandResult::timed_out(start.elapsed()));
    };
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Wait for the child, killing it once `deadline` passes.
fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Gather both streams. Returns `None` if `deadline` passes first.
fn collect(rx: &Receiver<(Stream, String)>, deadline: Option<Instant>) -> Option<(String, String)> {
    let mut stdout = None;
    let mut stderr = None;

    while stdout.is_none() || stderr.is_none() {
        let received = match deadline {
            None => rx.recv().ok(),
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(message) => Some(message),
                    Err(RecvTimeoutError::Timeout) => return None,
                    Err(RecvTimeoutError::Disconnected) => None,
                }
            }
        };

        match received {
            Some((Stream::Stdout, text)) => stdout = Some(text),
            Some((Stream::Stderr, text)) => stderr = Some(text),
            None => break,
        }
    }

    Some((stdout.unwrap_or_default(), stderr.unwrap_or_default()))
}

fn drain<R>(pipe: Option<R>, stream: Stream, tx: Sender<(Stream, String)>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lc` (login, non-interactive) on Unix so that version managers
/// initialized from `.profile`/`.zprofile` (mise, asdf, nvm, rbenv) are on
/// PATH when probing versions. Interactive shells are avoided: several
/// probes run at once and must not compete for the terminal.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}
