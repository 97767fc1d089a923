use crate::core::{
    config::Config,
    error::{GitmuxError, Result},
    git::GitRepo,
    status::Status,
};
use crate::format::{json::JsonFormatter, tmux::TmuxFormatter, StatusFormatter};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Print the status of the repository containing `dir`.
///
/// Writes the tmux status string, or the raw status as JSON when `dbg` is set.
/// With a `timeout`, collection that runs longer fails with
/// [`GitmuxError::Timeout`] and nothing is written.
pub fn execute_status(
    dir: &Path,
    config: &Config,
    dbg: bool,
    timeout: Option<Duration>,
    out: &mut dyn Write,
) -> Result<()> {
    let status = match timeout {
        Some(limit) if !limit.is_zero() => {
            let dir = dir.to_path_buf();
            run_with_timeout(limit, move || collect_status(&dir))?
        }
        _ => collect_status(dir)?,
    };

    let tmux = TmuxFormatter::new(&config.tmux);
    let formatter: &dyn StatusFormatter = if dbg { &JsonFormatter } else { &tmux };

    formatter.format(out, &status)?;
    out.flush()?;
    Ok(())
}

/// Print the embedded default configuration
pub fn execute_print_config(out: &mut dyn Write) -> Result<()> {
    out.write_all(crate::core::config::DEFAULT_CONFIG.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn collect_status(dir: &Path) -> Result<Status> {
    GitRepo::open(dir)?.status()
}

/// Run `job` on a worker thread, giving up after `limit`.
///
/// The worker is left behind on timeout, the process exits before it matters.
fn run_with_timeout<T, F>(limit: Duration, job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(job());
    });

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            log::debug!("status collection still running after {limit:?}");
            Err(GitmuxError::Timeout(limit))
        }
        Err(RecvTimeoutError::Disconnected) => Err(GitmuxError::Io(std::io::Error::other(
            "status worker exited without a result",
        ))),
    }
}
