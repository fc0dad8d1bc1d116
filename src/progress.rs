//! Cosmetic "working..." indicator for long listings.
//!
//! A [`Spinner`] owns a background thread that repaints an indicatif spinner
//! at a fixed interval until the handle is stopped. The only thing shared with
//! the caller is the stop channel.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::config::ProgressConfig;

const TICK_CHARS: &str = "⣾⣽⣻⢿⡿⣟⣯⣷✓";

/// How the spinner ends its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    /// Leave a "done" line behind
    Done,
    /// Erase the spinner line
    Clear,
}

/// Outcome of stopping the background thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stopped {
    Joined,
    /// The join timed out; the thread finishes on its own
    Detached,
    NotRunning,
}

/// Options for starting a [`Spinner`].
#[derive(Debug, Clone)]
pub struct SpinnerOptions {
    /// Repaint interval
    pub tick_interval: Duration,
    /// Upper bound on waiting for the thread when stopping
    pub join_timeout: Duration,
    /// Draw nothing (quiet mode, tests)
    pub hidden: bool,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            join_timeout: Duration::from_secs(1),
            hidden: false,
        }
    }
}

impl From<&ProgressConfig> for SpinnerOptions {
    fn from(config: &ProgressConfig) -> Self {
        Self {
            tick_interval: config.tick_interval(),
            join_timeout: config.join_timeout(),
            hidden: !config.enabled,
        }
    }
}

/// Handle to a running progress indicator.
///
/// Stopping consumes the handle; dropping a running handle clears the line.
pub struct Spinner {
    stop_tx: Option<Sender<Finish>>,
    done_rx: mpsc::Receiver<()>,
    handle: Option<JoinHandle<()>>,
    join_timeout: Duration,
}

impl Spinner {
    /// Start repainting `message` on stderr.
    pub fn start(message: impl Into<String>, options: &SpinnerOptions) -> Self {
        let target = if options.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        Self::start_with_target(message, options, target)
    }

    pub fn start_with_target(
        message: impl Into<String>,
        options: &SpinnerOptions,
        target: ProgressDrawTarget,
    ) -> Self {
        let message = message.into();
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(
            ProgressStyle::with_template("{msg:.cyan} {spinner:.yellow}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars(TICK_CHARS),
        );
        bar.set_message(message.clone());

        let painter = bar.clone();
        Self::spawn(
            options,
            move || painter.tick(),
            move |finish| match finish {
                Finish::Done => bar.finish_with_message(format!("✓ {} completed!", message)),
                Finish::Clear => bar.finish_and_clear(),
            },
        )
    }

    /// Run `tick` every interval on a background thread until stopped, then `last_frame` once.
    fn spawn(
        options: &SpinnerOptions,
        mut tick: impl FnMut() + Send + 'static,
        last_frame: impl FnOnce(Finish) + Send + 'static,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<Finish>();
        let (done_tx, done_rx) = mpsc::channel::<()>();
        let interval = options.tick_interval;

        let spawned = thread::Builder::new()
            .name("diskman-spinner".into())
            .spawn(move || {
                let finish = loop {
                    tick();
                    match stop_rx.recv_timeout(interval) {
                        Ok(finish) => break finish,
                        Err(RecvTimeoutError::Timeout) => continue,
                        Err(RecvTimeoutError::Disconnected) => break Finish::Clear,
                    }
                };

                last_frame(finish);
                let _ = done_tx.send(());
            });

        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%err, "Could not start progress indicator");
                None
            }
        };

        Self {
            stop_tx: Some(stop_tx),
            done_rx,
            handle,
            join_timeout: options.join_timeout,
        }
    }

    /// Stop and leave a completion line. Returns once the last frame is drawn
    /// or the join timeout has passed, whichever comes first.
    pub fn finish(mut self) {
        self.shutdown(Finish::Done);
    }

    /// Stop and erase the spinner line.
    pub fn stop(mut self) {
        self.shutdown(Finish::Clear);
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn shutdown(&mut self, finish: Finish) -> Stopped {
        let Some(stop_tx) = self.stop_tx.take() else {
            return Stopped::NotRunning;
        };
        let Some(handle) = self.handle.take() else {
            return Stopped::NotRunning;
        };

        let _ = stop_tx.send(finish);
        match self.done_rx.recv_timeout(self.join_timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                let _ = handle.join();
                Stopped::Joined
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    timeout_ms = self.join_timeout.as_millis() as u64,
                    "Progress indicator did not stop in time, detaching"
                );
                Stopped::Detached
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.shutdown(Finish::Clear);
    }
}

/// Run `work` with a spinner showing `message`, stopping it before returning.
pub fn with_spinner<T>(message: &str, options: &SpinnerOptions, work: impl FnOnce() -> T) -> T {
    let spinner = Spinner::start(message, options);
    let result = work();
    spinner.stop();
    result
}
