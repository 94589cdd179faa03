use super::TICK;
use std::sync::atomic::{AtomicU8, AtomicU32, Ordering};
use strum_macros::Display;
use tokio::sync::{Notify, mpsc::UnboundedSender};

/// Notifications produced by a single [`Countdown`] run, in production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountdownEvent {
    /// Emitted once per step with the current value, starting at `max` and ending at `0`.
    Tick(u32),
    /// Emitted exactly once after the last step. `completed` is `false` if the run was stopped.
    Finished { completed: bool },
}

#[derive(Debug, Display, PartialEq, Eq)]
pub(crate) enum CountdownError {
    Running,
}

impl std::error::Error for CountdownError {}

/// A one-shot countdown stepping from `max` to `0` once per [`TICK`].
///
/// A run moves through `IDLE -> RUNNING [-> STOPPING] -> IDLE`. Only the driving call to
/// [`Countdown::start`] leaves or re-enters `IDLE`, after its finished notification is sent;
/// [`Countdown::stop`] only moves `RUNNING` to `STOPPING` and wakes the current suspension.
#[derive(Debug)]
pub(crate) struct Countdown {
    /// Start value of the next run.
    max: AtomicU32,
    /// Value of the last emitted tick.
    current: AtomicU32,
    /// One of `IDLE`, `RUNNING` or `STOPPING`.
    phase: AtomicU8,
    /// Wakes the suspension of an active run on `stop()`.
    stop_signal: Notify,
}

impl Countdown {
    const IDLE: u8 = 0;
    const RUNNING: u8 = 1;
    const STOPPING: u8 = 2;

    pub(crate) fn new(from: u32) -> Self {
        Self {
            max: AtomicU32::new(from),
            current: AtomicU32::new(from),
            phase: AtomicU8::new(Self::IDLE),
            stop_signal: Notify::new(),
        }
    }

    pub(crate) fn max(&self) -> u32 { self.max.load(Ordering::Acquire) }

    pub(crate) fn current(&self) -> u32 { self.current.load(Ordering::Acquire) }

    /// Whether a run is being driven, including a stopped run that has not finished yet.
    pub(crate) fn is_running(&self) -> bool { self.phase.load(Ordering::Acquire) != Self::IDLE }

    fn is_stop_requested(&self) -> bool { self.phase.load(Ordering::Acquire) == Self::STOPPING }

    /// Drives one countdown run to its end, sending every notification to `events`.
    ///
    /// # Arguments
    /// * `events` – Receives the ticks and the final `Finished` notification. The sender is
    ///   dropped when this call returns, closing the channel.
    ///
    /// # Returns
    /// * `None` – A run was already active, nothing was emitted.
    /// * `Some(completed)` – The run ended, `completed` mirrors the `Finished` notification.
    pub(crate) async fn start(&self, events: UnboundedSender<CountdownEvent>) -> Option<bool> {
        if self
            .phase
            .compare_exchange(Self::IDLE, Self::RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let from = self.max();
        self.current.store(from, Ordering::Release);

        for t in (0..=from).rev() {
            // registered before the flag check so a concurrent `stop()` cannot be missed
            let stopped = self.stop_signal.notified();
            tokio::pin!(stopped);
            stopped.as_mut().enable();

            if self.is_stop_requested() {
                break;
            }
            self.current.store(t, Ordering::Release);
            let _ = events.send(CountdownEvent::Tick(t));

            tokio::select! {
                biased;
                () = &mut stopped => {}
                () = tokio::time::sleep(TICK) => {}
            }
        }

        let completed = !self.is_stop_requested();
        let _ = events.send(CountdownEvent::Finished { completed });
        self.phase.store(Self::IDLE, Ordering::Release);
        Some(completed)
    }

    /// Requests the active run to end at its next suspension boundary. Never blocks.
    pub(crate) fn stop(&self) {
        let requested = self
            .phase
            .compare_exchange(Self::RUNNING, Self::STOPPING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if requested {
            self.stop_signal.notify_waiters();
        }
    }

    /// Rebinds the countdown length for the next run.
    ///
    /// # Errors
    /// Returns [`CountdownError::Running`] while a run is being driven.
    pub(crate) fn reset(&self, from: u32) -> Result<(), CountdownError> {
        if self.is_running() {
            return Err(CountdownError::Running);
        }
        self.max.store(from, Ordering::Release);
        self.current.store(from, Ordering::Release);
        Ok(())
    }
}
