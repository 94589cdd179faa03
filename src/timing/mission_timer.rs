use super::TICK;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::{sync::mpsc::UnboundedSender, time::Instant};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct TimerState {
    elapsed: u64,
    /// Bumped on every `stop()`, a ticker task only increments while its generation is current.
    generation: u64,
    /// Wakes the ticker task of the active run.
    wake: Option<CancellationToken>,
}

/// Free-running mission elapsed timer counting whole seconds.
///
/// Every increment is sent over the tick channel handed in on construction.
#[derive(Debug)]
pub(crate) struct MissionTimer {
    state: Arc<Mutex<TimerState>>,
    ticks: UnboundedSender<u64>,
}

impl MissionTimer {
    pub(crate) fn new(ticks: UnboundedSender<u64>) -> Self {
        Self { state: Arc::new(Mutex::new(TimerState::default())), ticks }
    }

    fn lock(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
        state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn elapsed(&self) -> u64 { Self::lock(&self.state).elapsed }

    pub(crate) fn is_running(&self) -> bool { Self::lock(&self.state).wake.is_some() }

    /// Starts incrementing the counter once per [`TICK`]. No-op if already running.
    pub(crate) fn start(&self) {
        let (generation, wake) = {
            let mut state = Self::lock(&self.state);
            if state.wake.is_some() {
                return;
            }
            let wake = CancellationToken::new();
            state.wake = Some(wake.clone());
            (state.generation, wake)
        };
        let state = Arc::clone(&self.state);
        let ticks = self.ticks.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + TICK, TICK);
            loop {
                tokio::select! {
                    biased;
                    () = wake.cancelled() => break,
                    _ = interval.tick() => {}
                }
                let value = {
                    let mut locked = Self::lock(&state);
                    if locked.generation != generation {
                        break;
                    }
                    locked.elapsed += 1;
                    locked.elapsed
                };
                if ticks.send(value).is_err() {
                    break;
                }
            }
        });
    }

    /// Halts the periodic increment without touching the counter.
    pub(crate) fn stop(&self) {
        let mut state = Self::lock(&self.state);
        if let Some(wake) = state.wake.take() {
            state.generation += 1;
            wake.cancel();
        }
    }

    /// Sets the counter back to zero. A running timer keeps counting from zero.
    pub(crate) fn reset(&self) { Self::lock(&self.state).elapsed = 0; }
}

impl Drop for MissionTimer {
    fn drop(&mut self) { self.stop(); }
}
