use super::{ProgramError, RocketProgram};
use crate::display::DisplaySink;
use crate::flight_control::{Resource, Vessel};
use crate::timing::{Countdown, CountdownEvent, MissionTimer};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::{sync::mpsc, time::Instant};
use tokio_util::sync::CancellationToken;

/// Receiving end of the mission timer's tick notifications.
pub(crate) type MissionTicks = mpsc::UnboundedReceiver<u64>;

/// Binds one vessel, one countdown and one mission timer to a program run.
///
/// Everything a phase script needs is reachable from here: telemetry accessors,
/// the timers, the display and cancellable waits.
pub(crate) struct ProgramLifecycle {
    vessel: Arc<dyn Vessel>,
    countdown: Arc<Countdown>,
    timer: MissionTimer,
    display: Arc<dyn DisplaySink>,
    abort: CancellationToken,
}

impl ProgramLifecycle {
    /// Creates a fully bound lifecycle and the receiver of its mission ticks.
    pub(crate) fn bind(
        vessel: Arc<dyn Vessel>,
        countdown: u32,
        display: Arc<dyn DisplaySink>,
    ) -> (Self, MissionTicks) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let lifecycle = Self {
            vessel,
            countdown: Arc::new(Countdown::new(countdown)),
            timer: MissionTimer::new(tick_tx),
            display,
            abort: CancellationToken::new(),
        };
        (lifecycle, tick_rx)
    }

    pub(crate) fn vessel(&self) -> &Arc<dyn Vessel> { &self.vessel }
    pub(crate) fn display(&self) -> &Arc<dyn DisplaySink> { &self.display }
    pub(crate) fn countdown(&self) -> &Arc<Countdown> { &self.countdown }
    pub(crate) fn mission_time(&self) -> u64 { self.timer.elapsed() }
    pub(crate) fn is_mission_running(&self) -> bool { self.timer.is_running() }

    pub(crate) async fn liquid_fuel(&self, stage: i32) -> Result<f32, ProgramError> {
        Ok(self.vessel.stage_resource_amount(stage, Resource::LiquidFuel).await?)
    }

    pub(crate) async fn solid_fuel(&self, stage: i32) -> Result<f32, ProgramError> {
        Ok(self.vessel.stage_resource_amount(stage, Resource::SolidFuel).await?)
    }

    pub(crate) async fn total_liquid_fuel(&self) -> Result<f32, ProgramError> {
        Ok(self.vessel.resource_amount(Resource::LiquidFuel).await?)
    }

    pub(crate) async fn total_solid_fuel(&self) -> Result<f32, ProgramError> {
        Ok(self.vessel.resource_amount(Resource::SolidFuel).await?)
    }

    pub(crate) async fn current_stage(&self) -> Result<i32, ProgramError> {
        Ok(self.vessel.current_stage().await?)
    }

    pub(crate) fn begin_mission(&self) { self.timer.start(); }

    pub(crate) fn end_mission(&self) {
        self.timer.stop();
        self.timer.reset();
    }

    /// Stops the countdown at its next step. The phase script carries on as if
    /// the countdown had finished.
    pub(crate) fn stop_countdown(&self) { self.countdown.stop(); }

    /// Aborts the run: stops the countdown and interrupts every pending wait.
    pub(crate) fn abort(&self) {
        self.abort.cancel();
        self.stop_countdown();
    }

    pub(crate) fn is_aborted(&self) -> bool { self.abort.is_cancelled() }

    /// Drives the countdown to its end, handing every event to `program` in order.
    ///
    /// Returns whether the countdown ran down without being stopped.
    ///
    /// # Errors
    /// The first hook error (the countdown is stopped and drained first),
    /// [`ProgramError::Aborted`] after [`ProgramLifecycle::abort`], and
    /// [`ProgramError::CountdownBusy`] if the countdown is already running.
    pub(crate) async fn run_countdown<P>(&self, program: &P) -> Result<bool, ProgramError>
    where P: RocketProgram + ?Sized {
        if self.is_aborted() {
            return Err(ProgramError::Aborted);
        }
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        let drive = async {
            let stopper = async {
                self.abort.cancelled().await;
                self.countdown.stop();
                std::future::pending::<()>().await;
            };
            tokio::select! {
                biased;
                completed = self.countdown.start(event_tx) => completed,
                () = stopper => None,
            }
        };

        let deliver = async {
            let mut failure = None;
            while let Some(event) = event_rx.recv().await {
                if failure.is_some() {
                    continue;
                }
                let res = match event {
                    CountdownEvent::Tick(t) => program.on_countdown_tick(self, t).await,
                    CountdownEvent::Finished { completed } => {
                        program.on_countdown_finished(self, completed).await
                    }
                };
                if let Err(e) = res {
                    self.countdown.stop();
                    failure = Some(e);
                }
            }
            failure
        };

        let (completed, failure) = tokio::join!(drive, deliver);
        if let Some(e) = failure {
            return Err(e);
        }
        if self.is_aborted() {
            return Err(ProgramError::Aborted);
        }
        completed.ok_or(ProgramError::CountdownBusy)
    }

    /// Suspends for `duration`.
    ///
    /// # Errors
    /// [`ProgramError::Aborted`] if the run is aborted first.
    pub(crate) async fn sleep(&self, duration: Duration) -> Result<(), ProgramError> {
        tokio::select! {
            biased;
            () = self.abort.cancelled() => Err(ProgramError::Aborted),
            () = tokio::time::sleep(duration) => Ok(()),
        }
    }

    /// Calls `probe` every `interval` until it yields `true`.
    ///
    /// # Errors
    /// Probe errors, [`ProgramError::Timeout`] once `timeout` has passed and
    /// [`ProgramError::Aborted`] if the run is aborted.
    pub(crate) async fn poll_until<F, Fut>(
        &self,
        interval: Duration,
        timeout: Option<Duration>,
        mut probe: F,
    ) -> Result<(), ProgramError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<bool, ProgramError>> + Send,
    {
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            if self.is_aborted() {
                return Err(ProgramError::Aborted);
            }
            if probe().await? {
                return Ok(());
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return Err(ProgramError::Timeout);
            }
            self.sleep(interval).await?;
        }
    }
}
