use super::{ProgramError, ProgramLifecycle};
use async_trait::async_trait;

/// A launch program: a sequential phase script plus hooks for the bound timers.
///
/// Countdown hooks are called on the task executing [`RocketProgram::run`] in the order
/// the countdown produced its events, so they may command the vessel. Mission ticks
/// arrive on a separate task and must only read.
#[async_trait]
pub(crate) trait RocketProgram: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn on_countdown_tick(
        &self,
        _lifecycle: &ProgramLifecycle,
        _t: u32,
    ) -> Result<(), ProgramError> {
        Ok(())
    }

    async fn on_countdown_finished(
        &self,
        _lifecycle: &ProgramLifecycle,
        _completed: bool,
    ) -> Result<(), ProgramError> {
        Ok(())
    }

    async fn on_mission_tick(&self, _lifecycle: &ProgramLifecycle, _t: u64) {}

    /// Executes the phase script to completion.
    async fn run(&self, lifecycle: &ProgramLifecycle) -> Result<(), ProgramError>;
}
