//! Launch programs: the [`RocketProgram`] extension point, the lifecycle binding a
//! program to a vessel and its timers, and the runner driving one program to an outcome.

pub(crate) mod program;
mod program_lifecycle;
mod program_runner;
mod program_signal;
mod rocket_program;

pub(crate) use program_lifecycle::{MissionTicks, ProgramLifecycle};
pub(crate) use program_runner::{launch, run_program};
pub(crate) use program_signal::{ProgramError, ProgramOutcome};
pub(crate) use rocket_program::RocketProgram;
