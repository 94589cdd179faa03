use crate::flight_control::TelemetryError;
use crate::timing::CountdownError;
use strum_macros::Display;

/// Reasons a phase script stops before completing.
#[derive(Debug, Display)]
pub(crate) enum ProgramError {
    /// A telemetry read or vessel command failed.
    Telemetry(TelemetryError),
    Countdown(CountdownError),
    /// The countdown was already being driven by someone else.
    CountdownBusy,
    /// A bounded wait ran out of time.
    Timeout,
    /// The run was aborted by the operator.
    Aborted,
}

impl std::error::Error for ProgramError {}

impl From<TelemetryError> for ProgramError {
    fn from(value: TelemetryError) -> Self { Self::Telemetry(value) }
}

impl From<CountdownError> for ProgramError {
    fn from(value: CountdownError) -> Self { Self::Countdown(value) }
}

/// Terminal state of a program run.
#[derive(Debug, Display)]
pub(crate) enum ProgramOutcome {
    Completed,
    Aborted(ProgramError),
}

impl ProgramOutcome {
    pub(crate) fn is_completed(&self) -> bool { matches!(self, Self::Completed) }
}
