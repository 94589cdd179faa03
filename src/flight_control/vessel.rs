use super::resource::Resource;
use crate::krpc_handler::KRPCError;
use async_trait::async_trait;
use strum_macros::Display;

/// Failure to observe or command the target vessel.
#[derive(Debug, Display)]
pub enum TelemetryError {
    /// The vessel handle no longer refers to a live object.
    StaleTarget,
    /// The session to the server is gone.
    ConnectionLost,
    /// The server rejected the operation.
    Rejected(String),
    /// The server answered with something that could not be interpreted.
    Malformed(String),
}

impl std::error::Error for TelemetryError {}

impl From<KRPCError> for TelemetryError {
    fn from(value: KRPCError) -> Self {
        if value.is_connection_lost() {
            return TelemetryError::ConnectionLost;
        }
        match value {
            e @ KRPCError::Procedure { .. } => TelemetryError::Rejected(e.detail()),
            KRPCError::Io(_) | KRPCError::Timeout | KRPCError::Handshake(_) => {
                TelemetryError::ConnectionLost
            }
            KRPCError::Decode(msg) => TelemetryError::Malformed(msg),
        }
    }
}

/// Telemetry and control surface of a remotely controlled vessel.
///
/// Reads may be issued from any task, commands are only issued by the program's
/// phase script.
#[async_trait]
pub trait Vessel: Send + Sync {
    /// Amount of `resource` left in the whole vessel.
    async fn resource_amount(&self, resource: Resource) -> Result<f32, TelemetryError>;

    /// Amount of `resource` left in the parts decoupled by `stage`.
    async fn stage_resource_amount(
        &self,
        stage: i32,
        resource: Resource,
    ) -> Result<f32, TelemetryError>;

    /// Index of the next stage to activate.
    async fn current_stage(&self) -> Result<i32, TelemetryError>;

    /// Seconds until the vessel reaches its apoapsis.
    async fn time_to_apoapsis(&self) -> Result<f64, TelemetryError>;

    async fn activate_next_stage(&self) -> Result<(), TelemetryError>;

    /// Sets the throttle, `0.0` is idle and `1.0` is full thrust.
    async fn set_throttle(&self, throttle: f32) -> Result<(), TelemetryError>;

    /// Engages or releases the stability assist system.
    async fn set_sas(&self, enabled: bool) -> Result<(), TelemetryError>;
}
