mod krpc_vessel;
mod resource;
mod vessel;
#[cfg(test)]
mod tests;

pub(crate) use krpc_vessel::KRPCVessel;
pub use resource::Resource;
pub use vessel::{TelemetryError, Vessel};
