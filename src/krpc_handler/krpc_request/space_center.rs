//! Procedures of the `SpaceCenter` service used to observe and command the active vessel.

use super::KRPCRequestType;
use crate::krpc_handler::{Ignored, KRPCValue, ObjectHandle};

#[derive(Debug)]
pub(crate) struct ActiveVesselGetRequest {}

impl KRPCRequestType for ActiveVesselGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "get_ActiveVessel";

    fn arguments(&self) -> Vec<Vec<u8>> { Vec::new() }
}

#[derive(Debug)]
pub(crate) struct VesselControlGetRequest {
    pub vessel: ObjectHandle,
}

impl KRPCRequestType for VesselControlGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Vessel_get_Control";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.vessel.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct VesselResourcesGetRequest {
    pub vessel: ObjectHandle,
}

impl KRPCRequestType for VesselResourcesGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Vessel_get_Resources";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.vessel.to_bytes()] }
}

/// Resources of the parts that are decoupled in `stage`.
#[derive(Debug)]
pub(crate) struct VesselStageResourcesRequest {
    pub vessel: ObjectHandle,
    pub stage: i32,
    pub cumulative: bool,
}

impl KRPCRequestType for VesselStageResourcesRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Vessel_ResourcesInDecoupleStage";

    fn arguments(&self) -> Vec<Vec<u8>> {
        vec![self.vessel.to_bytes(), self.stage.to_bytes(), self.cumulative.to_bytes()]
    }
}

#[derive(Debug)]
pub(crate) struct ResourcesAmountRequest {
    pub resources: ObjectHandle,
    pub name: String,
}

impl KRPCRequestType for ResourcesAmountRequest {
    type Response = f32;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Resources_Amount";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.resources.to_bytes(), self.name.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct ControlCurrentStageGetRequest {
    pub control: ObjectHandle,
}

impl KRPCRequestType for ControlCurrentStageGetRequest {
    type Response = i32;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Control_get_CurrentStage";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.control.to_bytes()] }
}

/// Activates the next stage. The server answers with the list of vessels
/// separated by it, which is not needed here.
#[derive(Debug)]
pub(crate) struct ControlActivateNextStageRequest {
    pub control: ObjectHandle,
}

impl KRPCRequestType for ControlActivateNextStageRequest {
    type Response = Ignored;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Control_ActivateNextStage";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.control.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct ControlThrottleSetRequest {
    pub control: ObjectHandle,
    pub throttle: f32,
}

impl KRPCRequestType for ControlThrottleSetRequest {
    type Response = ();
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Control_set_Throttle";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.control.to_bytes(), self.throttle.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct ControlSASSetRequest {
    pub control: ObjectHandle,
    pub sas: bool,
}

impl KRPCRequestType for ControlSASSetRequest {
    type Response = ();
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Control_set_SAS";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.control.to_bytes(), self.sas.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct VesselOrbitGetRequest {
    pub vessel: ObjectHandle,
}

impl KRPCRequestType for VesselOrbitGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Vessel_get_Orbit";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.vessel.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct OrbitTimeToApoapsisGetRequest {
    pub orbit: ObjectHandle,
}

impl KRPCRequestType for OrbitTimeToApoapsisGetRequest {
    type Response = f64;
    const SERVICE: &'static str = "SpaceCenter";
    const PROCEDURE: &'static str = "Orbit_get_TimeToApoapsis";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.orbit.to_bytes()] }
}
