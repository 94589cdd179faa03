use super::{
    resource::Resource,
    vessel::{TelemetryError, Vessel},
};
use crate::krpc_handler::{
    ObjectHandle,
    krpc_client::KRPCClient,
    krpc_request::space_center::{
        ActiveVesselGetRequest, ControlActivateNextStageRequest, ControlCurrentStageGetRequest,
        ControlSASSetRequest, ControlThrottleSetRequest, OrbitTimeToApoapsisGetRequest,
        ResourcesAmountRequest, VesselControlGetRequest, VesselOrbitGetRequest,
        VesselResourcesGetRequest, VesselStageResourcesRequest,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

/// The active vessel of a kRPC session.
///
/// Vessel and control handles are resolved once on construction, resource and orbit
/// handles are resolved per call since the server hands out new objects on staging.
#[derive(Debug)]
pub(crate) struct KRPCVessel {
    client: Arc<KRPCClient>,
    vessel: ObjectHandle,
    control: ObjectHandle,
}

impl KRPCVessel {
    /// Binds to the vessel currently controlled by the player.
    ///
    /// # Errors
    /// [`TelemetryError::StaleTarget`] if no vessel is active, or any transport failure.
    pub(crate) async fn active(client: Arc<KRPCClient>) -> Result<Self, TelemetryError> {
        let vessel = Self::live(client.call(&ActiveVesselGetRequest {}).await?)?;
        let control = Self::live(client.call(&VesselControlGetRequest { vessel }).await?)?;
        Ok(Self { client, vessel, control })
    }

    fn live(handle: ObjectHandle) -> Result<ObjectHandle, TelemetryError> {
        if handle.is_null() { Err(TelemetryError::StaleTarget) } else { Ok(handle) }
    }

    async fn amount(&self, resources: ObjectHandle, resource: Resource) -> Result<f32, TelemetryError> {
        let request = ResourcesAmountRequest {
            resources: Self::live(resources)?,
            name: String::from(resource.as_ref()),
        };
        Ok(self.client.call(&request).await?)
    }
}

#[async_trait]
impl Vessel for KRPCVessel {
    async fn resource_amount(&self, resource: Resource) -> Result<f32, TelemetryError> {
        let resources = self.client.call(&VesselResourcesGetRequest { vessel: self.vessel }).await?;
        self.amount(resources, resource).await
    }

    async fn stage_resource_amount(
        &self,
        stage: i32,
        resource: Resource,
    ) -> Result<f32, TelemetryError> {
        let request = VesselStageResourcesRequest { vessel: self.vessel, stage, cumulative: false };
        let resources = self.client.call(&request).await?;
        self.amount(resources, resource).await
    }

    async fn current_stage(&self) -> Result<i32, TelemetryError> {
        Ok(self.client.call(&ControlCurrentStageGetRequest { control: self.control }).await?)
    }

    async fn time_to_apoapsis(&self) -> Result<f64, TelemetryError> {
        let orbit = Self::live(self.client.call(&VesselOrbitGetRequest { vessel: self.vessel }).await?)?;
        Ok(self.client.call(&OrbitTimeToApoapsisGetRequest { orbit }).await?)
    }

    async fn activate_next_stage(&self) -> Result<(), TelemetryError> {
        self.client.call(&ControlActivateNextStageRequest { control: self.control }).await?;
        Ok(())
    }

    async fn set_throttle(&self, throttle: f32) -> Result<(), TelemetryError> {
        let request = ControlThrottleSetRequest { control: self.control, throttle };
        Ok(self.client.call(&request).await?)
    }

    async fn set_sas(&self, enabled: bool) -> Result<(), TelemetryError> {
        let request = ControlSASSetRequest { control: self.control, sas: enabled };
        Ok(self.client.call(&request).await?)
    }
}
