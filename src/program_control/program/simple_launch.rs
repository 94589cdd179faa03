use crate::display::InlineGuard;
use crate::flight_control::TelemetryError;
use crate::program_control::{ProgramError, ProgramLifecycle, RocketProgram};
use crate::{event, warn};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tokio::sync::RwLock;

/// Countdown, ignition on a solid booster, coast to apoapsis and parachute staging.
#[derive(Debug, Default)]
pub(crate) struct SimpleLaunchProgram {
    /// Label shown next to the mission time.
    state: RwLock<Option<String>>,
}

impl SimpleLaunchProgram {
    const SAS_TICK: u32 = 5;
    const IGNITION_TICK: u32 = 3;
    const FULL_THROTTLE: f32 = 1.0;
    const FUEL_POLL_INTERVAL: Duration = Duration::from_millis(100);
    const SETTLE_TIME: Duration = Duration::from_secs(2);

    pub(crate) async fn state(&self) -> Option<String> { self.state.read().await.clone() }

    async fn set_state(&self, label: impl Into<String>) {
        *self.state.write().await = Some(label.into());
    }

    /// Converts a reported time to apoapsis into a wait, past or unknown apoapsis
    /// times mean no wait at all.
    fn apoapsis_wait(time_to_apoapsis: f64) -> Duration {
        if time_to_apoapsis.is_finite() && time_to_apoapsis > 0.0 {
            Duration::try_from_secs_f64(time_to_apoapsis).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }

    async fn launch(&self, lifecycle: &ProgramLifecycle) -> Result<(), ProgramError> {
        let stage = lifecycle.current_stage().await?;
        let liquid = lifecycle.liquid_fuel(stage).await?;
        let solid = lifecycle.solid_fuel(stage).await?;
        let total_liquid = lifecycle.total_liquid_fuel().await?;
        event!(
            "Launching from stage {stage}: {liquid} liquid and {solid} solid fuel in stage, \
             {total_liquid} liquid fuel total"
        );

        lifecycle.begin_mission();
        lifecycle.display().write("Launch!");
        lifecycle.vessel().activate_next_stage().await?;
        self.set_state("Liftoff").await;
        event!("Liftoff, mission timer started");
        Ok(())
    }

    /// One fuel poll, `true` once the solid fuel is gone.
    async fn fuel_depleted(&self, lifecycle: &ProgramLifecycle) -> Result<bool, ProgramError> {
        let fuel = lifecycle.total_solid_fuel().await?;
        if fuel.is_nan() {
            let reading = String::from("solid fuel reading is NaN");
            return Err(TelemetryError::Malformed(reading).into());
        }
        if fuel > 0.0 {
            self.set_state(format!("Awaiting fuel depletion ({fuel} units)")).await;
            return Ok(false);
        }
        Ok(true)
    }

    async fn await_fuel_depletion(&self, lifecycle: &ProgramLifecycle) -> Result<(), ProgramError> {
        self.set_state("Awaiting fuel depletion").await;
        lifecycle
            .poll_until(Self::FUEL_POLL_INTERVAL, None, || self.fuel_depleted(lifecycle))
            .await
    }

    async fn ascent(&self, lifecycle: &ProgramLifecycle) -> Result<(), ProgramError> {
        self.await_fuel_depletion(lifecycle).await?;
        event!("Solid fuel depleted");

        let wait = Self::apoapsis_wait(lifecycle.vessel().time_to_apoapsis().await?);
        let eta = (wait.as_secs_f64().round() as u64).saturating_add(lifecycle.mission_time());
        self.set_state(format!("Awaiting target altitude (ETA: T + {eta})")).await;
        lifecycle.sleep(wait).await?;

        self.set_state("Target altitude reached, parachute stage engaged.").await;
        lifecycle.vessel().activate_next_stage().await?;
        lifecycle.sleep(Self::SETTLE_TIME).await
    }
}

#[async_trait]
impl RocketProgram for SimpleLaunchProgram {
    fn type_name(&self) -> &'static str { "SimpleLaunchProgram" }

    async fn on_countdown_tick(
        &self,
        lifecycle: &ProgramLifecycle,
        t: u32,
    ) -> Result<(), ProgramError> {
        let mut line = format!("T - {t}");
        if t == Self::SAS_TICK {
            line.push_str(": Activating SAS modules");
            lifecycle.vessel().set_sas(true).await?;
        }
        if t == Self::IGNITION_TICK {
            line.push_str(": Ignition sequence, maxing throttle");
            lifecycle.vessel().set_throttle(Self::FULL_THROTTLE).await?;
        }
        lifecycle.display().write(&line);
        Ok(())
    }

    async fn on_countdown_finished(
        &self,
        _lifecycle: &ProgramLifecycle,
        completed: bool,
    ) -> Result<(), ProgramError> {
        if !completed {
            warn!("Countdown stopped early, launching anyway");
        }
        Ok(())
    }

    async fn on_mission_tick(&self, lifecycle: &ProgramLifecycle, t: u64) {
        let line = match self.state().await {
            Some(label) => format!("T + {t}: {label}"),
            None => format!("T + {t}"),
        };
        lifecycle.display().write(&line);
    }

    async fn run(&self, lifecycle: &ProgramLifecycle) -> Result<(), ProgramError> {
        let inline = InlineGuard::new(Arc::clone(lifecycle.display()));
        lifecycle.run_countdown(self).await?;
        self.launch(lifecycle).await?;
        self.ascent(lifecycle).await?;
        lifecycle.end_mission();
        drop(inline);
        lifecycle.display().write_line("Program completed, terminating...");
        Ok(())
    }
}
