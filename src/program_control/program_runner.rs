use super::{MissionTicks, ProgramLifecycle, ProgramOutcome, RocketProgram};
use crate::display::DisplaySink;
use crate::flight_control::Vessel;
use crate::{error, info, warn};
use std::{future::Future, sync::Arc};

/// Binds a fresh `P` to `vessel` and runs it until it completes, fails or the
/// process receives Ctrl-C.
pub(crate) async fn launch<P>(
    vessel: Arc<dyn Vessel>,
    countdown: u32,
    display: Arc<dyn DisplaySink>,
) -> ProgramOutcome
where
    P: RocketProgram + Default + 'static,
{
    let (lifecycle, ticks) = ProgramLifecycle::bind(vessel, countdown, display);
    run_program(Arc::new(P::default()), Arc::new(lifecycle), ticks, ctrl_c()).await
}

/// Resolves on Ctrl-C. Never resolves if the signal handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Ctrl-C handler unavailable: {e}");
        std::future::pending::<()>().await;
    }
}

/// Runs `program` on `lifecycle`, forwarding mission ticks to it on a separate task.
///
/// `interrupt` resolving aborts the run. The mission timer is stopped and reset and
/// the display left inline mode on every path.
pub(crate) async fn run_program<P, S>(
    program: Arc<P>,
    lifecycle: Arc<ProgramLifecycle>,
    mut ticks: MissionTicks,
    interrupt: S,
) -> ProgramOutcome
where
    P: RocketProgram + ?Sized + 'static,
    S: Future<Output = ()>,
{
    let name = program.type_name();
    info!("Starting {name} with a {}s countdown", lifecycle.countdown().max());

    let forwarder = {
        let program = Arc::clone(&program);
        let lifecycle = Arc::clone(&lifecycle);
        tokio::spawn(async move {
            while let Some(t) = ticks.recv().await {
                program.on_mission_tick(&lifecycle, t).await;
            }
        })
    };

    let res = {
        let run = program.run(&lifecycle);
        tokio::pin!(run);
        tokio::pin!(interrupt);
        tokio::select! {
            res = &mut run => res,
            () = &mut interrupt => {
                warn!("Interrupt received, aborting {name}");
                lifecycle.abort();
                run.await
            }
        }
    };

    if let Err(e) = &res {
        if lifecycle.is_mission_running() {
            error!("{name} aborted at T + {}: {e:?}", lifecycle.mission_time());
        } else {
            error!("{name} aborted at T - {}: {e:?}", lifecycle.countdown().current());
        }
    }

    lifecycle.end_mission();
    lifecycle.display().set_inline(false);
    forwarder.abort();
    // rearm for a later run on the same lifecycle
    let countdown = lifecycle.countdown();
    if countdown.reset(countdown.max()).is_err() {
        warn!("Countdown still running after {name} returned");
    }

    match res {
        Ok(()) => {
            info!("{name} completed");
            ProgramOutcome::Completed
        }
        Err(e) => ProgramOutcome::Aborted(e),
    }
}
