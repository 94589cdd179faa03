#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod display;
mod flight_control;
mod krpc_handler;
mod logger;
mod program_control;
mod timing;

use crate::config::LaunchArgs;
use crate::display::{DisplaySink, MirroredDisplay, UIMirror, UISetupError};
use crate::flight_control::{KRPCVessel, Vessel};
use crate::krpc_handler::{KRPCClient, session::SessionManager};
use crate::program_control::{ProgramOutcome, launch, program::SimpleLaunchProgram};
use clap::Parser;
use std::{io::Write, process::ExitCode, sync::Arc};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let args = LaunchArgs::parse();

    print!("Establishing connections with {}, on Port {}... ", args.target, args.port);
    let _ = std::io::stdout().flush();
    let mut session = SessionManager::new(&args.client_name, args.target, args.port);
    let client = match (session.connect().await, session.client()) {
        (true, Some(client)) => client,
        _ => {
            println!("Failed.");
            if let Some(e) = session.last_error() {
                error!("Connection to {} failed: {}", args.target, e.detail());
            }
            return ExitCode::FAILURE;
        }
    };
    println!("Success!");

    let ui = if args.no_ui { None } else { configure_ui(Arc::clone(&client)).await };
    let display: Arc<dyn DisplaySink> = Arc::new(MirroredDisplay::new(ui));

    let outcome = match KRPCVessel::active(client).await {
        Ok(vessel) => {
            let vessel: Arc<dyn Vessel> = Arc::new(vessel);
            launch::<SimpleLaunchProgram>(vessel, args.countdown, display).await
        }
        Err(e) => ProgramOutcome::Aborted(e.into()),
    };
    if session.is_connected() {
        session.disconnect().await;
    }

    if outcome.is_completed() {
        return ExitCode::SUCCESS;
    }
    if let ProgramOutcome::Aborted(e) = outcome {
        error!("Launch aborted: {e:?}");
    }
    ExitCode::FAILURE
}

async fn configure_ui(client: Arc<KRPCClient>) -> Option<UIMirror> {
    print!("Configuring UI... ");
    let _ = std::io::stdout().flush();
    match UIMirror::configure(client).await {
        Ok(ui) => {
            println!("UI configured correctly.");
            Some(ui)
        }
        Err(UISetupError::NoCanvas) => {
            println!("Failed to configure UI.");
            None
        }
        Err(UISetupError::Widgets(e)) => {
            println!("Failed to configure widgets.");
            warn!("Widget setup failed: {}", e.detail());
            None
        }
    }
}
