use super::{KRPCVessel, Resource, TelemetryError, Vessel};
use crate::krpc_handler::{
    KRPCError, KRPCValue, ObjectHandle,
    test_server::{ProcedureCall, ProcedureResult, RemoteError, connected_client, ok_result},
};
use std::sync::Arc;

fn respond(call: &ProcedureCall) -> ProcedureResult {
    match call.procedure.as_str() {
        "get_ActiveVessel" => ok_result(ObjectHandle(1).to_bytes()),
        "Vessel_get_Control" => ok_result(ObjectHandle(2).to_bytes()),
        "Vessel_get_Resources" => ok_result(ObjectHandle(3).to_bytes()),
        "Vessel_ResourcesInDecoupleStage" => ok_result(ObjectHandle(4).to_bytes()),
        "Vessel_get_Orbit" => ok_result(ObjectHandle(5).to_bytes()),
        "Resources_Amount" => {
            let staged = call.arguments[0].value == ObjectHandle(4).to_bytes();
            let amount: f32 = if staged { 8.0 } else { 42.5 };
            ok_result(amount.to_bytes())
        }
        "Control_get_CurrentStage" => ok_result(vec![4]),
        "Orbit_get_TimeToApoapsis" => ok_result(31.5f64.to_bytes()),
        _ => ok_result(Vec::new()),
    }
}

#[test]
fn test_resource_names_match_server() {
    assert_eq!(Resource::SolidFuel.as_ref(), "SolidFuel");
    assert_eq!(Resource::LiquidFuel.as_ref(), "LiquidFuel");
}

#[test]
fn test_transport_errors_map_to_telemetry_errors() {
    let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
    assert!(matches!(TelemetryError::from(KRPCError::Io(eof)), TelemetryError::ConnectionLost));
    assert!(matches!(TelemetryError::from(KRPCError::Timeout), TelemetryError::ConnectionLost));
    assert!(matches!(
        TelemetryError::from(KRPCError::Decode(String::from("short"))),
        TelemetryError::Malformed(msg) if msg == "short"
    ));
    let rejected = TelemetryError::from(KRPCError::Procedure {
        service: String::from("SpaceCenter"),
        name: String::from("InvalidOperationException"),
        description: String::from("No stage"),
    });
    assert!(matches!(
        rejected,
        TelemetryError::Rejected(detail) if detail == "SpaceCenter: InvalidOperationException: No stage"
    ));
}

#[tokio::test]
async fn test_vessel_reads_and_commands() {
    let (client, server) = connected_client(respond).await;
    let vessel = KRPCVessel::active(Arc::clone(&client)).await.unwrap();

    let total = vessel.resource_amount(Resource::SolidFuel).await.unwrap();
    assert!((total - 42.5).abs() < f32::EPSILON);
    let staged = vessel.stage_resource_amount(1, Resource::LiquidFuel).await.unwrap();
    assert!((staged - 8.0).abs() < f32::EPSILON);
    assert_eq!(vessel.current_stage().await.unwrap(), 2);
    assert!((vessel.time_to_apoapsis().await.unwrap() - 31.5).abs() < f64::EPSILON);
    vessel.set_sas(true).await.unwrap();
    vessel.set_throttle(1.0).await.unwrap();
    vessel.activate_next_stage().await.unwrap();
    client.shutdown().await;

    let calls = server.await.unwrap();
    let procedures: Vec<&str> = calls.iter().map(|c| c.procedure.as_str()).collect();
    assert_eq!(
        procedures,
        vec![
            "get_ActiveVessel",
            "Vessel_get_Control",
            "Vessel_get_Resources",
            "Resources_Amount",
            "Vessel_ResourcesInDecoupleStage",
            "Resources_Amount",
            "Control_get_CurrentStage",
            "Vessel_get_Orbit",
            "Orbit_get_TimeToApoapsis",
            "Control_set_SAS",
            "Control_set_Throttle",
            "Control_ActivateNextStage",
        ]
    );
    assert_eq!(calls[3].arguments[1].value, String::from("SolidFuel").to_bytes());
    assert_eq!(calls[4].arguments[1].value, vec![2]);
    assert_eq!(calls[4].arguments[2].value, false.to_bytes());
    assert_eq!(calls[5].arguments[1].value, String::from("LiquidFuel").to_bytes());
    assert_eq!(calls[10].arguments[1].value, 1.0f32.to_bytes());
    assert!(calls[9..].iter().all(|c| c.arguments[0].value == ObjectHandle(2).to_bytes()));
}

#[tokio::test]
async fn test_missing_active_vessel_is_stale_target() {
    let (client, server) = connected_client(|_| ok_result(ObjectHandle(0).to_bytes())).await;

    let res = KRPCVessel::active(Arc::clone(&client)).await;
    assert!(matches!(res, Err(TelemetryError::StaleTarget)));
    client.shutdown().await;
    assert_eq!(server.await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rejected_command_is_reported() {
    let (client, server) = connected_client(|call| match call.procedure.as_str() {
        "Control_ActivateNextStage" => ProcedureResult {
            error: Some(RemoteError {
                service: String::from("SpaceCenter"),
                name: String::from("InvalidOperationException"),
                description: String::from("No stages left"),
                stack_trace: String::new(),
            }),
            value: Vec::new(),
        },
        _ => respond(call),
    })
    .await;

    let vessel = KRPCVessel::active(Arc::clone(&client)).await.unwrap();
    match vessel.activate_next_stage().await {
        Err(TelemetryError::Rejected(detail)) => assert!(detail.ends_with("No stages left")),
        other => panic!("unexpected result {other:?}"),
    }
    client.shutdown().await;
    server.await.unwrap();
}
