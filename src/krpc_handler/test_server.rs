//! In-process kRPC server for exercising clients over real sockets.

use super::{
    KRPCClient,
    krpc_client::{read_message, write_message},
    krpc_messages::{ConnectionRequest, ConnectionResponse, ConnectionType, Request, Response},
};
use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};
use tokio::{net::TcpListener, task::JoinHandle};

pub(crate) use super::krpc_messages::{ConnectionStatus, ProcedureCall, ProcedureResult, RemoteError};

pub(crate) const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub(crate) const CLIENT_ID: [u8; 4] = [7, 3, 1, 9];

pub(crate) async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Accepts one client on both ports, answers every call with `respond` and returns
/// all received calls once the client hangs up.
pub(crate) fn fake_server<F>(
    rpc: TcpListener,
    stream: TcpListener,
    rpc_status: ConnectionStatus,
    respond: F,
) -> JoinHandle<Vec<ProcedureCall>>
where
    F: Fn(&ProcedureCall) -> ProcedureResult + Send + 'static,
{
    tokio::spawn(async move {
        let (mut rpc_socket, _) = rpc.accept().await.unwrap();
        let request: ConnectionRequest = read_message(&mut rpc_socket).await.unwrap();
        assert_eq!(request.r#type, i32::from(ConnectionType::Rpc));
        assert_eq!(request.client_name, "LaunchProgramTest");
        let response = ConnectionResponse {
            status: rpc_status.into(),
            message: String::from("refused by test"),
            client_identifier: CLIENT_ID.to_vec(),
        };
        write_message(&mut rpc_socket, &response).await.unwrap();
        if rpc_status != ConnectionStatus::Ok {
            return Vec::new();
        }

        let (mut stream_socket, _) = stream.accept().await.unwrap();
        let request: ConnectionRequest = read_message(&mut stream_socket).await.unwrap();
        assert_eq!(request.r#type, i32::from(ConnectionType::Stream));
        assert_eq!(request.client_identifier, CLIENT_ID.to_vec());
        let response = ConnectionResponse {
            status: ConnectionStatus::Ok.into(),
            message: String::new(),
            client_identifier: Vec::new(),
        };
        write_message(&mut stream_socket, &response).await.unwrap();

        let mut calls = Vec::new();
        while let Ok(request) = read_message::<Request, _>(&mut rpc_socket).await {
            let results = request.calls.iter().map(&respond).collect();
            calls.extend(request.calls);
            let response = Response { error: None, results };
            write_message(&mut rpc_socket, &response).await.unwrap();
        }
        calls
    })
}

pub(crate) fn ok_result(value: Vec<u8>) -> ProcedureResult { ProcedureResult { error: None, value } }

/// Starts a server answering with `respond` and connects a client to it.
pub(crate) async fn connected_client<F>(respond: F) -> (Arc<KRPCClient>, JoinHandle<Vec<ProcedureCall>>)
where
    F: Fn(&ProcedureCall) -> ProcedureResult + Send + 'static,
{
    let (rpc, rpc_port) = listener().await;
    let (stream, stream_port) = listener().await;
    let server = fake_server(rpc, stream, ConnectionStatus::Ok, respond);
    let client =
        KRPCClient::connect("LaunchProgramTest", LOCALHOST, rpc_port, stream_port).await.unwrap();
    (Arc::new(client), server)
}
