use super::{
    KRPCError, KRPCValue,
    krpc_messages::{
        Argument, ConnectionRequest, ConnectionResponse, ConnectionStatus, ConnectionType,
        ProcedureCall, Request, Response,
    },
    krpc_request::KRPCRequestType,
};
use prost::Message;
use std::{net::IpAddr, time::Duration};
use tokio::{
    io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt},
    net::TcpStream,
    sync::Mutex,
};

/// An open kRPC session consisting of the RPC connection and the stream connection.
///
/// Calls are serialised over the single RPC connection, each holding the socket from
/// sending the request until the response is read.
#[derive(Debug)]
pub(crate) struct KRPCClient {
    /// The RPC connection carrying request/response pairs.
    rpc: Mutex<TcpStream>,
    /// The stream connection, kept open for the lifetime of the session.
    stream: Mutex<TcpStream>,
    /// Identifier assigned by the server during the RPC handshake.
    client_id: Vec<u8>,
}

impl KRPCClient {
    /// Upper bound for establishing both connections including their handshakes.
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Largest message accepted from the server.
    const MAX_MESSAGE_LEN: u64 = 16 * 1024 * 1024;

    /// Connects to a kRPC server and performs the RPC and stream handshakes.
    ///
    /// # Arguments
    /// * `name` – Client name shown in the server's client list.
    /// * `address` – Server address.
    /// * `rpc_port` – Port of the RPC server.
    /// * `stream_port` – Port of the stream server.
    ///
    /// # Errors
    /// Any socket error, a refused handshake or exceeding [`Self::CONNECT_TIMEOUT`].
    pub(crate) async fn connect(
        name: &str,
        address: IpAddr,
        rpc_port: u16,
        stream_port: u16,
    ) -> Result<Self, KRPCError> {
        tokio::time::timeout(
            Self::CONNECT_TIMEOUT,
            Self::establish(name, address, rpc_port, stream_port),
        )
        .await
        .map_err(|_| KRPCError::Timeout)?
    }

    async fn establish(
        name: &str,
        address: IpAddr,
        rpc_port: u16,
        stream_port: u16,
    ) -> Result<Self, KRPCError> {
        let mut rpc = TcpStream::connect((address, rpc_port)).await?;
        rpc.set_nodelay(true)?;
        let rpc_request = ConnectionRequest {
            r#type: ConnectionType::Rpc.into(),
            client_name: String::from(name),
            client_identifier: Vec::new(),
        };
        let client_id = Self::handshake(&mut rpc, &rpc_request).await?.client_identifier;

        let mut stream = TcpStream::connect((address, stream_port)).await?;
        let stream_request = ConnectionRequest {
            r#type: ConnectionType::Stream.into(),
            client_name: String::new(),
            client_identifier: client_id.clone(),
        };
        Self::handshake(&mut stream, &stream_request).await?;

        Ok(Self { rpc: Mutex::new(rpc), stream: Mutex::new(stream), client_id })
    }

    async fn handshake(
        socket: &mut TcpStream,
        request: &ConnectionRequest,
    ) -> Result<ConnectionResponse, KRPCError> {
        write_message(socket, request).await?;
        let response: ConnectionResponse = read_message(socket).await?;
        match ConnectionStatus::try_from(response.status) {
            Ok(ConnectionStatus::Ok) => Ok(response),
            Ok(status) => {
                Err(KRPCError::Handshake(format!("{status:?}: {}", response.message)))
            }
            Err(_) => Err(KRPCError::Handshake(format!("unknown status {}", response.status))),
        }
    }

    pub(crate) fn client_id(&self) -> &[u8] { &self.client_id }

    /// Invokes a single remote procedure and decodes its return value.
    ///
    /// # Errors
    /// Transport failures, an exception raised by the procedure or an undecodable result.
    pub(crate) async fn call<R>(&self, request: &R) -> Result<R::Response, KRPCError>
    where R: KRPCRequestType + Sync {
        let arguments = request
            .arguments()
            .into_iter()
            .zip(0u32..)
            .map(|(value, position)| Argument { position, value })
            .collect();
        let call = ProcedureCall {
            service: String::from(R::SERVICE),
            procedure: String::from(R::PROCEDURE),
            arguments,
            service_id: 0,
            procedure_id: 0,
        };

        let response: Response = {
            let mut rpc = self.rpc.lock().await;
            write_message(&mut *rpc, &Request { calls: vec![call] }).await?;
            read_message(&mut *rpc).await?
        };
        if let Some(error) = response.error {
            return Err(error.into());
        }
        let result = response.results.into_iter().next().ok_or_else(|| {
            KRPCError::Decode(format!("no result for {}.{}", R::SERVICE, R::PROCEDURE))
        })?;
        if let Some(error) = result.error {
            return Err(error.into());
        }
        R::Response::decode(&result.value)
    }

    /// Closes both connections. Calls issued afterwards fail with an I/O error.
    pub(crate) async fn shutdown(&self) {
        let _ = self.stream.lock().await.shutdown().await;
        let _ = self.rpc.lock().await.shutdown().await;
    }
}

/// Writes `msg` prefixed with its varint encoded length.
pub(crate) async fn write_message<M, W>(writer: &mut W, msg: &M) -> Result<(), KRPCError>
where
    M: Message,
    W: AsyncWrite + Unpin, {
    writer.write_all(&msg.encode_length_delimited_to_vec()).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads one varint length-delimited message.
pub(crate) async fn read_message<M, R>(reader: &mut R) -> Result<M, KRPCError>
where
    M: Message + Default,
    R: AsyncRead + Unpin, {
    let mut length = 0u64;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8().await?;
        length |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 64 {
            return Err(KRPCError::Decode(String::from("malformed length prefix")));
        }
    }
    if length > KRPCClient::MAX_MESSAGE_LEN {
        return Err(KRPCError::Decode(format!("message of {length} bytes exceeds limit")));
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut buffer = vec![0u8; length as usize];
    reader.read_exact(&mut buffer).await?;
    Ok(M::decode(buffer.as_slice())?)
}
