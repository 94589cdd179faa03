use super::krpc_messages::RemoteError;
use strum_macros::Display;

/// Failures of the kRPC transport and of remote procedure execution.
#[derive(Debug, Display)]
pub enum KRPCError {
    /// Socket level failure, including a closed connection.
    Io(std::io::Error),
    /// Connection or handshake exceeded its time limit.
    Timeout,
    /// The server refused the connection request.
    Handshake(String),
    /// The server executed the call and reported an exception.
    Procedure { service: String, name: String, description: String },
    /// A message or value could not be decoded.
    Decode(String),
}

impl KRPCError {
    /// Whether the underlying connection is gone and no further call can succeed.
    pub fn is_connection_lost(&self) -> bool {
        match self {
            KRPCError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }

    /// Human readable detail, `Display` only carries the variant name.
    pub fn detail(&self) -> String {
        match self {
            KRPCError::Io(e) => e.to_string(),
            KRPCError::Timeout => String::from("timed out"),
            KRPCError::Handshake(msg) | KRPCError::Decode(msg) => msg.clone(),
            KRPCError::Procedure { service, name, description } => {
                format!("{service}: {name}: {description}")
            }
        }
    }
}

impl std::error::Error for KRPCError {}

impl From<std::io::Error> for KRPCError {
    fn from(value: std::io::Error) -> Self { KRPCError::Io(value) }
}

impl From<prost::DecodeError> for KRPCError {
    fn from(value: prost::DecodeError) -> Self { KRPCError::Decode(value.to_string()) }
}

impl From<RemoteError> for KRPCError {
    fn from(value: RemoteError) -> Self {
        KRPCError::Procedure {
            service: value.service,
            name: value.name,
            description: value.description,
        }
    }
}
