#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionRequest {
    #[prost(enumeration = "ConnectionType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub client_name: String,
    #[prost(bytes = "vec", tag = "3")]
    pub client_identifier: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionResponse {
    #[prost(enumeration = "ConnectionStatus", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(bytes = "vec", tag = "3")]
    pub client_identifier: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(message, repeated, tag = "1")]
    pub calls: Vec<ProcedureCall>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProcedureCall {
    #[prost(string, tag = "1")]
    pub service: String,
    #[prost(string, tag = "2")]
    pub procedure: String,
    #[prost(message, repeated, tag = "3")]
    pub arguments: Vec<Argument>,
    #[prost(uint32, tag = "4")]
    pub service_id: u32,
    #[prost(uint32, tag = "5")]
    pub procedure_id: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Argument {
    #[prost(uint32, tag = "1")]
    pub position: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(message, optional, tag = "1")]
    pub error: Option<RemoteError>,
    #[prost(message, repeated, tag = "2")]
    pub results: Vec<ProcedureResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProcedureResult {
    #[prost(message, optional, tag = "1")]
    pub error: Option<RemoteError>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoteError {
    #[prost(string, tag = "1")]
    pub service: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub stack_trace: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tuple {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub items: Vec<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ConnectionType {
    Rpc = 0,
    Stream = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ConnectionStatus {
    Ok = 0,
    MalformedMessage = 1,
    Timeout = 2,
    WrongType = 3,
}
