use crate::krpc_handler::KRPCValue;

/// A single remote procedure of a kRPC service.
///
/// Implementors carry the call arguments, the trait supplies the addressing and
/// the expected return type. Arguments are encoded in positional order.
pub(crate) trait KRPCRequestType {
    type Response: KRPCValue;
    const SERVICE: &'static str;
    const PROCEDURE: &'static str;

    fn arguments(&self) -> Vec<Vec<u8>>;
}
