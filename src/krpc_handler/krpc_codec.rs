use super::{KRPCError, krpc_messages::Tuple};
use prost::{
    Message,
    encoding::{decode_varint, encode_varint},
};

/// A value that can be passed to or returned from a kRPC procedure.
///
/// kRPC encodes bare values the way protobuf encodes a field payload without its tag:
/// integers, booleans and object handles as varints, floating point values as little
/// endian fixed width, strings length-prefixed and tuples as a `Tuple` message.
pub(crate) trait KRPCValue: Sized {
    fn encode(&self, buf: &mut Vec<u8>);
    fn decode(bytes: &[u8]) -> Result<Self, KRPCError>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }
}

/// Reference to a remote object. The server uses `0` for `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObjectHandle(pub u64);

impl ObjectHandle {
    pub(crate) fn is_null(self) -> bool { self.0 == 0 }
}

/// Return value that is received but not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ignored;

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], KRPCError> {
    <[u8; N]>::try_from(bytes)
        .map_err(|_| KRPCError::Decode(format!("expected {N} bytes, got {}", bytes.len())))
}

impl KRPCValue for f32 {
    fn encode(&self, buf: &mut Vec<u8>) { buf.extend_from_slice(&self.to_le_bytes()); }

    fn decode(bytes: &[u8]) -> Result<Self, KRPCError> { Ok(f32::from_le_bytes(fixed(bytes)?)) }
}

impl KRPCValue for f64 {
    fn encode(&self, buf: &mut Vec<u8>) { buf.extend_from_slice(&self.to_le_bytes()); }

    fn decode(bytes: &[u8]) -> Result<Self, KRPCError> { Ok(f64::from_le_bytes(fixed(bytes)?)) }
}

/// Signed integers travel zigzag encoded (`sint32`).
impl KRPCValue for i32 {
    #[allow(clippy::cast_sign_loss)]
    fn encode(&self, buf: &mut Vec<u8>) {
        let zigzag = ((*self << 1) ^ (*self >> 31)) as u32;
        encode_varint(u64::from(zigzag), buf);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn decode(mut bytes: &[u8]) -> Result<Self, KRPCError> {
        let raw = decode_varint(&mut bytes)?;
        let zigzag = u32::try_from(raw)
            .map_err(|_| KRPCError::Decode(format!("{raw} does not fit a sint32")))?;
        Ok((zigzag >> 1) as i32 ^ -((zigzag & 1) as i32))
    }
}

impl KRPCValue for bool {
    fn encode(&self, buf: &mut Vec<u8>) { encode_varint(u64::from(*self), buf); }

    fn decode(mut bytes: &[u8]) -> Result<Self, KRPCError> { Ok(decode_varint(&mut bytes)? != 0) }
}

impl KRPCValue for String {
    fn encode(&self, buf: &mut Vec<u8>) {
        encode_varint(self.len() as u64, buf);
        buf.extend_from_slice(self.as_bytes());
    }

    fn decode(mut bytes: &[u8]) -> Result<Self, KRPCError> {
        let len = usize::try_from(decode_varint(&mut bytes)?)
            .map_err(|e| KRPCError::Decode(e.to_string()))?;
        let content = bytes
            .get(..len)
            .ok_or_else(|| KRPCError::Decode(format!("string of {len} bytes truncated")))?;
        String::from_utf8(content.to_vec()).map_err(|e| KRPCError::Decode(e.to_string()))
    }
}

impl KRPCValue for ObjectHandle {
    fn encode(&self, buf: &mut Vec<u8>) { encode_varint(self.0, buf); }

    fn decode(mut bytes: &[u8]) -> Result<Self, KRPCError> {
        Ok(ObjectHandle(decode_varint(&mut bytes)?))
    }
}

impl KRPCValue for () {
    fn encode(&self, _: &mut Vec<u8>) {}

    fn decode(bytes: &[u8]) -> Result<Self, KRPCError> {
        if bytes.is_empty() {
            Ok(())
        } else {
            Err(KRPCError::Decode(format!("expected no value, got {} bytes", bytes.len())))
        }
    }
}

impl KRPCValue for Ignored {
    fn encode(&self, _: &mut Vec<u8>) {}

    fn decode(_: &[u8]) -> Result<Self, KRPCError> { Ok(Ignored) }
}

fn tuple_items<const N: usize>(bytes: &[u8]) -> Result<[f64; N], KRPCError> {
    let tuple = Tuple::decode(bytes)?;
    if tuple.items.len() != N {
        return Err(KRPCError::Decode(format!(
            "expected tuple of {N}, got {}",
            tuple.items.len()
        )));
    }
    let mut values = [0.0; N];
    for (value, item) in values.iter_mut().zip(&tuple.items) {
        *value = <f64 as KRPCValue>::decode(item)?;
    }
    Ok(values)
}

impl KRPCValue for (f64, f64) {
    fn encode(&self, buf: &mut Vec<u8>) {
        let items = vec![self.0.to_bytes(), self.1.to_bytes()];
        Tuple { items }.encode(buf).ok();
    }

    fn decode(bytes: &[u8]) -> Result<Self, KRPCError> {
        let [a, b] = tuple_items::<2>(bytes)?;
        Ok((a, b))
    }
}

impl KRPCValue for (f64, f64, f64) {
    fn encode(&self, buf: &mut Vec<u8>) {
        let items = vec![self.0.to_bytes(), self.1.to_bytes(), self.2.to_bytes()];
        Tuple { items }.encode(buf).ok();
    }

    fn decode(bytes: &[u8]) -> Result<Self, KRPCError> {
        let [a, b, c] = tuple_items::<3>(bytes)?;
        Ok((a, b, c))
    }
}
