mod request_common;
pub(crate) mod space_center;
pub(crate) mod ui;

pub(crate) use request_common::KRPCRequestType;
