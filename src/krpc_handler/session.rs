use super::{KRPCError, krpc_client::KRPCClient};
use crate::event;
use std::{net::IpAddr, sync::Arc};

/// Owns the connection to a kRPC server addressed by IP and RPC port.
///
/// The stream server is expected on the port following the RPC port. A failed
/// connection attempt is reported through [`SessionManager::connect`]'s return value,
/// the cause stays available in [`SessionManager::last_error`].
#[derive(Debug)]
pub(crate) struct SessionManager {
    name: String,
    address: IpAddr,
    port: u16,
    client: Option<Arc<KRPCClient>>,
    last_error: Option<KRPCError>,
}

impl SessionManager {
    pub(crate) fn new(name: &str, address: IpAddr, port: u16) -> Self {
        Self { name: String::from(name), address, port, client: None, last_error: None }
    }

    /// Port of the stream server, `None` if the RPC port is the last valid port.
    pub(crate) fn stream_port(&self) -> Option<u16> { self.port.checked_add(1) }

    pub(crate) fn is_connected(&self) -> bool { self.client.is_some() }

    pub(crate) fn client(&self) -> Option<Arc<KRPCClient>> { self.client.clone() }

    pub(crate) fn last_error(&self) -> Option<&KRPCError> { self.last_error.as_ref() }

    /// Opens a new session, replacing any existing one.
    ///
    /// # Returns
    /// `true` if both connections were established and accepted by the server.
    pub(crate) async fn connect(&mut self) -> bool {
        self.disconnect().await;
        let Some(stream_port) = self.stream_port() else {
            self.last_error = Some(KRPCError::Handshake(format!(
                "no stream port after port {}",
                self.port
            )));
            return false;
        };
        match KRPCClient::connect(&self.name, self.address, self.port, stream_port).await {
            Ok(client) => {
                event!("{} connected as client {:02x?}", self.name, client.client_id());
                self.client = Some(Arc::new(client));
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e);
                false
            }
        }
    }

    /// Closes the current session, if any.
    pub(crate) async fn disconnect(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
        }
    }
}
