use crate::krpc_handler::{
    KRPCError, ObjectHandle,
    krpc_client::KRPCClient,
    krpc_request::ui::{
        CanvasAddPanelRequest, CanvasRectTransformGetRequest, PanelAddTextRequest,
        PanelRectTransformGetRequest, RectTransformPositionSetRequest,
        RectTransformSizeGetRequest, RectTransformSizeSetRequest, StockCanvasGetRequest,
        TextColorSetRequest, TextContentSetRequest, TextSizeSetRequest,
    },
};
use crate::warn;
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::mpsc;

#[derive(Debug, Display)]
pub(crate) enum UISetupError {
    /// The server exposes no stock canvas.
    NoCanvas,
    /// Creating the panel or its text failed.
    Widgets(KRPCError),
}

impl std::error::Error for UISetupError {}

/// A text panel on the game's stock canvas showing the latest status message.
///
/// Messages are forwarded in order by a single task owning the text handle.
#[derive(Debug)]
pub(crate) struct UIMirror {
    updates: mpsc::UnboundedSender<String>,
}

impl UIMirror {
    const PANEL_SIZE: (f64, f64) = (200.0, 50.0);
    const PANEL_TOP_OFFSET: f64 = 10.0;
    const TEXT_COLOR: (f64, f64, f64) = (1.0, 1.0, 1.0);
    const TEXT_SIZE: i32 = 18;

    /// Creates the panel and starts the forwarding task.
    ///
    /// # Errors
    /// [`UISetupError::NoCanvas`] if the server has no stock canvas,
    /// [`UISetupError::Widgets`] if any widget call fails.
    pub(crate) async fn configure(client: Arc<KRPCClient>) -> Result<Self, UISetupError> {
        let canvas = match client.call(&StockCanvasGetRequest {}).await {
            Ok(canvas) if !canvas.is_null() => canvas,
            _ => return Err(UISetupError::NoCanvas),
        };
        let text = Self::build_widgets(&client, canvas).await.map_err(UISetupError::Widgets)?;

        let (updates, mut rx) = mpsc::unbounded_channel::<String>();
        tokio::spawn(async move {
            while let Some(content) = rx.recv().await {
                if let Err(e) = client.call(&TextContentSetRequest { text, content }).await {
                    warn!("UI mirror stopped: {}", e.detail());
                    break;
                }
            }
        });
        Ok(Self { updates })
    }

    async fn build_widgets(
        client: &KRPCClient,
        canvas: ObjectHandle,
    ) -> Result<ObjectHandle, KRPCError> {
        let canvas_rect = client.call(&CanvasRectTransformGetRequest { canvas }).await?;
        let (screen_width, _) = client.call(&RectTransformSizeGetRequest { rect: canvas_rect }).await?;

        let panel = client.call(&CanvasAddPanelRequest { canvas, visible: true }).await?;
        let rect = client.call(&PanelRectTransformGetRequest { panel }).await?;
        client.call(&RectTransformSizeSetRequest { rect, size: Self::PANEL_SIZE }).await?;
        let position = (screen_width / 2.0 - Self::PANEL_SIZE.0 / 2.0, Self::PANEL_TOP_OFFSET);
        client.call(&RectTransformPositionSetRequest { rect, position }).await?;

        let text = client
            .call(&PanelAddTextRequest { panel, content: String::new(), visible: true })
            .await?;
        client.call(&TextColorSetRequest { text, color: Self::TEXT_COLOR }).await?;
        client.call(&TextSizeSetRequest { text, size: Self::TEXT_SIZE }).await?;
        Ok(text)
    }

    /// Queues `msg` as the new panel content. Never blocks.
    pub(crate) fn show(&self, msg: &str) { let _ = self.updates.send(String::from(msg)); }
}
