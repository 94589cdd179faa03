//! Procedures of the `UI` service used to mirror status text into the game.

use super::KRPCRequestType;
use crate::krpc_handler::{KRPCValue, ObjectHandle};

#[derive(Debug)]
pub(crate) struct StockCanvasGetRequest {}

impl KRPCRequestType for StockCanvasGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "get_StockCanvas";

    fn arguments(&self) -> Vec<Vec<u8>> { Vec::new() }
}

#[derive(Debug)]
pub(crate) struct CanvasRectTransformGetRequest {
    pub canvas: ObjectHandle,
}

impl KRPCRequestType for CanvasRectTransformGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Canvas_get_RectTransform";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.canvas.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct CanvasAddPanelRequest {
    pub canvas: ObjectHandle,
    pub visible: bool,
}

impl KRPCRequestType for CanvasAddPanelRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Canvas_AddPanel";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.canvas.to_bytes(), self.visible.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct PanelRectTransformGetRequest {
    pub panel: ObjectHandle,
}

impl KRPCRequestType for PanelRectTransformGetRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Panel_get_RectTransform";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.panel.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct PanelAddTextRequest {
    pub panel: ObjectHandle,
    pub content: String,
    pub visible: bool,
}

impl KRPCRequestType for PanelAddTextRequest {
    type Response = ObjectHandle;
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Panel_AddText";

    fn arguments(&self) -> Vec<Vec<u8>> {
        vec![self.panel.to_bytes(), self.content.to_bytes(), self.visible.to_bytes()]
    }
}

#[derive(Debug)]
pub(crate) struct RectTransformSizeGetRequest {
    pub rect: ObjectHandle,
}

impl KRPCRequestType for RectTransformSizeGetRequest {
    type Response = (f64, f64);
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "RectTransform_get_Size";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.rect.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct RectTransformSizeSetRequest {
    pub rect: ObjectHandle,
    pub size: (f64, f64),
}

impl KRPCRequestType for RectTransformSizeSetRequest {
    type Response = ();
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "RectTransform_set_Size";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.rect.to_bytes(), self.size.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct RectTransformPositionSetRequest {
    pub rect: ObjectHandle,
    pub position: (f64, f64),
}

impl KRPCRequestType for RectTransformPositionSetRequest {
    type Response = ();
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "RectTransform_set_Position";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.rect.to_bytes(), self.position.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct TextColorSetRequest {
    pub text: ObjectHandle,
    pub color: (f64, f64, f64),
}

impl KRPCRequestType for TextColorSetRequest {
    type Response = ();
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Text_set_Color";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.text.to_bytes(), self.color.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct TextSizeSetRequest {
    pub text: ObjectHandle,
    pub size: i32,
}

impl KRPCRequestType for TextSizeSetRequest {
    type Response = ();
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Text_set_Size";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.text.to_bytes(), self.size.to_bytes()] }
}

#[derive(Debug)]
pub(crate) struct TextContentSetRequest {
    pub text: ObjectHandle,
    pub content: String,
}

impl KRPCRequestType for TextContentSetRequest {
    type Response = ();
    const SERVICE: &'static str = "UI";
    const PROCEDURE: &'static str = "Text_set_Content";

    fn arguments(&self) -> Vec<Vec<u8>> { vec![self.text.to_bytes(), self.content.to_bytes()] }
}
