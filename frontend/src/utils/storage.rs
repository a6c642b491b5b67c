use thiserror::Error;
use web_sys::{Document, Element, Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document body")]
    NoBody,
    #[error("element #{0} not found")]
    NotFound(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl DomError {
    pub fn js(value: &wasm_bindgen::JsValue) -> Self {
        DomError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::NotFound(id.to_string()))
}

pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()
        .map_err(|e| DomError::js(&e))?
        .ok_or_else(|| DomError::Js("localStorage unavailable".into()))
}
