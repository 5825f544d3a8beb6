use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        ClipboardError::Rejected(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Places `text` on the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
