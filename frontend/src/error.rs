use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to attach {behavior}: {message}")]
    Dom {
        behavior: &'static str,
        message: String,
    },
}

impl InitError {
    pub fn dom(behavior: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        InitError::Dom { behavior, message }
    }
}
