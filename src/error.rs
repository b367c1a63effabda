use wasm_bindgen::JsValue;

/// Errors raised while configuring or mounting a showcase.
#[derive(Debug, thiserror::Error)]
pub enum CraftError {
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("unsupported grid size {0} (expected 3, 5 or 9)")]
    GridSize(usize),

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("invalid setting {key}={value}")]
    InvalidSetting { key: String, value: String },

    #[error("name must not be empty")]
    EmptyName,

    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("{0} unavailable")]
    Context(&'static str),

    #[error("{0} failed")]
    Failed(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CraftError {
    pub fn setting(key: &str, value: &str) -> Self {
        CraftError::InvalidSetting {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl From<CraftError> for JsValue {
    fn from(err: CraftError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
