use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logger initialisation failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Browser window is not available")]
    NoWindow,

    #[error("Browser API call failed: {message}")]
    Dom { message: String },

    #[error("Site data error: {0}")]
    SiteData(#[from] portfolio_core::CatalogError),
}

impl AppError {
    pub fn from_js(value: JsValue) -> Self {
        AppError::Dom {
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
