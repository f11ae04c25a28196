use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Toggle control #{id} not found in the document")]
    ToggleNotFound { id: String },

    #[error("No browser window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Config error: {0}")]
    Config(String),
}

impl From<ThemeError> for String {
    fn from(err: ThemeError) -> Self {
        err.to_string()
    }
}
