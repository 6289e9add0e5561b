use longbox_model::ValidationError;

use crate::prompt::PromptField;

/// Errors that can occur while reading or writing a sidecar file.
#[derive(Debug, thiserror::Error)]
pub enum SidecarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is missing")]
    MissingField(PromptField),

    #[error("Invalid sidecar: {0}")]
    Invalid(String),

    #[error("Invalid metadata: {0}")]
    Validation(#[from] ValidationError),

    #[error("Interrupted")]
    Interrupted,
}

impl SidecarError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
