use crate::error::SidecarError;

/// Fields an adapter may ask the user for when a sidecar omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    PublisherTitle,
    SeriesTitle,
    IssueNumber,
    IssueTitle,
}

impl PromptField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PublisherTitle => "Publisher Title",
            Self::SeriesTitle => "Series Title",
            Self::IssueNumber => "Issue Number",
            Self::IssueTitle => "Issue Title",
        }
    }
}

impl std::fmt::Display for PromptField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Supplies values for fields missing from a sidecar.
///
/// `Ok(None)` means no value is available; adapters turn that into
/// [`SidecarError::MissingField`] for required fields.
pub trait FieldPrompt {
    fn prompt(&mut self, field: PromptField) -> Result<Option<String>, SidecarError>;
}

/// Never answers. Used outside the interactive import path.
pub struct NoPrompt;

impl FieldPrompt for NoPrompt {
    fn prompt(&mut self, _field: PromptField) -> Result<Option<String>, SidecarError> {
        Ok(None)
    }
}

/// Return `value` if it has content, otherwise ask `prompt`.
pub(crate) fn require(
    value: Option<String>,
    field: PromptField,
    prompt: &mut dyn FieldPrompt,
) -> Result<String, SidecarError> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    log::debug!("Sidecar has no {field}, asking");
    match prompt.prompt(field)? {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(SidecarError::MissingField(field)),
    }
}
