//! The interactive boundary: menus, free-text answers and pauses.

use longbox_sidecar::{FieldPrompt, PromptField, SidecarError};

#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    #[error("Interrupted")]
    Interrupted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Selection {index} is out of range for {prompt}")]
    OutOfRange { prompt: String, index: usize },
}

/// Answers questions on behalf of the user.
///
/// Implementations return [`ChoiceError::Interrupted`] when the user aborts
/// (Ctrl-C or end of input).
pub trait UserChoice {
    /// Pick one of `options`; returns its index.
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize, ChoiceError>;

    /// Free-text answer, trimmed. An empty answer yields `default` when given.
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String, ChoiceError>;

    /// Block until the user acknowledges `message`.
    fn pause(&mut self, message: &str) -> Result<(), ChoiceError>;
}

/// Lets sidecar adapters ask for missing fields through a [`UserChoice`].
pub struct ChoicePrompt<'a>(pub &'a mut dyn UserChoice);

impl FieldPrompt for ChoicePrompt<'_> {
    fn prompt(&mut self, field: PromptField) -> Result<Option<String>, SidecarError> {
        match self.0.text(field.label(), None) {
            Ok(answer) if answer.trim().is_empty() => Ok(None),
            Ok(answer) => Ok(Some(answer)),
            Err(ChoiceError::Interrupted) => Err(SidecarError::Interrupted),
            Err(ChoiceError::Io(e)) => Err(SidecarError::Io(e)),
            Err(e) => Err(SidecarError::invalid(e.to_string())),
        }
    }
}
