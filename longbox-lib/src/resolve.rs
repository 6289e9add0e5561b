//! Per-field reconciliation of values offered by several catalog sources.

use std::fmt::Display;

use crate::choice::{ChoiceError, UserChoice};
use crate::settings::Settings;

/// How conflicting candidates are settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPolicy {
    /// Source names, highest precedence first.
    pub precedence: Vec<String>,
    /// Always ask the user, even when a precedence order is configured.
    pub interactive: bool,
}

impl ResolutionPolicy {
    pub fn new(precedence: Vec<String>, interactive: bool) -> Self {
        Self {
            precedence,
            interactive,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.general.resolution_order.clone(),
            settings.general.resolve_manually,
        )
    }

    /// Position of `source` in the precedence list.
    pub fn rank(&self, source: &str) -> Option<usize> {
        self.precedence.iter().position(|p| same_source(p, source))
    }
}

/// Source names compare ignoring case and punctuation, so `grand_comics_database`
/// matches `Grand Comics Database`.
pub fn same_source(a: &str, b: &str) -> bool {
    let fold = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    };
    fold(a) == fold(b)
}

/// Pick one value out of `(source, value)` candidates.
///
/// 1. No candidates: `None`.
/// 2. All values equal: that value, without asking.
/// 3. Not interactive with a precedence order: the first listed source that
///    offered a value. Unlisted sources are never picked here.
/// 4. Otherwise (or when no listed source offered anything) the user picks.
pub fn resolve<T>(
    label: &str,
    candidates: &[(String, T)],
    policy: &ResolutionPolicy,
    choice: &mut dyn UserChoice,
) -> Result<Option<T>, ChoiceError>
where
    T: Clone + PartialEq + Display,
{
    let Some((_, first)) = candidates.first() else {
        return Ok(None);
    };
    if candidates.iter().all(|(_, value)| value == first) {
        return Ok(Some(first.clone()));
    }

    if !policy.interactive {
        for wanted in &policy.precedence {
            if let Some((_, value)) = candidates.iter().find(|(source, _)| same_source(source, wanted)) {
                log::debug!("{label}: using {wanted}");
                return Ok(Some(value.clone()));
            }
        }
    }

    let options: Vec<String> = candidates
        .iter()
        .map(|(source, value)| format!("{source} - {value}"))
        .collect();
    let index = choice.select(&format!("Select {label}"), &options)?;
    candidates
        .get(index)
        .map(|(_, value)| Some(value.clone()))
        .ok_or_else(|| ChoiceError::OutOfRange {
            prompt: label.to_string(),
            index,
        })
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
