/// A required field is missing or a value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("publisher title is required")]
    MissingPublisherTitle,

    #[error("series title is required")]
    MissingSeriesTitle,

    #[error("issue number is required")]
    MissingIssueNumber,

    #[error("series volume must be at least 1")]
    InvalidVolume,

    #[error("series start year {0} is not after 1900")]
    InvalidStartYear(i32),
}
