use thiserror::Error;

/// Input rejected on the client before submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Publication year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },
    #[error("Each author's contribution must be between 0% and 100%")]
    ContributionOutOfRange,
    #[error("Authors' contributions must add up to 100% (current total: {}%)", percent(.0))]
    ContributionSum(f64),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub(crate) fn percent(value: &f64) -> f64 {
    (value * 100.0).round() / 100.0
}
