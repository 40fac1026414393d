use serde::{Deserialize, Serialize};

/// The response body returned by the backend when a request fails.
///
/// The backend reports either a plain message or a list of field validation issues under
/// the `detail` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// A human readable message, e.g. `"Article not found"`.
    Message(String),
    /// Field level validation failures.
    Validation(Vec<ValidationIssue>),
    /// Any other shape; kept so that decoding the error body never fails.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    #[serde(default)]
    pub msg: String,
}

impl ErrorDto {
    /// Message suitable for showing to the user, if the backend supplied one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            ErrorDetail::Message(message) if !message.trim().is_empty() => Some(message.clone()),
            ErrorDetail::Validation(issues) => issues
                .iter()
                .find(|issue| !issue.msg.is_empty())
                .map(|issue| issue.msg.clone()),
            _ => None,
        }
    }
}
