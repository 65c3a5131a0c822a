//! One-shot notifications shown on the next rendered page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The action succeeded.
    Success,
    /// The action failed.
    Danger,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
}

impl FlashKind {
    /// Lowercase name, used as the CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification written by a handler and read once by the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Visual style.
    #[serde(rename = "type")]
    pub kind: FlashKind,
    /// Short bold lead-in.
    pub intro: String,
    /// Body text.
    pub message: String,
}

impl FlashMessage {
    /// Create a flash message.
    #[must_use]
    pub fn new(kind: FlashKind, intro: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            intro: intro.into(),
            message: message.into(),
        }
    }

    /// A [`FlashKind::Success`] message.
    #[must_use]
    pub fn success(intro: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, intro, message)
    }

    /// A [`FlashKind::Danger`] message.
    #[must_use]
    pub fn danger(intro: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FlashKind::Danger, intro, message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_as_type() {
        let flash = FlashMessage::success("Thank you!", "Signed up.");
        let json = serde_json::to_value(&flash).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["intro"], "Thank you!");
        assert_eq!(json["message"], "Signed up.");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FlashKind::Danger.to_string(), "danger");
        assert_eq!(FlashKind::Warning.as_str(), "warning");
    }
}
