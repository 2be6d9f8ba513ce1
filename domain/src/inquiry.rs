//! Inquiry value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for [`Inquiry`] construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Inquiry text is empty")]
    EmptyText,

    #[error("Inquirer label is empty")]
    EmptyInquirer,
}

/// A single user inquiry (Value Object)
///
/// Pairs the inquirer's label with the question text. The text is stored
/// exactly as received because it is echoed back verbatim in
/// [`Resolution::original_query`](crate::Resolution), so no trimming or
/// normalization happens here beyond the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    inquirer: String,
    text: String,
}

impl Inquiry {
    /// Create a new inquiry
    ///
    /// Fails if either field is empty or only whitespace. Callers that accept
    /// anonymous input supply their configured placeholder identity as the
    /// inquirer before calling this.
    pub fn new(
        inquirer: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, InquiryError> {
        let inquirer = inquirer.into();
        let text = text.into();

        if inquirer.trim().is_empty() {
            return Err(InquiryError::EmptyInquirer);
        }
        if text.trim().is_empty() {
            return Err(InquiryError::EmptyText);
        }

        Ok(Self { inquirer, text })
    }

    /// The inquirer label
    pub fn inquirer(&self) -> &str {
        &self.inquirer
    }

    /// The inquiry text, exactly as submitted
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Inquiry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.inquirer, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_creation() {
        let inquiry = Inquiry::new("siam", "What is Rust?").unwrap();
        assert_eq!(inquiry.inquirer(), "siam");
        assert_eq!(inquiry.text(), "What is Rust?");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(
            Inquiry::new("siam", "").unwrap_err(),
            InquiryError::EmptyText
        );
        assert_eq!(
            Inquiry::new("siam", "   \t").unwrap_err(),
            InquiryError::EmptyText
        );
    }

    #[test]
    fn test_empty_inquirer_rejected() {
        assert_eq!(
            Inquiry::new("", "What is Rust?").unwrap_err(),
            InquiryError::EmptyInquirer
        );
    }

    #[test]
    fn test_text_preserved_verbatim() {
        // Leading/trailing whitespace is kept as long as the text is non-blank
        let inquiry = Inquiry::new("siam", "  spaced out  ").unwrap();
        assert_eq!(inquiry.text(), "  spaced out  ");
    }
}
