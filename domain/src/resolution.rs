//! Resolution value object

use crate::inquiry::Inquiry;
use serde::{Deserialize, Serialize};

/// The finished answer to one [`Inquiry`] (Value Object)
///
/// Carries the final response text plus the original query exactly as the
/// inquirer submitted it. Relaying surfaces must not alter `original_query`
/// in transit, so the only constructor copies it straight from the inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    response_text: String,
    original_query: String,
}

impl Resolution {
    /// Build the resolution for an inquiry
    pub fn for_inquiry(inquiry: &Inquiry, response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            original_query: inquiry.text().to_string(),
        }
    }

    /// The final response text
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// The inquiry text, verbatim
    pub fn original_query(&self) -> &str {
        &self.original_query
    }
}
