//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// Structural problem found in a product description.
///
/// The `Display` text of each variant is the user-facing message and is part of
/// the public contract: callers surface it verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationError {
    /// The raw input was the empty string.
    #[error("Empty String")]
    EmptyInput,

    /// The raw input could not be parsed as JSON.
    #[error("Invalid JSON")]
    MalformedSyntax,

    /// The product has no truthy `name`.
    #[error("Product Name not Found")]
    MissingName,

    /// The product has no `attributes` array, or it is empty.
    #[error("Product Attributes not Found")]
    MissingAttributes,

    /// An attribute has no truthy `name`.
    #[error("Product Attribute Name not Found")]
    MissingAttributeName,

    /// An attribute has no `values` array, or it is empty.
    #[error("Product Attribute Values not Found")]
    MissingAttributeValues,

    /// A value lacks a truthy `name`, or its `active` flag is absent/null.
    #[error("Invalid Product Attribute Value")]
    InvalidAttributeValue,
}

impl ValidationError {
    /// Stable machine-readable code, used in structured logs.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::MalformedSyntax => "malformed_syntax",
            Self::MissingName => "missing_name",
            Self::MissingAttributes => "missing_attributes",
            Self::MissingAttributeName => "missing_attribute_name",
            Self::MissingAttributeValues => "missing_attribute_values",
            Self::InvalidAttributeValue => "invalid_attribute_value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_user_facing_messages() {
        assert_eq!(ValidationError::EmptyInput.to_string(), "Empty String");
        assert_eq!(ValidationError::MalformedSyntax.to_string(), "Invalid JSON");
        assert_eq!(ValidationError::MissingName.to_string(), "Product Name not Found");
        assert_eq!(
            ValidationError::MissingAttributes.to_string(),
            "Product Attributes not Found"
        );
        assert_eq!(
            ValidationError::MissingAttributeName.to_string(),
            "Product Attribute Name not Found"
        );
        assert_eq!(
            ValidationError::MissingAttributeValues.to_string(),
            "Product Attribute Values not Found"
        );
        assert_eq!(
            ValidationError::InvalidAttributeValue.to_string(),
            "Invalid Product Attribute Value"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let all = [
            ValidationError::EmptyInput,
            ValidationError::MalformedSyntax,
            ValidationError::MissingName,
            ValidationError::MissingAttributes,
            ValidationError::MissingAttributeName,
            ValidationError::MissingAttributeValues,
            ValidationError::InvalidAttributeValue,
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), all.len());
    }
}
