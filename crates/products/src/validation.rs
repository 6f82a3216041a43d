//! Structural validation of raw product descriptions.
//!
//! Checks run in a fixed order and stop at the first violation met while
//! walking the document: product name, attribute list, then each attribute in
//! document order (its name, its value list, then each of its values).
//!
//! "Present" follows JSON truthiness for names: `null`, `false`, `0`, and `""`
//! count as missing. The `active` flag only has to be present and non-null; an
//! explicit `false` is fine.

use serde::Serialize;
use serde_json::Value;

use skuforge_core::{DomainResult, ValidationError};

/// Outcome of validating a raw description.
///
/// `message` is empty when `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub message: String,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            message: error.to_string(),
        }
    }
}

impl From<&DomainResult<Value>> for Validation {
    fn from(result: &DomainResult<Value>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(*e),
        }
    }
}

/// Validate raw text, reporting the first structural problem found.
///
/// Never panics and never propagates a parse failure.
pub fn validate(raw: &str) -> Validation {
    Validation::from(&check(raw))
}

/// Parse and validate raw text, returning the parsed document on success.
pub fn check(raw: &str) -> DomainResult<Value> {
    if raw.is_empty() {
        return Err(reject(ValidationError::EmptyInput));
    }

    let doc: Value = serde_json::from_str(raw).map_err(|e| {
        tracing::debug!(error = %e, "product description is not valid JSON");
        reject(ValidationError::MalformedSyntax)
    })?;

    check_document(&doc).map_err(reject)?;
    Ok(doc)
}

/// Structural checks on an already-parsed document.
pub fn check_document(doc: &Value) -> DomainResult<()> {
    if !is_truthy(doc.get("name")) {
        return Err(ValidationError::MissingName);
    }

    let attributes =
        non_empty_array(doc.get("attributes")).ok_or(ValidationError::MissingAttributes)?;

    for attribute in attributes {
        if !is_truthy(attribute.get("name")) {
            return Err(ValidationError::MissingAttributeName);
        }

        let values = non_empty_array(attribute.get("values"))
            .ok_or(ValidationError::MissingAttributeValues)?;

        for value in values {
            if !is_truthy(value.get("name")) || is_nullish(value.get("active")) {
                return Err(ValidationError::InvalidAttributeValue);
            }
        }
    }

    Ok(())
}

fn reject(error: ValidationError) -> ValidationError {
    tracing::debug!(code = error.code(), "product description rejected");
    error
}

/// JSON truthiness: absent, `null`, `false`, zero and `""` are falsy.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn is_nullish(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array).filter(|items| !items.is_empty())
}
