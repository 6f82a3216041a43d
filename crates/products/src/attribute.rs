use serde::Serialize;

use skuforge_core::{DomainResult, ValidationError, ValueObject};

/// One possible value of an attribute, with its availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeValue {
    name: String,
    active: bool,
}

impl AttributeValue {
    pub fn new(name: impl Into<String>, active: bool) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::InvalidAttributeValue);
        }
        Ok(Self { name, active })
    }

    pub fn active(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, true)
    }

    pub fn inactive(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl ValueObject for AttributeValue {}

/// A named axis of variation (e.g. "color") with its ordered values.
///
/// Value order is the order in which SKUs enumerate this attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    name: String,
    values: Vec<AttributeValue>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, values: Vec<AttributeValue>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::MissingAttributeName);
        }
        if values.is_empty() {
            return Err(ValidationError::MissingAttributeValues);
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }
}

impl ValueObject for Attribute {}
