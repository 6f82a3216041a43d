use serde::Serialize;
use serde_json::Value;

use skuforge_core::{DomainResult, ValidationError, ValueObject};

use crate::attribute::{Attribute, AttributeValue};
use crate::sku::{Sku, generate_skus};
use crate::validation::{self, is_truthy};

/// A product and its ordered attributes.
///
/// Always has at least one attribute, and every attribute at least one value.
/// Attribute order fixes SKU column order and nesting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    attributes: Vec<Attribute>,
}

impl Product {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if attributes.is_empty() {
            return Err(ValidationError::MissingAttributes);
        }
        Ok(Self { name, attributes })
    }

    /// Validate raw text and build the model from it.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let doc = validation::check(raw)?;
        Self::try_from(&doc)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute names in declaration order (the SKU column headers).
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(Attribute::name).collect()
    }

    /// Number of SKUs [`Product::skus`] will produce.
    pub fn sku_count(&self) -> usize {
        self.attributes.iter().map(|a| a.values().len()).product()
    }

    /// Every combination of attribute values, computed on each call.
    pub fn skus(&self) -> Vec<Sku> {
        let skus = generate_skus(&self.attributes);
        tracing::debug!(
            product = %self.name,
            attributes = self.attributes.len(),
            skus = skus.len(),
            "generated skus"
        );
        skus
    }

    /// Only the SKUs whose every chosen value is active, in generation order.
    pub fn active_skus(&self) -> Vec<Sku> {
        self.skus().into_iter().filter(Sku::is_active).collect()
    }
}

impl ValueObject for Product {}

/// Build from a parsed document.
///
/// Names follow JSON truthiness; a non-string name is kept as its JSON text.
/// `active` is read by truthiness since only absent/null flags are rejected.
impl TryFrom<&Value> for Product {
    type Error = ValidationError;

    fn try_from(doc: &Value) -> DomainResult<Self> {
        validation::check_document(doc)?;

        let attributes = doc["attributes"]
            .as_array()
            .ok_or(ValidationError::MissingAttributes)?
            .iter()
            .map(attribute_from_json)
            .collect::<DomainResult<Vec<_>>>()?;

        Product::new(text(&doc["name"]), attributes)
    }
}

fn attribute_from_json(doc: &Value) -> DomainResult<Attribute> {
    let values = doc["values"]
        .as_array()
        .ok_or(ValidationError::MissingAttributeValues)?
        .iter()
        .map(|v| AttributeValue::new(text(&v["name"]), is_truthy(v.get("active"))))
        .collect::<DomainResult<Vec<_>>>()?;

    Attribute::new(text(&doc["name"]), values)
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
