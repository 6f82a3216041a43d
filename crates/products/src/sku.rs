//! Combination engine: the Cartesian product of attribute values.
//!
//! Recursion bottoms out on the last attribute; each outer attribute wraps the
//! combinations already built for the attributes after it. The first attribute
//! therefore varies slowest and the last one fastest.

use serde::ser::{Serialize, SerializeMap, Serializer};

use skuforge_core::ValueObject;

use crate::attribute::{Attribute, AttributeValue};

/// Key under which the derived availability flag is serialized.
pub const ACTIVE_KEY: &str = "active";

/// One fully specified combination: a value per attribute name, plus the
/// derived availability flag.
///
/// A SKU is active iff every chosen value is active. Columns are kept in
/// attribute declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku {
    options: Vec<(String, String)>,
    active: bool,
}

impl Sku {
    fn seed(attribute: &str, value: &AttributeValue) -> Self {
        Self {
            options: vec![(attribute.to_string(), value.name().to_string())],
            active: value.is_active(),
        }
    }

    /// Copy of `self` with `attribute` set to `value` as its leading column.
    ///
    /// An existing column with the same attribute name is overwritten in place.
    fn extended(&self, attribute: &str, value: &AttributeValue) -> Self {
        let mut options = self.options.clone();
        let chosen = value.name().to_string();
        match options.iter_mut().find(|(name, _)| name == attribute) {
            Some((_, slot)) => *slot = chosen,
            None => options.insert(0, (attribute.to_string(), chosen)),
        }
        Self {
            options,
            active: self.active && value.is_active(),
        }
    }

    /// Chosen value name for `attribute`, if the SKU has that column.
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value.as_str())
    }

    /// `(attribute, value)` columns in attribute order, one per distinct name.
    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl ValueObject for Sku {}

// Flat object: one key per attribute plus `active`. An attribute literally named
// `active` is shadowed by the derived flag.
impl Serialize for Sku {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.options.iter().filter(|(k, _)| k.as_str() != ACTIVE_KEY);
        let mut map = serializer.serialize_map(None)?;
        for (attribute, value) in columns {
            map.serialize_entry(attribute, value)?;
        }
        map.serialize_entry(ACTIVE_KEY, &self.active)?;
        map.end()
    }
}

/// Compute every combination of one value per attribute.
///
/// Callers must pass attributes that satisfy the validator's invariants (at
/// least one attribute, each with at least one value). An empty slice yields no
/// SKUs.
pub fn generate_skus(attributes: &[Attribute]) -> Vec<Sku> {
    match attributes {
        [] => Vec::new(),
        [last] => last
            .values()
            .iter()
            .map(|value| Sku::seed(last.name(), value))
            .collect(),
        [first, rest @ ..] => {
            let inner = generate_skus(rest);
            first
                .values()
                .iter()
                .flat_map(|value| inner.iter().map(move |sku| sku.extended(first.name(), value)))
                .collect()
        }
    }
}
