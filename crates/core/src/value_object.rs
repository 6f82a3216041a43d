//! Value object trait: equality by value, not identity.
//!
//! Everything in a product description is a value object: attribute values,
//! attributes, the product itself and every derived SKU. None of them carry an
//! identity; two descriptions with the same content are the same description.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once built and **compared by value**. To
/// "modify" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied freely between the model and derived SKUs
/// - **PartialEq**: comparison is by content
/// - **Debug**: helpful for logging and test assertions
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct AttributeValue {
///     name: String,
///     active: bool,
/// }
///
/// impl ValueObject for AttributeValue {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
