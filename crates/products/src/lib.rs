//! Products domain module: variant descriptions and SKU generation.
//!
//! This crate contains business rules for product variants, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Raw text goes
//! through [`validate`] (or [`Product::parse`]), and a valid [`Product`] yields
//! its SKUs through [`Product::skus`].

pub mod attribute;
pub mod product;
pub mod sku;
pub mod validation;

pub use attribute::{Attribute, AttributeValue};
pub use product::Product;
pub use sku::{Sku, generate_skus};
pub use validation::{Validation, check, check_document, validate};
