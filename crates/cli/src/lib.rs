//! Command-line front end: reads a product description, validates it and
//! prints its SKUs as JSON.

pub mod commands;
pub mod config;
pub mod input;
