//! Subcommand arguments and handlers.
//!
//! Handlers take the raw description and writers so they can run against
//! in-memory buffers; `main` wires them to the real input and stdio.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use skuforge_core::ValidationError;
use skuforge_products::{Product, validate as validate_description};

use crate::config::Config;

/// Input source shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Product description file; reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

/// Arguments for the generate subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print SKUs whose every chosen value is active.
    #[arg(long)]
    pub active_only: bool,
}

/// How a command ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The description was rejected; the message has been reported.
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Rejected => 1,
        }
    }
}

/// Print the validation result object; rejected input is not an error here.
pub fn validate(raw: &str, config: &Config, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let validation = validate_description(raw);
    write_json(out, &validation, config.pretty)?;

    Ok(if validation.is_valid {
        Outcome::Success
    } else {
        Outcome::Rejected
    })
}

/// Print the SKU list for a valid description.
pub fn generate(
    raw: &str,
    args: &GenerateArgs,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let product = match Product::parse(raw) {
        Ok(product) => product,
        Err(e) => return report(e, err),
    };

    let skus = if args.active_only {
        product.active_skus()
    } else {
        product.skus()
    };
    tracing::info!(product = %product.name(), skus = skus.len(), "skus generated");

    write_json(out, &skus, config.pretty)?;
    Ok(Outcome::Success)
}

/// Header data a presentation layer needs: product name and attribute columns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Columns<'a> {
    name: &'a str,
    attributes: Vec<&'a str>,
    sku_count: usize,
}

/// Print the product name, attribute names and SKU count.
pub fn columns(
    raw: &str,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let product = match Product::parse(raw) {
        Ok(product) => product,
        Err(e) => return report(e, err),
    };

    let columns = Columns {
        name: product.name(),
        attributes: product.attribute_names(),
        sku_count: product.sku_count(),
    };
    write_json(out, &columns, config.pretty)?;
    Ok(Outcome::Success)
}

/// Surface the validation message verbatim.
fn report(error: ValidationError, err: &mut impl Write) -> anyhow::Result<Outcome> {
    tracing::warn!(code = error.code(), "product description rejected");
    writeln!(err, "{error}").context("failed to write to stderr")?;
    Ok(Outcome::Rejected)
}

fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *out, value)
    } else {
        serde_json::to_writer(&mut *out, value)
    };
    written.context("failed to serialize output")?;
    writeln!(out).context("failed to write to stdout")?;
    Ok(())
}
