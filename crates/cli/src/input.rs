use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the raw description from `path`, or from stdin when `path` is absent or `-`.
///
/// The text is returned untouched: an empty file is an empty description.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}
