//! The demo run: build a registry, echo each addition, list the result.

use std::io::Write;

use anyhow::{Context, Result};
use registry::FeatureRegistry;

use crate::cli::DemoArgs;
use crate::console::Console;

pub const DEFAULT_NAME: &str = "API Demo";

pub const DEFAULT_FEATURES: [&str; 3] = [
    "Repository management",
    "Branch operations",
    "File handling",
];

/// Runs the demo described by `args` and returns the populated registry.
///
/// When `args.features` is empty the [`DEFAULT_FEATURES`] are added.
pub fn run<W: Write>(args: &DemoArgs, console: &mut Console<W>) -> Result<FeatureRegistry> {
    let features: Vec<&str> = if args.features.is_empty() {
        DEFAULT_FEATURES.to_vec()
    } else {
        args.features.iter().map(String::as_str).collect()
    };

    let mut registry = FeatureRegistry::new(args.name.as_str());
    for feature in features {
        let added = registry.add_feature(feature);
        console
            .feature_added(&added)
            .context("failed to write to stdout")?;
    }

    console
        .listing(&registry.list_features())
        .context("failed to write to stdout")?;

    tracing::info!(
        registry = %registry.name(),
        features = registry.len(),
        "Demo complete"
    );
    Ok(registry)
}
