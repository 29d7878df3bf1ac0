//! Rendered enumeration of a registry's features.

use crate::{Feature, RegistryName};

/// A borrowed, 1-indexed view over a registry's features.
///
/// Renders as a header line followed by one numbered line per feature:
///
/// ```text
/// Features of API Demo:
/// 1. Repository management
/// 2. Branch operations
/// ```
///
/// Each line, including the last, is terminated by `\n` when displayed.
#[derive(Debug, Clone, Copy)]
pub struct FeatureListing<'a> {
    name: &'a RegistryName,
    features: &'a [Feature],
}

impl<'a> FeatureListing<'a> {
    pub(crate) fn new(name: &'a RegistryName, features: &'a [Feature]) -> Self {
        Self { name, features }
    }

    /// The `Features of {name}:` line.
    pub fn header(&self) -> String {
        format!("Features of {}:", self.name)
    }

    /// Features paired with their 1-based position.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &'a Feature)> + 'a {
        let features: &'a [Feature] = self.features;
        features.iter().enumerate().map(|(i, f)| (i + 1, f))
    }

    /// Every rendered line in output order, header first, without newlines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.features.len() + 1);
        lines.push(self.header());
        lines.extend(
            self.entries()
                .map(|(index, feature)| format!("{index}. {feature}")),
        );
        lines
    }
}

impl std::fmt::Display for FeatureListing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for (index, feature) in self.entries() {
            writeln!(f, "{index}. {feature}")?;
        }
        Ok(())
    }
}
