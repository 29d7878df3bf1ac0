//! Program output. Everything written here goes to stdout; logs go to stderr.

use std::fmt::Display;
use std::io::{self, Write};

use registry::{FeatureAdded, FeatureListing};

/// Line-oriented writer for user-facing output.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl Console<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes `line` followed by a newline.
    pub fn line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// `Added feature: {feature}`
    pub fn feature_added(&mut self, added: &FeatureAdded) -> io::Result<()> {
        self.line(added)
    }

    /// Header plus one numbered line per feature.
    pub fn listing(&mut self, listing: &FeatureListing<'_>) -> io::Result<()> {
        write!(self.out, "{listing}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::FeatureRegistry;

    #[test]
    fn renders_notifications_and_listing() {
        let mut registry = FeatureRegistry::new("Test Demo");
        let mut console = Console::new(Vec::new());

        let added = registry.add_feature("Testing");
        console.feature_added(&added).unwrap();
        console.listing(&registry.list_features()).unwrap();

        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            "Added feature: Testing\nFeatures of Test Demo:\n1. Testing\n"
        );
    }
}
