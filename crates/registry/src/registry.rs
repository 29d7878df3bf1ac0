//! The [`FeatureRegistry`] container and the notification it produces on append.

use serde::{Deserialize, Serialize};

use crate::{Feature, FeatureListing, RegistryName};

/// A named, ordered, append-only collection of feature labels.
///
/// Insertion order is preserved and duplicates are kept. There is no removal
/// operation: the feature count only ever grows, through
/// [`add_feature`](Self::add_feature).
///
/// The registry performs no console I/O itself. Appending emits a `tracing`
/// event and hands back a [`FeatureAdded`] notification; listing returns a
/// [`FeatureListing`] view. Callers decide where either is printed.
/// Serialises as `{"name": .., "features": [..]}`. There is no way back from
/// that form; registries are only built through [`new`](Self::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRegistry {
    name: RegistryName,
    features: Vec<Feature>,
}

impl FeatureRegistry {
    /// Creates an empty registry. The name is not validated.
    pub fn new(name: impl Into<RegistryName>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &RegistryName {
        &self.name
    }

    /// All recorded features, in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of recorded features, duplicates included.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Appends `feature` to the end of the registry.
    ///
    /// Every value is accepted, including the empty string and labels that
    /// are already present. The returned [`FeatureAdded`] renders as
    /// `Added feature: {feature}`.
    pub fn add_feature(&mut self, feature: impl Into<Feature>) -> FeatureAdded {
        let feature = feature.into();
        tracing::debug!(
            registry = %self.name,
            feature = %feature,
            position = self.features.len() + 1,
            "Feature added"
        );
        self.features.push(feature.clone());
        FeatureAdded { feature }
    }

    /// A 1-indexed enumeration of the features under a header naming the
    /// registry. See [`FeatureListing`] for the rendered format.
    pub fn list_features(&self) -> FeatureListing<'_> {
        FeatureListing::new(&self.name, &self.features)
    }
}

// ---------------------------------------------------------------------------

/// Notification returned by [`FeatureRegistry::add_feature`].
#[must_use = "the notification is how callers report an added feature"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAdded {
    feature: Feature,
}

impl FeatureAdded {
    /// The feature that was appended.
    pub fn feature(&self) -> &Feature {
        &self.feature
    }
}

impl std::fmt::Display for FeatureAdded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Added feature: {}", self.feature)
    }
}
