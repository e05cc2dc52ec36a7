//! Assets and the ordered asset catalog.

use indexmap::IndexMap;

/// Identifier for an inline asset, as it appears inside a caption marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        AssetId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        AssetId(s.to_string())
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a caller-owned drawable image.
///
/// The layout core never dereferences it; it is threaded through to asset
/// placements so a renderer can look the image back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawableHandle(pub u64);

/// An inline asset referenced from caption text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    pub id: AssetId,
    /// Display name, for hosts that list assets.
    pub name: String,
    /// Natural pixel width of the backing image.
    pub natural_width: f64,
    /// Natural pixel height of the backing image.
    pub natural_height: f64,
    pub drawable: DrawableHandle,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        natural_width: f64,
        natural_height: f64,
        drawable: DrawableHandle,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            name: name.into(),
            natural_width,
            natural_height,
            drawable,
        }
    }

    /// Width over height. A zero natural height yields 1.0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.natural_height == 0.0 {
            1.0
        } else {
            self.natural_width / self.natural_height
        }
    }
}

/// An insertion-ordered map of assets, keyed by id.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetCatalog {
    assets: IndexMap<String, Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset, replacing any previous entry with the same id.
    pub fn insert(&mut self, asset: Asset) {
        self.assets.insert(asset.id.0.clone(), asset);
    }

    /// Look up an asset by id.
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// Check whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    /// Iterate over assets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
