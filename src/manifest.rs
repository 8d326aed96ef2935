//! In-memory manifest of collected asset paths.
//!
//! The copy stages append entries as they run; the declaration-file
//! generators read the completed manifest afterwards. The manifest is an
//! explicit value threaded through the stage functions rather than shared
//! module state, so once a stage returns, its category is complete and
//! nothing mutates it again.

/// Category of static asset.
///
/// `ALL` fixes the order categories appear in generated modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Fonts,
    Icons,
    Translations,
    EmbedIcons,
}

impl AssetCategory {
    pub const ALL: [Self; 4] = [
        Self::Fonts,
        Self::Icons,
        Self::Translations,
        Self::EmbedIcons,
    ];

    /// Key used for this category in generated accessor modules.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fonts => "fonts",
            Self::Icons => "icons",
            Self::Translations => "translations",
            Self::EmbedIcons => "embedIcons",
        }
    }
}

/// One collected asset: logical name and destination-relative href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub href: String,
}

/// Nested mapping of category → logical name → relative output path.
///
/// Entries preserve insertion order; stages insert in sorted file-name
/// order so generated output is deterministic.
#[derive(Debug, Default)]
pub struct AssetManifest {
    fonts: Vec<ManifestEntry>,
    icons: Vec<ManifestEntry>,
    translations: Vec<ManifestEntry>,
    embed_icons: Vec<ManifestEntry>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a category.
    pub fn insert(
        &mut self,
        category: AssetCategory,
        name: impl Into<String>,
        href: impl Into<String>,
    ) {
        self.section_mut(category).push(ManifestEntry {
            name: name.into(),
            href: href.into(),
        });
    }

    /// Entries of one category, in insertion order.
    pub fn entries(&self, category: AssetCategory) -> &[ManifestEntry] {
        match category {
            AssetCategory::Fonts => &self.fonts,
            AssetCategory::Icons => &self.icons,
            AssetCategory::Translations => &self.translations,
            AssetCategory::EmbedIcons => &self.embed_icons,
        }
    }

    /// All categories with their entries, in generated-module order.
    pub fn categories(&self) -> impl Iterator<Item = (AssetCategory, &[ManifestEntry])> {
        AssetCategory::ALL
            .into_iter()
            .map(|category| (category, self.entries(category)))
    }

    /// Total number of collected entries across all categories.
    pub fn len(&self) -> usize {
        AssetCategory::ALL
            .into_iter()
            .map(|category| self.entries(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn section_mut(&mut self, category: AssetCategory) -> &mut Vec<ManifestEntry> {
        match category {
            AssetCategory::Fonts => &mut self.fonts,
            AssetCategory::Icons => &mut self.icons,
            AssetCategory::Translations => &mut self.translations,
            AssetCategory::EmbedIcons => &mut self.embed_icons,
        }
    }
}
