//! Configuration section definitions.

mod assets;
mod embed_icons;
mod fonts;
mod icons;
mod setters;
mod translations;
mod version;

pub use assets::AssetsConfig;
pub use embed_icons::EmbedIconsConfig;
pub use fonts::FontsConfig;
pub use icons::IconsConfig;
pub use setters::SetterTarget;
pub use translations::TranslationsConfig;
pub use version::VersionConfig;
