//! Asset-URL accessor module generation.
//!
//! Four runtime modules encode the same manifest under different resolution
//! strategies, plus one type-declaration file:
//!
//! | File              | Accessor                 | Resolution                          |
//! |-------------------|--------------------------|-------------------------------------|
//! | `urls.js`         | `getAssetUrlsByMetaUrl`  | relative to module, at access time  |
//! | `imports.js`      | `getAssetUrlsByImport`   | static imports                      |
//! | `imports.vite.js` | `getAssetUrlsByImport`   | static imports with `?url` suffix   |
//! | `selfHosted.js`   | `getAssetUrls`           | caller-supplied base path           |
//! | `types.d.ts`      | (types only)             | manifest shape declaration          |
//!
//! All four runtime variants return an identical nested mapping
//! (category → name → resolved URL string) for a given options argument.

use anyhow::Result;

use crate::codegen::{ident::import_variable_name, js_string, write_code_file};
use crate::config::PipelineConfig;
use crate::manifest::AssetManifest;

/// JSDoc header shared by the runtime accessor functions.
const ACCESSOR_DOC: &str = "/**\n * @param {AssetUrlOptions} [opts]\n * @public\n */\n";

/// Write all accessor modules and the type declaration into every
/// destination root. Relative hrefs resolve against the module's own
/// folder, so each destination gets its own copy.
pub fn write_all(config: &PipelineConfig, manifest: &AssetManifest) -> Result<()> {
    for root in config.destination_roots() {
        write_code_file(&root.join("types.d.ts"), &declaration_types(manifest))?;
        write_code_file(&root.join("urls.js"), &meta_url_module(manifest))?;
        write_code_file(&root.join("imports.js"), &import_module(manifest, ""))?;
        write_code_file(
            &root.join("imports.vite.js"),
            &import_module(manifest, "?url"),
        )?;
        write_code_file(&root.join("selfHosted.js"), &self_hosted_module(manifest))?;
    }
    Ok(())
}

/// `urls.js`: resolve each asset against the module location at access time.
pub fn meta_url_module(manifest: &AssetManifest) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("import { formatAssetUrl } from './utils.js'\n\n");
    out.push_str(ACCESSOR_DOC);
    out.push_str("export function getAssetUrlsByMetaUrl(opts) {\n\treturn {\n");

    for (category, entries) in manifest.categories() {
        out.push_str("\t\t");
        out.push_str(category.key());
        out.push_str(": {\n");
        for entry in entries {
            out.push_str("\t\t\t");
            out.push_str(&js_string(&entry.name));
            out.push_str(": formatAssetUrl(new URL(");
            out.push_str(&js_string(&format!("./{}", entry.href)));
            out.push_str(", import.meta.url).href, opts),\n");
        }
        out.push_str("\t\t},\n");
    }

    out.push_str("\t}\n}\n");
    out
}

/// `imports.js` / `imports.vite.js`: one static import per asset, accessor
/// returns the imported references. `import_suffix` is appended to each
/// import specifier (`?url` tells a bundler to resolve the import as a URL).
pub fn import_module(manifest: &AssetManifest, import_suffix: &str) -> String {
    let mut imports = String::with_capacity(4096);
    imports.push_str("import { formatAssetUrl } from './utils.js'\n\n");

    let mut declarations = String::with_capacity(4096);
    declarations.push_str(ACCESSOR_DOC);
    declarations.push_str("export function getAssetUrlsByImport(opts) {\n\treturn {\n");

    for (category, entries) in manifest.categories() {
        declarations.push_str("\t\t");
        declarations.push_str(category.key());
        declarations.push_str(": {\n");
        for entry in entries {
            let variable = import_variable_name(category.key(), &entry.name);
            imports.push_str("import ");
            imports.push_str(&variable);
            imports.push_str(" from ");
            imports.push_str(&js_string(&format!("./{}{}", entry.href, import_suffix)));
            imports.push_str("\n");

            declarations.push_str("\t\t\t");
            declarations.push_str(&js_string(&entry.name));
            declarations.push_str(": formatAssetUrl(");
            declarations.push_str(&variable);
            declarations.push_str(", opts),\n");
        }
        declarations.push_str("\t\t},\n");
    }

    declarations.push_str("\t}\n}\n");

    imports.push('\n');
    imports.push_str(&declarations);
    imports
}

/// `selfHosted.js`: resolve against a caller-supplied base path.
pub fn self_hosted_module(manifest: &AssetManifest) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("import { formatAssetUrl } from './utils.js'\n\n");
    out.push_str(ACCESSOR_DOC);
    out.push_str("export function getAssetUrls(opts) {\n\treturn {\n");

    for (category, entries) in manifest.categories() {
        out.push_str("\t\t");
        out.push_str(category.key());
        out.push_str(": {\n");
        for entry in entries {
            out.push_str("\t\t\t");
            out.push_str(&js_string(&entry.name));
            out.push_str(": formatAssetUrl(");
            out.push_str(&js_string(&format!("./{}", entry.href)));
            out.push_str(", opts),\n");
        }
        out.push_str("\t\t},\n");
    }

    out.push_str("\t}\n}\n");
    out
}

/// `types.d.ts`: shape of the manifest plus the two option types.
pub fn declaration_types(manifest: &AssetManifest) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("export type AssetUrl = string | { src: string }\n");
    out.push_str(
        "export type AssetUrlOptions = { baseUrl?: string } | ((assetUrl: string) => string)\n",
    );
    out.push_str("export type AssetUrls = {\n");

    for (category, entries) in manifest.categories() {
        out.push('\t');
        out.push_str(category.key());
        out.push_str(": {\n");
        for entry in entries {
            out.push_str("\t\t");
            out.push_str(&js_string(&entry.name));
            out.push_str(": string,\n");
        }
        out.push_str("\t},\n");
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::AssetCategory;

    fn sample_manifest() -> AssetManifest {
        let mut manifest = AssetManifest::new();
        manifest.insert(AssetCategory::Fonts, "monospace", "fonts/Mono-Medium.woff2");
        manifest.insert(AssetCategory::Icons, "align-left", "icons/icon/align-left.svg");
        manifest.insert(AssetCategory::Icons, "align-right", "icons/icon/align-right.svg");
        manifest.insert(AssetCategory::Translations, "en", "translations/en.json");
        manifest.insert(AssetCategory::EmbedIcons, "maps", "embed-icons/maps.png");
        manifest
    }

    /// Pull the quoted entry keys out of one category block of generated code.
    fn keys_in_block(source: &str, category: &str) -> Vec<String> {
        let start = source
            .find(&format!("{category}: {{"))
            .unwrap_or_else(|| panic!("no {category} block"));
        let block = &source[start..source[start..].find("},").unwrap() + start];
        block
            .lines()
            .skip(1)
            .filter_map(|line| {
                let line = line.trim();
                let end = line.find("\":")?;
                Some(line[1..end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_meta_url_module_shape() {
        let source = meta_url_module(&sample_manifest());
        assert!(source.contains("export function getAssetUrlsByMetaUrl(opts)"));
        assert!(source.contains(
            "\"align-left\": formatAssetUrl(new URL(\"./icons/icon/align-left.svg\", import.meta.url).href, opts),"
        ));
        // Fixed category order
        let fonts = source.find("fonts: {").unwrap();
        let icons = source.find("icons: {").unwrap();
        let translations = source.find("translations: {").unwrap();
        let embed = source.find("embedIcons: {").unwrap();
        assert!(fonts < icons && icons < translations && translations < embed);
    }

    #[test]
    fn test_import_module_emits_imports() {
        let source = import_module(&sample_manifest(), "");
        assert!(source.contains("import iconsAlignLeft from \"./icons/icon/align-left.svg\""));
        assert!(source.contains("\"align-left\": formatAssetUrl(iconsAlignLeft, opts),"));
        assert!(source.contains("export function getAssetUrlsByImport(opts)"));
    }

    #[test]
    fn test_import_module_vite_suffix() {
        let source = import_module(&sample_manifest(), "?url");
        assert!(source.contains("from \"./icons/icon/align-left.svg?url\""));
        assert!(source.contains("from \"./fonts/Mono-Medium.woff2?url\""));
        // Accessor body is unaffected by the suffix
        assert!(source.contains("\"align-left\": formatAssetUrl(iconsAlignLeft, opts),"));
    }

    #[test]
    fn test_self_hosted_module_plain_hrefs() {
        let source = self_hosted_module(&sample_manifest());
        assert!(source.contains("export function getAssetUrls(opts)"));
        assert!(source.contains("\"monospace\": formatAssetUrl(\"./fonts/Mono-Medium.woff2\", opts),"));
        assert!(!source.contains("import.meta.url"));
    }

    #[test]
    fn test_declaration_types_shape() {
        let source = declaration_types(&sample_manifest());
        assert!(source.contains("export type AssetUrl = string | { src: string }"));
        assert!(source.contains("\"monospace\": string,"));
        assert!(source.contains("\"align-left\": string,"));
    }

    #[test]
    fn test_all_variants_expose_identical_key_sets() {
        let manifest = sample_manifest();
        let variants = [
            meta_url_module(&manifest),
            import_module(&manifest, ""),
            import_module(&manifest, "?url"),
            self_hosted_module(&manifest),
        ];

        for category in ["fonts", "icons", "translations", "embedIcons"] {
            let expected = keys_in_block(&variants[0], category);
            for variant in &variants[1..] {
                assert_eq!(keys_in_block(variant, category), expected);
            }
        }
        assert_eq!(
            keys_in_block(&variants[0], "icons"),
            vec!["align-left", "align-right"]
        );
    }

    #[test]
    fn test_empty_manifest_still_has_all_categories() {
        let manifest = AssetManifest::new();
        let source = self_hosted_module(&manifest);
        for category in ["fonts", "icons", "translations", "embedIcons"] {
            assert!(source.contains(&format!("{category}: {{")));
        }
    }
}
