//! Deterministic import binding names for generated modules.

/// Derive the import binding for a manifest entry.
///
/// `{category}_{name}` with every run of non-alphanumeric characters
/// treated as one boundary, and the character after each boundary
/// uppercased: `icons` + `align-left` → `iconsAlignLeft`.
pub fn import_variable_name(category: &str, name: &str) -> String {
    let raw = format!("{category}_{name}");
    let mut out = String::with_capacity(raw.len());
    let mut boundary = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if boundary && !out.is_empty() {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }

    out
}
