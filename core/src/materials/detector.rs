use crate::materials::vocabulary::{Material, FALLBACK_KEYWORDS};

/// Lowercased `"{name}. {description}"`, the text every detector matches against.
pub fn item_text(item_name: &str, item_description: &str) -> String {
    format!("{}. {}", item_name, item_description).to_lowercase()
}

/// Substring detection over the fixed vocabulary.
///
/// A label matches when its lowercase form, or that form with every trailing
/// `s` removed, occurs in the text ("glass" is also tried as "gla"). The keyword
/// map only runs when the vocabulary pass finds nothing.
pub fn detect_materials(item_name: &str, item_description: &str) -> Vec<Material> {
    let text = item_text(item_name, item_description);

    let mut found = Vec::new();
    for m in Material::ALL {
        let token = m.label().to_lowercase();
        let stripped = token.trim_end_matches('s');
        if text.contains(&token) || text.contains(stripped) {
            found.push(m);
        }
    }

    if found.is_empty() {
        for (keyword, m) in FALLBACK_KEYWORDS {
            if text.contains(keyword) {
                found.push(*m);
            }
        }
    }
    found
}
