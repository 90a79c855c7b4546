use std::cmp::Ordering;

/// Primary-strength comparison for option labels
///
/// Letters are compared case- and accent-insensitively (`"Acadêmico"` sorts
/// next to `"Academic"`, `"ç"` as `"c"`). Strings that tie at that level
/// fall back to plain ordering so the result is total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.cmp(b))
}

/// Sorts labels in place with [`locale_cmp`]
pub fn sort_localized(labels: &mut [&str]) {
    labels.sort_by(|a, b| locale_cmp(a, b));
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(fold_accent)
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
