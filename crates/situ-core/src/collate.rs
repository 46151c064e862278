// crates/situ-core/src/collate.rs
// Locale-aware string ordering for category headings

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings the way a browser's default `localeCompare` orders
/// Spanish/Latin text: base letters first, then accents, then case
/// (lowercase before uppercase), with code-point order as the final tiebreak.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Accent- and case-insensitive key
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive key that keeps combining marks
fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<&str>) -> Vec<&str> {
        values.sort_by(|a, b| locale_cmp(a, b));
        values
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(vec!["Otros", "Iluminación", "Baño", "Árboles", "Cocina"]),
            vec!["Árboles", "Baño", "Cocina", "Iluminación", "Otros"]
        );
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(vec!["mesas", "Lámparas", "Accesorios"]), vec!["Accesorios", "Lámparas", "mesas"]);
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
        assert_eq!(locale_cmp("Peña", "Pena"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_cmp("Sillas", "Sillas"), Ordering::Equal);
    }
}
