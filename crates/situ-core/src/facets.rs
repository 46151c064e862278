// crates/situ-core/src/facets.rs
// Facet vocabularies derived from the loaded records

use situ_types::ProductRecord;
use std::collections::BTreeSet;

/// Sorted set of unique facet values (colors or categories)
///
/// Ordering is plain code-point order so chip rows stay stable between loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetVocabulary {
    values: Vec<String>,
}

impl FacetVocabulary {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        Self {
            values: set.into_iter().collect(),
        }
    }

    /// All `colores[].color` values across records; blank names are skipped
    pub fn colors(records: &[ProductRecord]) -> Self {
        Self::from_values(
            records
                .iter()
                .flat_map(|r| r.color_names())
                .filter(|c| !c.trim().is_empty()),
        )
    }

    /// All non-blank `categoria` values; uncategorized records add nothing
    pub fn categories(records: &[ProductRecord]) -> Self {
        Self::from_values(
            records
                .iter()
                .filter(|r| r.has_category())
                .map(|r| r.category.as_str()),
        )
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, colors: &[&str]) -> ProductRecord {
        let colores: Vec<String> = colors
            .iter()
            .map(|c| format!(r#"{{"color": "{}", "precio": 1}}"#, c))
            .collect();
        serde_json::from_str(&format!(
            r#"{{"nombre": "x", "categoria": "{}", "colores": [{}]}}"#,
            category,
            colores.join(",")
        ))
        .unwrap()
    }

    #[test]
    fn test_colors_are_unique_and_sorted() {
        let records = vec![
            product("Mesas", &["Rojo", "Azul"]),
            product("Sillas", &["Azul", "Blanco"]),
        ];
        let colors = FacetVocabulary::colors(&records);
        assert_eq!(colors.values(), &["Azul", "Blanco", "Rojo"]);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_categories_skip_blank() {
        let records = vec![product("", &[]), product("  ", &[]), product("Mesas", &[])];
        let categories = FacetVocabulary::categories(&records);
        assert_eq!(categories.values(), &["Mesas"]);
    }

    #[test]
    fn test_code_point_ordering() {
        let vocab = FacetVocabulary::from_values(["Iluminación", "Baño", "accesorios"]);
        assert_eq!(vocab.values(), &["Baño", "Iluminación", "accesorios"]);
    }

    #[test]
    fn test_empty_records() {
        assert!(FacetVocabulary::colors(&[]).is_empty());
        assert_eq!(FacetVocabulary::categories(&[]).len(), 0);
    }
}
