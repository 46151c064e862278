// crates/situ-core/src/filter.rs
// Catalog filter/group engine

use situ_types::ProductRecord;
use std::collections::{BTreeSet, HashMap};

use crate::collate::locale_cmp;

// ═══════════════════════════════════════
// FILTER STATE
// ═══════════════════════════════════════

/// Current search text and selected facet values
///
/// Only membership matters for the sets; ordering is incidental.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_colors: BTreeSet<String>,
    pub selected_categories: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_colors.insert(color.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_categories.insert(category.into());
        self
    }

    /// Select the color if absent, deselect it otherwise
    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.selected_colors, color);
    }

    /// Select the category if absent, deselect it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.selected_categories, category);
    }

    pub fn clear_facets(&mut self) {
        self.selected_colors.clear();
        self.selected_categories.clear();
    }

    pub fn has_facets(&self) -> bool {
        !self.selected_colors.is_empty() || !self.selected_categories.is_empty()
    }

    /// All three predicates must hold
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.matches_text(record) && self.matches_color(record) && self.matches_category(record)
    }

    /// Case-insensitive substring over name or description; no accent folding
    pub fn matches_text(&self, record: &ProductRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    }

    pub fn matches_color(&self, record: &ProductRecord) -> bool {
        self.selected_colors.is_empty()
            || record.color_names().any(|c| self.selected_colors.contains(c))
    }

    /// Uncategorized records never satisfy a category selection
    pub fn matches_category(&self, record: &ProductRecord) -> bool {
        self.selected_categories.is_empty()
            || (!record.category.is_empty() && self.selected_categories.contains(&record.category))
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

// ═══════════════════════════════════════
// GROUPED RESULT
// ═══════════════════════════════════════

/// Records sharing one effective category
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub category: String,
    pub records: Vec<ProductRecord>,
}

/// Filtered records partitioned by category, buckets sorted by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResult {
    buckets: Vec<Bucket>,
}

impl GroupedResult {
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn bucket(&self, category: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.category.as_str())
    }

    /// Number of records across all buckets
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Records in display order (bucket by bucket)
    pub fn flatten(&self) -> impl Iterator<Item = &ProductRecord> {
        self.buckets.iter().flat_map(|b| b.records.iter())
    }
}

impl IntoIterator for GroupedResult {
    type Item = Bucket;
    type IntoIter = std::vec::IntoIter<Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

// ═══════════════════════════════════════
// ENGINE
// ═══════════════════════════════════════

/// Records passing `filter`, in input order
pub fn filter_records<'a>(records: &'a [ProductRecord], filter: &FilterState) -> Vec<&'a ProductRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Filter `records` and group the survivors by effective category
///
/// Bucket contents keep first-seen order; buckets are ordered with
/// [`locale_cmp`]. Empty buckets are never produced. Recomputed from
/// scratch on every call.
pub fn filter_and_group(records: &[ProductRecord], filter: &FilterState) -> GroupedResult {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in filter_records(records, filter) {
        let category = record.effective_category();
        let slot = *index.entry(category).or_insert_with(|| {
            buckets.push(Bucket {
                category: category.to_string(),
                records: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].records.push(record.clone());
    }

    buckets.sort_by(|a, b| locale_cmp(&a.category, &b.category));
    GroupedResult { buckets }
}

/// Result count line shown above the grid
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 producto encontrado".to_string()
    } else {
        format!("{} productos encontrados", count)
    }
}
