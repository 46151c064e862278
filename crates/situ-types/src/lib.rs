// crates/situ-types/src/lib.rs
// Shared catalog types for situ (native + WASM compatible)
// No native-only dependencies allowed here

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Bucket name for products without a usable category
pub const UNCATEGORIZED: &str = "Otros";

// ═══════════════════════════════════════
// RECORD IDS
// ═══════════════════════════════════════

/// Record identifier as it appears in the feeds (number or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

// ═══════════════════════════════════════
// PRODUCTS
// ═══════════════════════════════════════

/// One color variant of a product and its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub color: String,
    #[serde(rename = "precio", default, deserialize_with = "number_or_zero")]
    pub price: f64,
}

/// Product entry from `products.json`
///
/// Optional or malformed fields decode to neutral values instead of failing:
/// non-string text becomes `""`, a missing `colores`/`fotos` list becomes empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<RecordId>,
    #[serde(rename = "nombre", default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(rename = "descripcion", default, deserialize_with = "text_or_empty")]
    pub description: String,
    #[serde(rename = "categoria", default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(rename = "colores", default, deserialize_with = "list_or_empty")]
    pub colors: Vec<ColorOption>,
    #[serde(rename = "fotos", default, deserialize_with = "paths_or_empty")]
    pub photos: Vec<String>,
}

impl ProductRecord {
    /// Category used for grouping: the record's own, or [`UNCATEGORIZED`] when blank
    pub fn effective_category(&self) -> &str {
        if self.has_category() {
            &self.category
        } else {
            UNCATEGORIZED
        }
    }

    /// True when `categoria` holds something other than whitespace
    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty()
    }

    /// Color names in feed order
    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|c| c.color.as_str())
    }

    /// First photo, used as the cover image
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

// ═══════════════════════════════════════
// PROJECTS
// ═══════════════════════════════════════

/// Architectural project entry from `proyectos.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<RecordId>,
    #[serde(rename = "nombre", default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "display_text")]
    pub location: String,
    #[serde(rename = "año", default, deserialize_with = "display_text")]
    pub year: String,
    #[serde(rename = "descripcion", default, deserialize_with = "text_or_empty")]
    pub description: String,
    /// Single image path; `None` when absent or blank
    #[serde(rename = "imagen", default, deserialize_with = "optional_path")]
    pub image: Option<String>,
}

// ═══════════════════════════════════════
// CAROUSEL
// ═══════════════════════════════════════

/// Visual item for the infinite carousel
///
/// The carousel never interprets these fields; it only duplicates the item
/// and positions the rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarouselItem {
    /// Stable key, unique within one item list
    pub key: String,
    /// DOM id for the original node; clones never carry it
    #[serde(default)]
    pub dom_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub image_src: String,
}

// ═══════════════════════════════════════
// LENIENT DECODING
// ═══════════════════════════════════════

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl Loose {
    /// Strings only; anything else is treated as missing
    fn into_text(self) -> String {
        match self {
            Loose::Text(s) => s,
            _ => String::new(),
        }
    }

    /// Strings and numbers, rendered as text
    fn into_display(self) -> Option<String> {
        match self {
            Loose::Text(s) => Some(s),
            Loose::Int(n) => Some(n.to_string()),
            Loose::Float(f) => Some(f.to_string()),
            Loose::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList<T> {
    List(Vec<T>),
    Other(IgnoredAny),
}

fn text_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Loose::deserialize(d)?.into_text())
}

fn display_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Loose::deserialize(d)?.into_display().unwrap_or_default())
}

fn number_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Int(n) => n as f64,
        Loose::Float(f) => f,
        Loose::Text(s) => s.trim().parse().unwrap_or(0.0),
        Loose::Other(_) => 0.0,
    })
}

fn optional_path<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Loose::deserialize(d)?
        .into_display()
        .filter(|s| !s.is_empty()))
}

fn optional_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RecordId>, D::Error> {
    Ok(match Loose::deserialize(d)? {
        Loose::Int(n) => Some(RecordId::Number(n)),
        Loose::Text(s) => Some(RecordId::Text(s)),
        Loose::Float(f) => Some(RecordId::Text(f.to_string())),
        Loose::Other(_) => None,
    })
}

fn list_or_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match LooseList::<T>::deserialize(d)? {
        LooseList::List(items) => items,
        LooseList::Other(_) => Vec::new(),
    })
}

fn paths_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(list_or_empty::<D, Loose>(d)?
        .into_iter()
        .filter_map(Loose::into_display)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // ProductRecord tests
    // ============================================================================

    #[test]
    fn test_product_deserialize_full() {
        let json = r#"{
            "id": 7,
            "nombre": "Lámpara",
            "descripcion": "Lámpara de pie",
            "categoria": "Iluminación",
            "colores": [{"color": "Blanco", "precio": 10}, {"color": "Negro", "precio": 12.5}],
            "fotos": ["img/a.jpg", "/img/b.jpg"]
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(RecordId::Number(7)));
        assert_eq!(product.name, "Lámpara");
        assert_eq!(product.category, "Iluminación");
        assert_eq!(product.colors.len(), 2);
        assert_eq!(product.colors[1].price, 12.5);
        assert_eq!(product.photos, vec!["img/a.jpg", "/img/b.jpg"]);
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let product: ProductRecord = serde_json::from_str(r#"{"nombre": "Mesa"}"#).unwrap();
        assert_eq!(product.id, None);
        assert!(product.description.is_empty());
        assert!(product.colors.is_empty());
        assert!(product.photos.is_empty());
        assert_eq!(product.effective_category(), UNCATEGORIZED);
    }

    #[test]
    fn test_product_malformed_fields_degrade() {
        let json = r#"{
            "id": "mesa-1",
            "nombre": 42,
            "categoria": {"nested": true},
            "colores": "rojo",
            "fotos": null
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(RecordId::Text("mesa-1".to_string())));
        assert_eq!(product.name, "");
        assert_eq!(product.category, "");
        assert!(product.colors.is_empty());
        assert!(product.photos.is_empty());
    }

    #[test]
    fn test_product_blank_category_is_uncategorized() {
        let product: ProductRecord =
            serde_json::from_str(r#"{"nombre": "Silla", "categoria": "   "}"#).unwrap();
        assert!(!product.has_category());
        assert_eq!(product.effective_category(), "Otros");
    }

    #[test]
    fn test_product_color_names_in_order() {
        let json = r#"{"colores": [{"color": "Rojo"}, {"color": "Azul", "precio": "3"}]}"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.color_names().collect::<Vec<_>>(), vec!["Rojo", "Azul"]);
        assert_eq!(product.colors[0].price, 0.0);
        assert_eq!(product.colors[1].price, 3.0);
    }

    #[test]
    fn test_product_serialize_uses_feed_names() {
        let product: ProductRecord =
            serde_json::from_str(r#"{"nombre": "Banco", "fotos": ["x.jpg"]}"#).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"nombre\":\"Banco\""));
        assert!(json.contains("\"fotos\":[\"x.jpg\"]"));
    }

    // ============================================================================
    // ProjectRecord tests
    // ============================================================================

    #[test]
    fn test_project_deserialize() {
        let json = r#"{
            "id": 1,
            "nombre": "Casa Patio",
            "ubicacion": "Montevideo",
            "año": 2021,
            "descripcion": "Vivienda unifamiliar",
            "imagen": "projects/casa.jpg"
        }"#;
        let project: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(project.year, "2021");
        assert_eq!(project.location, "Montevideo");
        assert_eq!(project.image.as_deref(), Some("projects/casa.jpg"));
    }

    #[test]
    fn test_project_blank_image_is_none() {
        let project: ProjectRecord =
            serde_json::from_str(r#"{"nombre": "Galpón", "imagen": ""}"#).unwrap();
        assert_eq!(project.image, None);
        assert_eq!(project.year, "");
    }

    // ============================================================================
    // RecordId tests
    // ============================================================================

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Number(3).to_string(), "3");
        assert_eq!(RecordId::Text("p-3".to_string()).to_string(), "p-3");
    }
}
