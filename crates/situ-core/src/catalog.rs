// crates/situ-core/src/catalog.rs
// Catalog and projects loaders plus the load-state wrapper the UI renders

use log::{error, info};
use situ_types::{ProductRecord, ProjectRecord};

use crate::assets::{normalize, normalize_opt};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::facets::FacetVocabulary;
use crate::feed::{FeedKind, FeedSource, fetch_array};

/// Loaded product records with their facet vocabularies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub records: Vec<ProductRecord>,
    pub colors: FacetVocabulary,
    pub categories: FacetVocabulary,
}

impl Catalog {
    /// Build vocabularies from already-normalized records
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let colors = FacetVocabulary::colors(&records);
        let categories = FacetVocabulary::categories(&records);
        Self {
            records,
            colors,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch the products feed, normalize photo paths and derive vocabularies
pub async fn load_catalog<S>(source: &S, config: &SiteConfig) -> Result<Catalog>
where
    S: FeedSource + ?Sized,
{
    let url = config.products_url();
    let mut records: Vec<ProductRecord> = fetch_array(source, &url, FeedKind::Products)
        .await
        .inspect_err(|e| error!("Failed to load catalog from {}: {}", url, e))?;

    for record in &mut records {
        for photo in &mut record.photos {
            *photo = normalize(&config.base_path, photo);
        }
    }

    let catalog = Catalog::from_records(records);
    info!(
        "Loaded {} products ({} colors, {} categories)",
        catalog.len(),
        catalog.colors.len(),
        catalog.categories.len()
    );
    Ok(catalog)
}

/// Fetch the projects feed and normalize each project's image path
pub async fn load_projects<S>(source: &S, config: &SiteConfig) -> Result<Vec<ProjectRecord>>
where
    S: FeedSource + ?Sized,
{
    let url = config.projects_url();
    let mut projects: Vec<ProjectRecord> = fetch_array(source, &url, FeedKind::Projects)
        .await
        .inspect_err(|e| error!("Failed to load projects from {}: {}", url, e))?;

    for project in &mut projects {
        project.image = normalize_opt(&config.base_path, project.image.as_deref());
    }

    info!("Loaded {} projects", projects.len());
    Ok(projects)
}

// ═══════════════════════════════════════
// LOAD STATE
// ═══════════════════════════════════════

/// What a feed-backed view renders: spinner, content or error panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_user_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl LoadState<Catalog> {
    /// Records to filter; empty unless loaded, never stale
    pub fn records(&self) -> &[ProductRecord] {
        self.loaded().map(|c| c.records.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SituError;
    use crate::feed::{FeedResponse, StaticFeed};

    const PRODUCTS: &str = r#"[
        {"id": 1, "nombre": "Silla", "categoria": "Sillas",
         "colores": [{"color": "Rojo", "precio": 100}, {"color": "Azul", "precio": 110}],
         "fotos": ["img/silla-1.jpg", "/img/silla-2.jpg"]},
        {"id": 2, "nombre": "Mesa", "categoria": "",
         "colores": [{"color": "Natural", "precio": 300}],
         "fotos": []}
    ]"#;

    fn config(base: &str) -> SiteConfig {
        SiteConfig {
            base_path: base.to_string(),
            ..SiteConfig::default()
        }
    }

    // ============================================================================
    // Loader tests
    // ============================================================================

    #[tokio::test]
    async fn test_load_catalog_normalizes_and_indexes() {
        let config = config("/shop");
        let feed = StaticFeed::new().with_json(config.products_url(), PRODUCTS);
        let catalog = load_catalog(&feed, &config).await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.records[0].photos,
            vec!["/shop/img/silla-1.jpg", "/shop/img/silla-2.jpg"]
        );
        assert_eq!(catalog.colors.values(), &["Azul", "Natural", "Rojo"]);
        assert_eq!(catalog.categories.values(), &["Sillas"]);
    }

    #[tokio::test]
    async fn test_load_catalog_network_error() {
        let config = config("");
        let feed = StaticFeed::new().with(
            config.products_url(),
            FeedResponse {
                status: 500,
                body: String::new(),
            },
        );
        let err = load_catalog(&feed, &config).await.unwrap_err();
        assert!(matches!(err, SituError::Network(500)));
        assert_eq!(err.to_user_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_load_catalog_object_payload_is_shape_error() {
        let config = config("");
        let feed = StaticFeed::new().with_json(config.products_url(), "{}");
        let state = LoadState::from_result(load_catalog(&feed, &config).await);
        assert_eq!(state.error(), Some("Product data is not in the expected format."));
        assert!(state.records().is_empty());
    }

    #[tokio::test]
    async fn test_load_projects_normalizes_image() {
        let config = config("/base");
        let body = r#"[
            {"nombre": "Casa Patio", "ubicacion": "Sevilla", "año": 2021, "imagen": "/img/patio.jpg"},
            {"nombre": "Loft", "imagen": ""}
        ]"#;
        let feed = StaticFeed::new().with_json(config.projects_url(), body);
        let projects = load_projects(&feed, &config).await.unwrap();

        assert_eq!(projects[0].image.as_deref(), Some("/base/img/patio.jpg"));
        assert_eq!(projects[0].year, "2021");
        assert_eq!(projects[1].image, None);
    }

    #[tokio::test]
    async fn test_load_projects_missing_feed() {
        let config = config("");
        let err = load_projects(&StaticFeed::new(), &config).await.unwrap_err();
        assert!(matches!(err, SituError::Network(404)));
    }

    // ============================================================================
    // LoadState tests
    // ============================================================================

    #[test]
    fn test_load_state_default_is_loading() {
        let state: LoadState<Catalog> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_load_state_loaded_exposes_records() {
        let record: ProductRecord = serde_json::from_str(r#"{"nombre": "Banco"}"#).unwrap();
        let state = LoadState::from_result(Ok(Catalog::from_records(vec![record])));
        assert_eq!(state.records().len(), 1);
        assert!(!state.is_loading());
    }
}
