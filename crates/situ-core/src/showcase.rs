// crates/situ-core/src/showcase.rs
// View models for the home page: catalog teaser items and project cards

use situ_types::{CarouselItem, ColorOption, ProductRecord, ProjectRecord};

use crate::config::SiteConfig;

/// Teaser image for products without photos (relative to the prefix)
pub const TEASER_FALLBACK_IMAGE: &str = "default-image.png";
/// Card image for projects without `imagen`
pub const PROJECT_FALLBACK_IMAGE: &str = "default-project-image.png";
/// Background used when a carousel item has no image at all
pub const CAROUSEL_PLACEHOLDER_IMAGE: &str = "/data/products/img/placeholder.png";
/// Shown on a product card in place of the variant chips
pub const NO_COLOR_VARIANTS: &str = "No hay variaciones de color.";

/// Stable key for the `idx`-th carousel item
pub fn carousel_key(name: &str, idx: usize, image_src: &str) -> String {
    if name.is_empty() {
        format!("item-{}-{}", idx, image_src)
    } else {
        format!("{}-{}", name, idx)
    }
}

/// Map loaded products onto carousel items, one per product
///
/// Photos are already normalized by the loader; only the fallback is
/// resolved here.
pub fn teaser_items(products: &[ProductRecord], config: &SiteConfig) -> Vec<CarouselItem> {
    products
        .iter()
        .enumerate()
        .map(|(idx, product)| {
            let image_src = match product.cover_photo() {
                Some(photo) => photo.to_string(),
                None => config.asset(TEASER_FALLBACK_IMAGE),
            };
            CarouselItem {
                key: carousel_key(&product.name, idx, &image_src),
                dom_id: None,
                name: product.name.clone(),
                title: String::new(),
                image_src,
            }
        })
        .collect()
}

/// Background image for a carousel item, falling back to the placeholder
pub fn carousel_background(item: &CarouselItem) -> &str {
    if item.image_src.is_empty() {
        CAROUSEL_PLACEHOLDER_IMAGE
    } else {
        &item.image_src
    }
}

/// Chip text for one color variant, e.g. `"Roble: $120.50"`
pub fn color_variant_label(option: &ColorOption) -> String {
    format!("{}: ${:.2}", option.color, option.price)
}

/// Everything a project card and its expanded overlay display
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub key: String,
    pub title: String,
    pub image_src: String,
    pub location: String,
    pub year: String,
    pub description: String,
}

/// Build project cards in feed order
pub fn project_cards(projects: &[ProjectRecord], config: &SiteConfig) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let image_src = project
                .image
                .clone()
                .unwrap_or_else(|| config.asset(PROJECT_FALLBACK_IMAGE));
            let key = match &project.id {
                Some(id) => format!("project-{}", id),
                None => format!("project-idx-{}", idx),
            };
            ProjectCard {
                key,
                title: project.name.clone(),
                image_src,
                location: project.location.clone(),
                year: project.year.clone(),
                description: project.description.clone(),
            }
        })
        .collect()
}
