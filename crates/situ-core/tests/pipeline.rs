// crates/situ-core/tests/pipeline.rs
// Loader -> filter engine -> carousel, through the public API

use situ_core::showcase::teaser_items;
use situ_core::{
    CarouselOptions, CarouselPhase, FilterState, InfiniteCarousel, LoadState, SequenceEntry,
    SiteConfig, StaticFeed, Track, filter_and_group, load_catalog,
};
use situ_types::CarouselItem;

const PRODUCTS: &str = r#"[
    {"id": 1, "nombre": "Lámpara", "descripcion": "Lámpara colgante", "categoria": "Iluminación",
     "colores": [{"color": "Blanco", "precio": 120}], "fotos": ["img/a.jpg"]},
    {"id": 2, "nombre": "Mesa Roble", "descripcion": "Mesa de comedor", "categoria": "Mesas",
     "colores": [{"color": "Natural", "precio": 540}], "fotos": ["/img/mesa.jpg"]},
    {"id": 3, "nombre": "Banco", "descripcion": "Banco de entrada",
     "colores": [{"color": "Natural", "precio": 90}]}
]"#;

/// Row whose width is known as soon as it is mounted
struct FixedTrack {
    rendered: Vec<SequenceEntry<CarouselItem>>,
    offset: f64,
}

impl Track<CarouselItem> for FixedTrack {
    fn remove_clones(&mut self) {
        self.rendered.retain(|e| !e.cloned);
    }

    fn mount(&mut self, sequence: &[SequenceEntry<CarouselItem>]) {
        self.rendered = sequence.to_vec();
    }

    fn measure(&self) -> f64 {
        self.rendered.len() as f64 * 120.0
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}

fn config(base: &str) -> SiteConfig {
    SiteConfig {
        base_path: base.to_string(),
        ..SiteConfig::default()
    }
}

#[tokio::test]
async fn test_prefixed_catalog_filters_and_groups() {
    let config = config("/base");
    let feed = StaticFeed::new().with_json("/base/data/products/products.json", PRODUCTS);
    let state = LoadState::from_result(load_catalog(&feed, &config).await);

    let catalog = state.loaded().expect("catalog should load");
    assert_eq!(catalog.records[0].photos, vec!["/base/img/a.jpg"]);
    assert_eq!(catalog.records[1].photos, vec!["/base/img/mesa.jpg"]);

    let filter = FilterState::new().with_search("lám");
    let result = filter_and_group(state.records(), &filter);
    assert_eq!(result.categories().collect::<Vec<_>>(), vec!["Iluminación"]);
    assert_eq!(result.bucket("Iluminación").map(|b| b.records.len()), Some(1));

    let unaccented = filter_and_group(state.records(), &FilterState::new().with_search("lamp"));
    assert!(unaccented.is_empty());

    let natural = filter_and_group(state.records(), &FilterState::new().with_color("Natural"));
    assert_eq!(natural.categories().collect::<Vec<_>>(), vec!["Mesas", "Otros"]);
}

#[tokio::test]
async fn test_single_prefixed_record_vocabulary() {
    let config = config("/base");
    let feed = StaticFeed::new().with_json(
        "/base/data/products/products.json",
        r#"[{"nombre": "Lámpara", "categoria": "Iluminación",
             "colores": [{"color": "Blanco", "precio": 10}], "fotos": ["img/a.jpg"]}]"#,
    );
    let catalog = load_catalog(&feed, &config).await.unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records[0].photos, vec!["/base/img/a.jpg"]);
    assert_eq!(catalog.categories.values(), &["Iluminación"]);
    assert_eq!(catalog.colors.values(), &["Blanco"]);
}

#[tokio::test]
async fn test_object_payload_yields_failed_state() {
    let config = config("");
    let feed = StaticFeed::new().with_json("/data/products/products.json", "{}");
    let state = LoadState::from_result(load_catalog(&feed, &config).await);

    assert_eq!(state.error(), Some("Product data is not in the expected format."));
    assert!(filter_and_group(state.records(), &FilterState::new()).is_empty());
}

#[tokio::test]
async fn test_catalog_feeds_infinite_carousel() {
    let config = config("/base");
    let feed = StaticFeed::new().with_json(config.products_url(), PRODUCTS);
    let catalog = load_catalog(&feed, &config).await.unwrap();

    let items = teaser_items(&catalog.records, &config);
    assert_eq!(items[2].image_src, "/base/default-image.png");

    let mut track = FixedTrack {
        rendered: Vec::new(),
        offset: f64::NAN,
    };
    let mut carousel = InfiniteCarousel::new(CarouselOptions::default());
    carousel.set_items(&items, &mut track);

    assert_eq!(carousel.phase(), CarouselPhase::Animating);
    assert_eq!(track.rendered.len(), 6);
    assert_eq!(carousel.geometry().map(|g| g.segment_width), Some(360.0));
    assert_eq!(track.offset, 0.0);

    // One full period at the fast tier
    carousel.advance(20.0, &mut track);
    assert!(track.offset.abs() < 1e-9);

    carousel.set_items(&items[..1], &mut track);
    assert_eq!(track.rendered.iter().filter(|e| e.cloned).count(), 1);
}
