// crates/situ-core/src/lib.rs
// Platform-independent logic for the situ showcase (native + WASM)

pub mod assets;
pub mod carousel;
pub mod catalog;
pub mod collate;
pub mod config;
pub mod cycler;
pub mod error;
pub mod facets;
pub mod feed;
pub mod filter;
pub mod scroller;
pub mod showcase;

pub use carousel::{
    CarouselOptions, CarouselPhase, Direction, InfiniteCarousel, LoopAnimation, LoopContent,
    LoopGeometry, RowSignature, SequenceEntry, SlotBox, Speed, Track, content_extent,
};
pub use catalog::{Catalog, LoadState, load_catalog, load_projects};
pub use config::SiteConfig;
pub use cycler::ImageCycler;
pub use error::{Result, SituError};
pub use facets::FacetVocabulary;
pub use feed::{FeedKind, FeedResponse, FeedSource, StaticFeed};
pub use filter::{Bucket, FilterState, GroupedResult, filter_and_group, results_label};
pub use scroller::{ExpandedCard, ScrollAvailability, ScrollMetrics};
