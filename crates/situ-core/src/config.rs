// crates/situ-core/src/config.rs
// Site configuration - deployment prefix, feed paths and timing

use log::{debug, warn};

pub const DEFAULT_PRODUCTS_FEED: &str = "/data/products/products.json";
pub const DEFAULT_PROJECTS_FEED: &str = "/data/projects/proyectos.json";
pub const DEFAULT_CYCLE_INTERVAL_MS: u32 = 2500;

/// Site-wide settings, resolved once per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Deployment prefix prepended to every asset and feed path (SITU_BASE_PATH)
    pub base_path: String,
    /// Products feed path relative to the prefix (SITU_PRODUCTS_FEED)
    pub products_feed: String,
    /// Projects feed path relative to the prefix (SITU_PROJECTS_FEED)
    pub projects_feed: String,
    /// Product card image auto-advance period (SITU_CYCLE_INTERVAL_MS)
    pub cycle_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            products_feed: DEFAULT_PRODUCTS_FEED.to_string(),
            projects_feed: DEFAULT_PROJECTS_FEED.to_string(),
            cycle_interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
        }
    }
}

impl SiteConfig {
    /// Build from an arbitrary key lookup
    ///
    /// Native code passes `std::env::var`; the WASM app passes compile-time
    /// `option_env!` values. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let base_path = read("SITU_BASE_PATH")
            .map(|p| normalize_base_path(&p))
            .unwrap_or(defaults.base_path);

        let products_feed = read("SITU_PRODUCTS_FEED").unwrap_or(defaults.products_feed);
        let projects_feed = read("SITU_PROJECTS_FEED").unwrap_or(defaults.projects_feed);

        let cycle_interval_ms = match read("SITU_CYCLE_INTERVAL_MS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!("Invalid SITU_CYCLE_INTERVAL_MS {:?}, using {}", raw, DEFAULT_CYCLE_INTERVAL_MS);
                    DEFAULT_CYCLE_INTERVAL_MS
                }
            },
            None => DEFAULT_CYCLE_INTERVAL_MS,
        };

        let config = Self {
            base_path,
            products_feed,
            projects_feed,
            cycle_interval_ms,
        };
        debug!("Site config: {:?}", config);
        config
    }

    /// Full URL path of the products feed
    pub fn products_url(&self) -> String {
        crate::assets::normalize(&self.base_path, &self.products_feed)
    }

    /// Full URL path of the projects feed
    pub fn projects_url(&self) -> String {
        crate::assets::normalize(&self.base_path, &self.projects_feed)
    }

    /// Resolve a relative asset path against the deployment prefix
    pub fn asset(&self, path: &str) -> String {
        crate::assets::normalize(&self.base_path, path)
    }
}

/// Trim surrounding whitespace and trailing separators; "/" alone means no prefix
fn normalize_base_path(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
