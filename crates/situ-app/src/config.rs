// crates/situ-app/src/config.rs
// Site configuration baked in at build time

use situ_core::SiteConfig;
use std::sync::OnceLock;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Session-wide configuration, resolved on first use
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| SiteConfig::from_lookup(build_env))
}

/// The browser has no process environment; values come from the build
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SITU_BASE_PATH" => option_env!("SITU_BASE_PATH"),
        "SITU_PRODUCTS_FEED" => option_env!("SITU_PRODUCTS_FEED"),
        "SITU_PROJECTS_FEED" => option_env!("SITU_PROJECTS_FEED"),
        "SITU_CYCLE_INTERVAL_MS" => option_env!("SITU_CYCLE_INTERVAL_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// In-app link target for `route` ("" for the home page)
pub fn route_href(route: &str) -> String {
    site_config().asset(route)
}
