// crates/situ-app/src/lib.rs
// situ showcase - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use situ_core::LoadState;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
mod config;
mod pages;

pub use api::HttpFeed;
pub use components::*;
pub use config::{route_href, site_config};
pub use pages::*;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("situ showcase starting (base path {:?})", site_config().base_path);

    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Situ - Diseño y arquitectura"/>
        <Router base=site_config().base_path.clone()>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/catalog") view=CatalogPage/>
            </Routes>
        </Router>
    }
}

// ============================================================================
// Feed Loading
// ============================================================================

/// Run `load` once for the current view and expose its outcome
///
/// A result that arrives after the view was torn down is dropped, so a
/// superseded page never applies stale data.
pub fn use_feed<T, F, Fut>(load: F) -> ReadSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = situ_core::Result<T>> + 'static,
{
    let (state, set_state) = signal(LoadState::Loading);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_flag = alive.clone();
    on_cleanup(move || alive_flag.store(false, Ordering::Relaxed));

    Effect::new(move |_| {
        let alive = alive.clone();
        let pending = load();
        spawn_local(async move {
            let result = pending.await;
            if alive.load(Ordering::Relaxed) {
                let _ = set_state.try_set(LoadState::from_result(result));
            } else {
                log::debug!("View gone before feed resolved; result dropped");
            }
        });
    });

    state
}
