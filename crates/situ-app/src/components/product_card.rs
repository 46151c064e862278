// crates/situ-app/src/components/product_card.rs
// Product card with hover image cycling

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use situ_core::ImageCycler;
use situ_core::showcase::{NO_COLOR_VARIANTS, color_variant_label};
use situ_types::ProductRecord;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen_futures::spawn_local;

use crate::config::site_config;

/// Timer granularity for auto-advance
const TICK_MS: u32 = 100;

#[component]
pub fn ProductCard(product: ProductRecord) -> impl IntoView {
    let photos = product.photos.clone();
    let photo_count = photos.len();
    let cycler = RwSignal::new(ImageCycler::new(photo_count, site_config().cycle_interval_ms));
    // Bumped on every hover change so only the latest timer keeps running
    let hover_epoch = RwSignal::new(0u64);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_flag = alive.clone();
    on_cleanup(move || alive_flag.store(false, Ordering::Relaxed));

    let on_enter = move |_: web_sys::MouseEvent| {
        cycler.update(|c| c.pointer_enter());
        hover_epoch.update(|e| *e += 1);
        if !cycler.with_untracked(ImageCycler::is_cycling) {
            return;
        }
        let epoch = hover_epoch.get_untracked();
        let alive = alive.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(TICK_MS).await;
                if !alive.load(Ordering::Relaxed) || hover_epoch.try_get_untracked() != Some(epoch) {
                    break;
                }
                if cycler.try_update(|c| c.tick(TICK_MS)).is_none() {
                    break;
                }
            }
        });
    };

    let on_leave = move |_: web_sys::MouseEvent| {
        cycler.update(|c| c.pointer_leave());
        hover_epoch.update(|e| *e += 1);
    };

    let current_photo = {
        let photos = photos.clone();
        move || photos.get(cycler.with(ImageCycler::index)).cloned().unwrap_or_default()
    };

    let variants: Vec<String> = product.colors.iter().map(color_variant_label).collect();

    view! {
        <article class="product-card rounded-lg border border-border bg-card overflow-hidden">
            <div
                class="relative aspect-square bg-muted"
                on:mouseenter=on_enter
                on:mouseleave=on_leave
            >
                {(photo_count > 0).then(|| view! {
                    <img
                        src=current_photo
                        alt=product.name.clone()
                        class="w-full h-full object-cover transition-opacity"
                    />
                })}
                {(photo_count > 1).then(|| view! {
                    <button
                        class="absolute left-2 top-1/2 -translate-y-1/2 carousel-btn"
                        aria-label="Imagen anterior"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cycler.update(|c| c.previous());
                        }
                    >"‹"</button>
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 carousel-btn"
                        aria-label="Imagen siguiente"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cycler.update(|c| c.next());
                        }
                    >"›"</button>
                    <div class="absolute bottom-2 inset-x-0 flex justify-center gap-1">
                        {(0..photo_count)
                            .map(|idx| view! {
                                <button
                                    class=move || {
                                        if cycler.with(ImageCycler::index) == idx {
                                            "w-2 h-2 rounded-full bg-white"
                                        } else {
                                            "w-2 h-2 rounded-full bg-white/50"
                                        }
                                    }
                                    aria-label=format!("Ver imagen {}", idx + 1)
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        cycler.update(|c| c.select(idx));
                                    }
                                ></button>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
            <div class="p-4">
                <h3 class="font-semibold mb-1">{product.name.clone()}</h3>
                <p class="text-sm text-muted mb-2">{product.description.clone()}</p>
                <div class="pt-3 border-t border-border">
                    <p class="text-xs text-muted mb-1.5">"Colores disponibles:"</p>
                    {if variants.is_empty() {
                        view! { <p class="text-xs text-muted">{NO_COLOR_VARIANTS}</p> }.into_any()
                    } else {
                        view! {
                            <div class="flex flex-wrap gap-x-2 gap-y-1.5">
                                {variants
                                    .into_iter()
                                    .map(|label| view! { <span class="chip text-xs font-medium">{label}</span> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </article>
    }
}
