// crates/situ-app/src/components/project_carousel.rs
// Horizontally scrolling project cards with an expandable overlay

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use situ_core::scroller::SCROLL_STEP_PX;
use situ_core::{ExpandedCard, ScrollAvailability, ScrollMetrics};
use situ_core::showcase::ProjectCard;
use std::sync::Arc;

#[component]
pub fn ProjectCarousel(cards: Vec<ProjectCard>) -> impl IntoView {
    let cards = Arc::new(cards);
    let row_ref = NodeRef::<html::Div>::new();
    let availability = RwSignal::new(ScrollAvailability::default());
    let expanded = RwSignal::new(ExpandedCard::default());

    // Re-read the row geometry after every scroll
    let check_scrollability = move || {
        if let Some(row) = row_ref.get_untracked() {
            let metrics = ScrollMetrics {
                scroll_left: row.scroll_left() as f64,
                scroll_width: row.scroll_width() as f64,
                client_width: row.client_width() as f64,
            };
            availability.set(metrics.availability());
        }
    };

    Effect::new(move |_| {
        if row_ref.get().is_some() {
            check_scrollability();
        }
    });

    let scroll_by = move |dx: f64| {
        if let Some(row) = row_ref.get_untracked() {
            row.scroll_by_with_x_and_y(dx, 0.0);
        }
    };

    let open = move |index: usize| {
        expanded.update(|e| e.open(index));
        set_body_scroll_lock(expanded.with_untracked(ExpandedCard::locks_body));
    };

    let close = move || {
        let viewport = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(1024.0);
        let Some(target) = expanded.try_update(|e| e.close(viewport)).flatten() else {
            return;
        };
        set_body_scroll_lock(false);
        if let Some(row) = row_ref.get_untracked() {
            row.scroll_to_with_x_and_y(target, 0.0);
        }
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || {
        escape.remove();
        set_body_scroll_lock(false);
    });

    let card_list = cards.clone();
    let overlay_cards = cards.clone();

    view! {
        <div class="relative w-full">
            <div
                node_ref=row_ref
                class="flex w-full overflow-x-scroll overscroll-x-auto scroll-smooth py-10"
                style="scrollbar-width: none"
                on:scroll=move |_| check_scrollability()
            >
                <div class="flex flex-row justify-start gap-4 pl-4 max-w-7xl mx-auto">
                    {card_list
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            let background = format!("background-image: url({})", card.image_src);
                            view! {
                                <button
                                    class="project-card relative shrink-0 w-[230px] md:w-[384px] h-80 md:h-[40rem] rounded-3xl overflow-hidden bg-cover bg-center text-left"
                                    style=background
                                    on:click=move |_| open(index)
                                >
                                    <div class="absolute inset-0 bg-gradient-to-b from-black/50 via-transparent to-transparent"></div>
                                    <div class="relative z-10 p-8">
                                        <p class="text-white text-sm md:text-base font-medium">{card.location.clone()}</p>
                                        <p class="text-white text-xl md:text-3xl font-semibold mt-2">{card.title.clone()}</p>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="flex justify-end gap-2 mr-10">
                <button
                    class="carousel-btn"
                    aria-label="Anterior"
                    disabled=move || !availability.get().can_scroll_left
                    on:click=move |_| scroll_by(-SCROLL_STEP_PX)
                >"‹"</button>
                <button
                    class="carousel-btn"
                    aria-label="Siguiente"
                    disabled=move || !availability.get().can_scroll_right
                    on:click=move |_| scroll_by(SCROLL_STEP_PX)
                >"›"</button>
            </div>

            {move || {
                let card = expanded
                    .with(ExpandedCard::current)
                    .and_then(|index| overlay_cards.get(index).cloned());
                card.map(|card| {
                    // Clicks on the backdrop close; clicks inside the panel stay put
                    view! {
                        <div
                            class="fixed inset-0 z-50 bg-black/80 backdrop-blur-lg overflow-auto"
                            on:click=move |_| close()
                        >
                            <div
                                class="max-w-5xl mx-auto my-10 p-4 md:p-10 rounded-3xl bg-card relative"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <button
                                    class="sticky top-4 ml-auto flex h-8 w-8 items-center justify-center rounded-full bg-black text-white"
                                    aria-label="Cerrar"
                                    on:click=move |_| close()
                                >"×"</button>
                                <p class="text-base font-medium">{card.location.clone()}</p>
                                <p class="text-2xl md:text-5xl font-semibold mt-4">{card.title.clone()}</p>
                                <img src=card.image_src.clone() alt=card.title.clone() class="w-full rounded-xl my-8 object-cover"/>
                                <p class="text-base md:text-lg mb-6">{card.description.clone()}</p>
                                <div class="border-t border-border pt-4">
                                    <h4 class="font-semibold mb-2">"Detalles del Proyecto:"</h4>
                                    <p class="text-sm text-muted"><strong>"Año: "</strong>{card.year.clone()}</p>
                                    <p class="text-sm text-muted mt-1"><strong>"Ubicación: "</strong>{card.location.clone()}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Keep the page behind an open overlay from scrolling
fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = document().body() {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}
