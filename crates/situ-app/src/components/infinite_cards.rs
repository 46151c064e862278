// crates/situ-app/src/components/infinite_cards.rs
// Seamless infinite card row, driven by the core carousel state machine

use leptos::html;
use leptos::prelude::*;
use situ_core::showcase::carousel_background;
use situ_core::{
    CarouselOptions, InfiniteCarousel, RowSignature, SequenceEntry, SlotBox, Track, content_extent,
};
use situ_types::CarouselItem;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

type FrameCallback = Closure<dyn FnMut(f64)>;

// ============================================================================
// DOM Track
// ============================================================================

/// The `<ul>` the carousel renders into
///
/// Nodes are rendered from a signal, so they appear on Leptos' next patch;
/// until the rendered row carries the mounted signature it reports no width.
struct DomTrack {
    list: NodeRef<html::Ul>,
    set_rendered: WriteSignal<Vec<SequenceEntry<CarouselItem>>>,
    expected: RowSignature,
}

impl DomTrack {
    fn rendered_signature(list: &web_sys::HtmlUListElement) -> RowSignature {
        let key = |el: Option<web_sys::Element>| el.and_then(|el| el.get_attribute("data-key"));
        RowSignature {
            len: list.child_element_count() as usize,
            first: key(list.first_element_child()),
            last: key(list.last_element_child()),
        }
    }

    fn slot_boxes(list: &web_sys::HtmlUListElement) -> Vec<SlotBox> {
        let window = web_sys::window();
        let mut slots = Vec::new();
        let mut next = list.first_element_child();
        while let Some(el) = next {
            next = el.next_element_sibling();
            let margin_right = window
                .as_ref()
                .and_then(|w| w.get_computed_style(&el).ok().flatten())
                .and_then(|style| style.get_property_value("margin-right").ok())
                .and_then(|value| value.trim_end_matches("px").trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            if let Ok(slot) = el.dyn_into::<web_sys::HtmlElement>() {
                slots.push(SlotBox {
                    left: slot.offset_left() as f64,
                    width: slot.offset_width() as f64,
                    margin_right,
                });
            }
        }
        slots
    }
}

impl Track<CarouselItem> for DomTrack {
    fn remove_clones(&mut self) {
        let _ = self
            .set_rendered
            .try_update(|rendered| rendered.retain(|entry| !entry.cloned));
    }

    fn mount(&mut self, sequence: &[SequenceEntry<CarouselItem>]) {
        self.expected = RowSignature::of(sequence);
        let _ = self.set_rendered.try_set(sequence.to_vec());
    }

    fn measure(&self) -> f64 {
        let Some(list) = self.list.get_untracked() else {
            return 0.0;
        };
        if Self::rendered_signature(&list) != self.expected {
            return 0.0;
        }
        content_extent(&Self::slot_boxes(&list))
    }

    fn set_offset(&mut self, offset: f64) {
        if let Some(list) = self.list.get_untracked() {
            let _ = web_sys::HtmlElement::style(&list)
                .set_property("transform", &format!("translate3d({}px, 0, 0)", offset));
        }
    }
}

struct Engine {
    carousel: InfiniteCarousel<CarouselItem>,
    track: DomTrack,
}

// ============================================================================
// Component
// ============================================================================

#[component]
pub fn InfiniteMovingCards(
    #[prop(into)] items: Signal<Vec<CarouselItem>>,
    #[prop(into)] options: Signal<CarouselOptions>,
) -> impl IntoView {
    let (rendered, set_rendered) = signal(Vec::<SequenceEntry<CarouselItem>>::new());
    let list_ref = NodeRef::<html::Ul>::new();
    let hovered = RwSignal::new(false);

    let engine = Rc::new(RefCell::new(Engine {
        carousel: InfiniteCarousel::new(options.get_untracked()),
        track: DomTrack {
            list: list_ref,
            set_rendered,
            expected: RowSignature::default(),
        },
    }));

    // Any item-list change is a full rebuild
    let state = engine.clone();
    Effect::new(move |_| {
        let list = items.get();
        let mut guard = state.borrow_mut();
        let Engine { carousel, track } = &mut *guard;
        carousel.set_items(&list, track);
    });

    // Direction/speed changes restart the loop
    let state = engine.clone();
    Effect::new(move |prev: Option<CarouselOptions>| {
        let current = options.get();
        if prev.is_some_and(|p| p != current) {
            let mut guard = state.borrow_mut();
            let Engine { carousel, track } = &mut *guard;
            carousel.set_options(current, track);
        }
        current
    });

    let state = engine.clone();
    Effect::new(move |_| {
        let over = hovered.get();
        let mut guard = state.borrow_mut();
        if over {
            guard.carousel.pointer_enter();
        } else {
            guard.carousel.pointer_leave();
        }
    });

    let alive = Arc::new(AtomicBool::new(true));
    let alive_flag = alive.clone();
    on_cleanup(move || alive_flag.store(false, Ordering::Relaxed));
    start_frame_loop(engine, alive);

    view! {
        <div
            class="scroller relative z-20 max-w-7xl mx-auto overflow-hidden"
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <ul
                node_ref=list_ref
                class="flex w-max shrink-0 flex-nowrap py-4"
                style="will-change: transform"
            >
                <For
                    each=move || rendered.get()
                    key=|entry| entry.item.key.clone()
                    children=move |entry| {
                        let background = format!(
                            "background-image: url({})",
                            carousel_background(&entry.item)
                        );
                        let title = entry.item.title.clone();
                        view! {
                            <li
                                id=entry.item.dom_id.clone()
                                data-key=entry.item.key.clone()
                                data-cloned=entry.cloned.then_some("true")
                                aria-hidden=entry.cloned.then_some("true")
                                class="relative mr-4 w-[280px] h-[200px] shrink-0 rounded-2xl bg-cover bg-center border border-border"
                                style=background
                            >
                                <div class="absolute inset-x-0 bottom-0 p-4 rounded-b-2xl bg-black/50 text-white">
                                    <span class="block font-semibold">{entry.item.name.clone()}</span>
                                    {(!title.is_empty()).then(|| view! {
                                        <span class="block text-sm text-muted">{title}</span>
                                    })}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

// ============================================================================
// Frame Loop
// ============================================================================

/// Drive the carousel once per animation frame until the view is torn down
fn start_frame_loop(engine: Rc<RefCell<Engine>>, alive: Arc<AtomicBool>) {
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let scheduled = frame.clone();
    let mut last_frame: Option<f64> = None;

    *scheduled.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !alive.load(Ordering::Relaxed) {
            let mut guard = engine.borrow_mut();
            let Engine { carousel, track } = &mut *guard;
            carousel.teardown(track);
            log::debug!("Carousel frame loop stopped");

            // Drop the callback after this frame returns
            let frame = frame.clone();
            spawn_local(async move {
                frame.borrow_mut().take();
            });
            return;
        }

        let dt_secs = last_frame.map(|prev| (now - prev) / 1000.0).unwrap_or(0.0);
        last_frame = Some(now);
        {
            let mut guard = engine.borrow_mut();
            let Engine { carousel, track } = &mut *guard;
            carousel.advance(dt_secs, track);
        }

        if let Some(callback) = frame.borrow().as_ref() {
            request_frame(callback);
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = scheduled.borrow().as_ref() {
        request_frame(callback);
    }
}

fn request_frame(callback: &FrameCallback) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
