// crates/situ-app/src/pages/catalog.rs
// Catalog page: search, facet chips and category-grouped product grid

use leptos::prelude::*;
use situ_core::{
    Catalog, FilterState, GroupedResult, LoadState, filter_and_group, load_catalog, results_label,
};

use crate::api::HttpFeed;
use crate::components::{ErrorPanel, LoadingSpinner, ProductCard};
use crate::config::site_config;
use crate::{Layout, use_feed};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = site_config();
    let catalog = use_feed(move || async move { load_catalog(&HttpFeed, config).await });

    let filter = RwSignal::new(FilterState::new());
    let (filters_open, set_filters_open) = signal(false);

    // Recomputed from scratch whenever records or filter state change
    let grouped = Memo::new(move |_| {
        catalog.with(|state| filter.with(|f| filter_and_group(state.records(), f)))
    });

    let colors = Memo::new(move |_| vocabulary(&catalog, |c| c.colors.values().to_vec()));
    let categories = Memo::new(move |_| vocabulary(&catalog, |c| c.categories.values().to_vec()));

    view! {
        <Layout>
            <section class="py-8 max-w-6xl mx-auto">
                <div class="mb-6">
                    <label for="search" class="block font-medium mb-2">"Buscar productos"</label>
                    <input
                        type="text"
                        id="search"
                        placeholder="Nombre o descripción..."
                        class="w-full px-4 py-2.5 rounded-md border border-border bg-card"
                        prop:value=move || filter.with(|f| f.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            filter.update(|f| f.search_term = term);
                        }
                    />
                </div>

                <div class="mb-4 flex gap-2">
                    <button
                        class="btn-primary"
                        aria-expanded=move || filters_open.get().to_string()
                        aria-controls="collapsible-filter-panel"
                        on:click=move |_| set_filters_open.update(|open| *open = !*open)
                    >
                        {move || if filters_open.get() { "Ocultar Filtros Avanzados" } else { "Mostrar Filtros Avanzados" }}
                    </button>
                    <Show when=move || filter.with(FilterState::has_facets)>
                        <button
                            class="text-sm text-muted hover:text-accent"
                            on:click=move |_| filter.update(FilterState::clear_facets)
                        >"Limpiar filtros"</button>
                    </Show>
                </div>

                <div
                    id="collapsible-filter-panel"
                    class=move || if filters_open.get() { "block p-6 rounded-lg bg-card border border-border" } else { "hidden" }
                >
                    <div class="flex flex-col md:flex-row gap-6 md:gap-8">
                        <FacetChips
                            title="Filtrar por color"
                            values=colors
                            is_selected=move |value: &str| filter.with(|f| f.selected_colors.contains(value))
                            on_toggle=move |value: String| filter.update(|f| f.toggle_color(&value))
                        />
                        <FacetChips
                            title="Filtrar por categoría"
                            values=categories
                            is_selected=move |value: &str| filter.with(|f| f.selected_categories.contains(value))
                            on_toggle=move |value: String| filter.update(|f| f.toggle_category(&value))
                        />
                    </div>
                </div>
            </section>

            <section class="py-12 max-w-6xl mx-auto">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Nuestro Catálogo"</h1>
                    <Show when=move || catalog.with(|s| s.loaded().is_some())>
                        <p class="text-muted">{move || results_label(grouped.with(GroupedResult::total))}</p>
                    </Show>
                </div>

                {move || {
                    if catalog.with(LoadState::is_loading) {
                        return view! { <LoadingSpinner label="Cargando productos..."/> }.into_any();
                    }
                    if let Some(message) = catalog.with(|s| s.error().map(str::to_string)) {
                        return view! { <ErrorPanel message subject="los productos"/> }.into_any();
                    }
                    let result = grouped.get();
                    if result.is_empty() {
                        return view! {
                            <p class="text-center text-muted py-10">
                                "No se encontraron productos que coincidan con tu búsqueda."
                            </p>
                        }.into_any();
                    }
                    result
                        .into_iter()
                        .map(|bucket| view! {
                            <div class="mb-12">
                                <h2 class="text-2xl font-semibold mb-6 border-b-2 border-accent pb-2">
                                    {bucket.category.clone()}
                                </h2>
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                    {bucket
                                        .records
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product/> })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>
        </Layout>
    }
}

fn vocabulary(catalog: &ReadSignal<LoadState<Catalog>>, pick: impl Fn(&Catalog) -> Vec<String>) -> Vec<String> {
    catalog.with(|state| state.loaded().map(&pick).unwrap_or_default())
}

/// One row of toggleable facet chips
#[component]
fn FacetChips<S, T>(
    title: &'static str,
    values: Memo<Vec<String>>,
    is_selected: S,
    on_toggle: T,
) -> impl IntoView
where
    S: Fn(&str) -> bool + Copy + Send + Sync + 'static,
    T: Fn(String) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="flex-grow md:w-1/2 lg:w-auto">
            <h3 class="font-medium mb-3">{title}</h3>
            <div class="flex flex-wrap gap-2">
                <For
                    each=move || values.get()
                    key=|value| value.clone()
                    children=move |value| {
                        let chip = value.clone();
                        let label = value.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_selected(&chip) {
                                        "chip chip-selected px-3 py-1.5 rounded-full text-sm font-medium"
                                    } else {
                                        "chip px-3 py-1.5 rounded-full text-sm font-medium"
                                    }
                                }
                                on:click=move |_| on_toggle(value.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
