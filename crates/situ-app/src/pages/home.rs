// crates/situ-app/src/pages/home.rs
// Home page: hero, catalog teaser carousel and projects scroller

use leptos::prelude::*;
use situ_core::showcase::{project_cards, teaser_items};
use situ_core::{CarouselOptions, Direction, LoadState, Speed, load_catalog, load_projects};

use crate::api::HttpFeed;
use crate::components::{ErrorPanel, InfiniteMovingCards, LoadingSpinner, ProjectCarousel};
use crate::config::{route_href, site_config};
use crate::{Layout, use_feed};

const TEASER_OPTIONS: CarouselOptions = CarouselOptions {
    direction: Direction::Right,
    speed: Speed::Normal,
    pause_on_hover: true,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = site_config();

    let catalog = use_feed(move || async move { load_catalog(&HttpFeed, config).await });
    let projects = use_feed(move || async move {
        load_projects(&HttpFeed, config)
            .await
            .map(|projects| project_cards(&projects, config))
    });

    let teaser = Memo::new(move |_| {
        catalog.with(|state| {
            state
                .loaded()
                .map(|c| teaser_items(&c.records, config))
                .unwrap_or_default()
        })
    });

    view! {
        <Layout>
            <section class="hero max-w-6xl mx-auto py-16">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">"Diseño Orgánico y Minimalista"</h1>
                <p class="text-lg md:text-xl mb-8 max-w-lg text-muted">
                    "Productos artesanales con materiales sostenibles, diseñados para integrarse perfectamente en tu espacio."
                </p>
                <a href=route_href("catalog") class="btn-primary">"Ver Catálogo"</a>
            </section>

            <section class="py-16" id="catalogo">
                <SectionHeading
                    title="Nuestro Catálogo"
                    subtitle="Descubre nuestra colección de productos artesanales, diseñados con materiales sostenibles y un enfoque minimalista."
                />
                {move || match catalog.with(catalog_view) {
                    CatalogView::Loading => view! { <LoadingSpinner label="Cargando productos..."/> }.into_any(),
                    CatalogView::Failed(message) => view! { <ErrorPanel message subject="los productos"/> }.into_any(),
                    CatalogView::Empty => view! {
                        <p class="text-center text-muted py-10">"No hay productos para mostrar en este momento."</p>
                    }.into_any(),
                    CatalogView::Ready => view! {
                        <InfiniteMovingCards items=teaser options=TEASER_OPTIONS/>
                        <div class="mt-12 text-center">
                            <a href=route_href("catalog") class="btn-primary">"Ver Catálogo Completo"</a>
                        </div>
                    }.into_any(),
                }}
            </section>

            <section class="py-16" id="proyectos">
                <SectionHeading
                    title="Proyectos Arquitectónicos"
                    subtitle="Descubre nuestros proyectos destacados"
                />
                {move || match projects.get() {
                    LoadState::Loading => view! { <LoadingSpinner label="Cargando proyectos..."/> }.into_any(),
                    LoadState::Failed(message) => view! { <ErrorPanel message subject="los proyectos"/> }.into_any(),
                    LoadState::Loaded(cards) if cards.is_empty() => view! {
                        <p class="text-center text-muted py-10">"No hay proyectos para mostrar en este momento."</p>
                    }.into_any(),
                    LoadState::Loaded(cards) => view! { <ProjectCarousel cards/> }.into_any(),
                }}
            </section>
        </Layout>
    }
}

/// What the teaser section shows; keeps the carousel mounted across re-reads
enum CatalogView {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

fn catalog_view(state: &LoadState<situ_core::Catalog>) -> CatalogView {
    match state {
        LoadState::Loading => CatalogView::Loading,
        LoadState::Failed(message) => CatalogView::Failed(message.clone()),
        LoadState::Loaded(catalog) if catalog.is_empty() => CatalogView::Empty,
        LoadState::Loaded(_) => CatalogView::Ready,
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-5 text-accent">{title}</h2>
            <p class="text-lg md:text-xl text-muted max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
