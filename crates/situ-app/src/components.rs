// crates/situ-app/src/components.rs
// Shared layout components

use leptos::prelude::*;

use crate::config::route_href;

pub mod infinite_cards;
pub mod product_card;
pub mod project_carousel;

pub use infinite_cards::InfiniteMovingCards;
pub use product_card::ProductCard;
pub use project_carousel::ProjectCarousel;

// ============================================================================
// Layout Components
// ============================================================================

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>
            <main class="flex-1 p-4">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="border-b border-border px-4 py-3 flex items-center gap-6">
            <a href=route_href("") class="text-accent font-bold text-lg">"Situ"</a>
            <div class="flex gap-4 text-sm">
                <a href=route_href("") class="hover:text-accent transition-colors">"Inicio"</a>
                <a href=route_href("catalog") class="hover:text-accent transition-colors">"Catálogo"</a>
            </div>
        </nav>
    }
}

// ============================================================================
// Load States
// ============================================================================

#[component]
pub fn LoadingSpinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-muted">
            <div class="spinner mb-4"></div>
            <p>{label}</p>
        </div>
    }
}

/// Loader failure shown in place of the content
#[component]
pub fn ErrorPanel(message: String, subject: &'static str) -> impl IntoView {
    view! {
        <div class="text-center text-error py-10">
            <p class="text-xl font-semibold">"Oops! Algo salió mal."</p>
            <p>"Error: " {message}</p>
            <p>"No se pudieron cargar " {subject} ". Por favor, inténtalo de nuevo más tarde."</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-4xl mx-auto py-12 text-center">
                <h1 class="text-4xl font-bold text-error mb-4">"404"</h1>
                <p class="text-muted mb-8">"Página no encontrada"</p>
                <a href=route_href("") class="text-accent hover:underline">"Volver al inicio"</a>
            </div>
        </Layout>
    }
}
