// crates/situ-app/src/pages/mod.rs
// Page components for the situ showcase

mod catalog;
mod home;

pub use catalog::CatalogPage;
pub use home::HomePage;
