//! Catalog listing management and card rendering.

mod cards;
mod service;


pub use cards::{render_cards, CardAction, CardActionKind, CatalogCard};
pub use service::CatalogService;
