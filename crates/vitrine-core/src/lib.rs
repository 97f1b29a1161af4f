pub mod app;
mod app_config;
mod config;
pub mod order;
pub mod products;
pub mod query;
pub mod render;
pub mod store;
pub mod viewer;

use thiserror::Error;

pub use app::{App, OrderSettings, Theme, UiEvent, UiHooks, View};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_CATALOG_URL};
pub use order::{
    compose, OrderComposer, OrderDraft, DEFAULT_PAYMENT_TERMS, EMPTY_SELECTION_MESSAGE,
};
pub use products::{format_euro, sum_prices, Product, SelectionEntry, PLACEHOLDER_NAME};
pub use query::{available_filters, Filter, FilterChip, QueryState};
pub use render::{card_for, render_cards, CardViewModel, GridView, CATALOG_UNAVAILABLE_MESSAGE};
pub use store::{CatalogStore, Selection, ToggleRejected};
pub use viewer::{ImageViewer, Key, KeyListeners, ModalState, ModalTarget};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
