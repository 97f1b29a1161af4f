//! Top-level controller.
//!
//! [`App`] owns every piece of session state and is driven by [`UiEvent`]s.
//! Each event mutates state synchronously and is immediately followed by a
//! full re-render into the [`View`]. Events whose UI hook the view lacks are
//! dropped without error.

use std::fmt;

use crate::order::{OrderComposer, OrderDraft, EMPTY_SELECTION_MESSAGE};
use crate::products::Product;
use crate::query::{available_filters, Filter, FilterChip, QueryState};
use crate::render::{render_cards, GridView, CATALOG_UNAVAILABLE_MESSAGE};
use crate::store::{CatalogStore, ToggleRejected};
use crate::viewer::{ImageViewer, Key, KeyListeners, ModalTarget, ViewerOutcome};

/// The anchors a view provides. A missing hook turns the matching
/// initializer or action into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct UiHooks {
    pub grid: bool,
    pub card_template: bool,
    pub search_input: bool,
    pub filter_chips: bool,
    pub selection_counter: bool,
    pub image_modal: bool,
    pub send_button: bool,
    pub theme_toggle: bool,
}

impl UiHooks {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            grid: true,
            card_template: true,
            search_input: true,
            filter_chips: true,
            selection_counter: true,
            image_modal: true,
            send_button: true,
            theme_toggle: true,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            grid: false,
            card_template: false,
            search_input: false,
            filter_chips: false,
            selection_counter: false,
            image_modal: false,
            send_button: false,
            theme_toggle: false,
        }
    }

    fn can_render_grid(self) -> bool {
        self.grid && self.card_template
    }
}

impl Default for UiHooks {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Neon,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Neon => Self::Light,
            Self::Light => Self::Neon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neon => write!(f, "neon"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// The UI boundary the controller renders into.
pub trait View {
    fn hooks(&self) -> UiHooks;
    fn render_grid(&mut self, grid: &GridView);
    fn render_filters(&mut self, chips: &[FilterChip]);
    fn render_selection_count(&mut self, count: usize);
    /// `None` hides the modal.
    fn render_modal(&mut self, image: Option<&str>);
    fn render_theme(&mut self, theme: Theme);
    fn alert(&mut self, message: &str);
    /// Follows an outbound link, e.g. a `mailto:` draft.
    fn navigate(&mut self, url: &str);
}

/// User actions, addressed the way the view presents them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchInput(String),
    /// Carries the chip's `data-filter` value.
    FilterChip(String),
    /// Click on the image of the card for this catalog index.
    CardImageClicked(usize),
    /// Click on the select button of the card for this catalog index.
    CardSelectClicked(usize),
    Key(Key),
    ModalClicked(ModalTarget),
    SendOrder,
    ToggleTheme,
}

/// Outbound email settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSettings {
    pub recipient: String,
    pub subject: String,
    pub composer: OrderComposer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogStatus {
    Pending,
    Loaded,
    Failed,
}

pub struct App<V: View> {
    view: V,
    store: CatalogStore,
    query: QueryState,
    viewer: ImageViewer,
    key_listeners: KeyListeners,
    theme: Theme,
    order: OrderSettings,
    status: CatalogStatus,
}

impl<V: View> App<V> {
    /// Creates the controller and draws the initial, empty state.
    pub fn new(view: V, order: OrderSettings) -> Self {
        let mut app = Self {
            view,
            store: CatalogStore::new(),
            query: QueryState::new(),
            viewer: ImageViewer::new(),
            key_listeners: KeyListeners::new(),
            theme: Theme::default(),
            order,
            status: CatalogStatus::Pending,
        };
        app.render();
        if app.view.hooks().theme_toggle {
            app.view.render_theme(app.theme);
        }
        app
    }

    /// Installs the normalized catalog and redraws.
    pub fn catalog_loaded(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "catalog loaded");
        self.store.replace_products(products);
        self.status = CatalogStatus::Loaded;
        self.render();
    }

    /// Records a fetch failure. The grid shows a single fallback message.
    pub fn catalog_failed(&mut self, error: &dyn fmt::Display) {
        tracing::error!(error = %error, "failed to load catalog");
        self.status = CatalogStatus::Failed;
        self.render();
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        tracing::debug!(?event, "ui event");
        let hooks = self.view.hooks();
        match event {
            UiEvent::SearchInput(raw) if hooks.search_input => {
                self.query.set_search(&raw);
                self.render();
            }
            UiEvent::FilterChip(value) if hooks.filter_chips => {
                let filter = Filter::from_chip_value(&value);
                tracing::debug!(filter = %filter, "filter changed");
                self.query.set_filter(filter);
                self.render();
            }
            UiEvent::CardImageClicked(index) if hooks.can_render_grid() => {
                self.open_viewer(index, hooks);
            }
            UiEvent::CardSelectClicked(index) if hooks.can_render_grid() => {
                self.toggle_selection(index);
            }
            UiEvent::Key(key) => {
                let outcome = self.viewer.handle_key(&key, &mut self.key_listeners);
                self.after_viewer(outcome);
            }
            UiEvent::ModalClicked(target) => {
                let outcome = self.viewer.handle_click(target, &mut self.key_listeners);
                self.after_viewer(outcome);
            }
            UiEvent::SendOrder if hooks.send_button => self.send_order(),
            UiEvent::ToggleTheme if hooks.theme_toggle => {
                self.theme = self.theme.toggled();
                self.view.render_theme(self.theme);
            }
            _ => tracing::debug!("event dropped, ui hook missing"),
        }
    }

    /// The order email for the current selection, or `None` when nothing is
    /// selected.
    #[must_use]
    pub fn order_draft(&self) -> Option<OrderDraft> {
        let entries = self.store.selection().entries();
        if entries.is_empty() {
            return None;
        }
        Some(OrderDraft {
            recipient: self.order.recipient.clone(),
            subject: self.order.subject.clone(),
            body: self.order.composer.compose(entries),
        })
    }

    /// The order message, including the empty-selection message.
    #[must_use]
    pub fn order_message(&self) -> String {
        self.order.composer.compose(self.store.selection().entries())
    }

    /// Recomputes the grid as currently shown.
    #[must_use]
    pub fn grid(&self) -> GridView {
        match self.status {
            CatalogStatus::Failed => GridView::Unavailable(CATALOG_UNAVAILABLE_MESSAGE),
            CatalogStatus::Pending | CatalogStatus::Loaded => GridView::Cards(render_cards(
                self.store.products(),
                &self.query,
                self.store.selection(),
            )),
        }
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    #[must_use]
    pub fn viewer(&self) -> &ImageViewer {
        &self.viewer
    }

    #[must_use]
    pub fn key_listeners(&self) -> &KeyListeners {
        &self.key_listeners
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn open_viewer(&mut self, index: usize, hooks: UiHooks) {
        if !hooks.image_modal {
            return;
        }
        let Some(product) = self.store.product(index) else {
            return;
        };
        if self
            .viewer
            .open(product.images.clone(), &mut self.key_listeners)
        {
            tracing::debug!(product = %product.name, "image viewer opened");
            self.view.render_modal(self.viewer.current_image());
        }
    }

    fn toggle_selection(&mut self, index: usize) {
        match self.store.toggle_selection(index) {
            Ok(selected) => {
                tracing::debug!(index, selected, "selection toggled");
                self.render();
            }
            Err(ToggleRejected::OutOfStock) => {
                tracing::debug!(index, "out-of-stock product not selectable");
            }
            Err(ToggleRejected::UnknownProduct) => {
                tracing::warn!(index, "select clicked for unknown product");
            }
        }
    }

    fn after_viewer(&mut self, outcome: ViewerOutcome) {
        match outcome {
            ViewerOutcome::Navigated => self.view.render_modal(self.viewer.current_image()),
            ViewerOutcome::Closed => self.view.render_modal(None),
            ViewerOutcome::Ignored => {}
        }
    }

    fn send_order(&mut self) {
        match self.order_draft() {
            Some(draft) => {
                tracing::info!(items = self.store.selection().len(), "opening order draft");
                self.view.navigate(&draft.mailto_url());
            }
            None => {
                tracing::warn!("order requested with an empty selection");
                self.view.alert(EMPTY_SELECTION_MESSAGE);
            }
        }
    }

    fn render(&mut self) {
        let hooks = self.view.hooks();
        if hooks.can_render_grid() {
            let grid = self.grid();
            self.view.render_grid(&grid);
        }
        if hooks.filter_chips {
            let chips = available_filters(self.store.products(), self.query.filter());
            self.view.render_filters(&chips);
        }
        if hooks.selection_counter {
            self.view.render_selection_count(self.store.selection().len());
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
