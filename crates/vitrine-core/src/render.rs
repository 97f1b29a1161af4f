//! Projection of the filtered catalog into product cards.
//!
//! Rendering is a pure function of the catalog, the query state, and the
//! selection. The grid is rebuilt in full after every state change.

use serde::Serialize;

use crate::products::{format_euro, Product};
use crate::query::QueryState;
use crate::store::Selection;

/// The only node shown in the grid when the catalog could not be loaded.
pub const CATALOG_UNAVAILABLE_MESSAGE: &str =
    "Impossible de charger les produits pour le moment.";

pub const SELECT_LABEL: &str = "Sélectionner";
pub const SELECTED_LABEL: &str = "Sélectionné";
const DEFAULT_IMAGE_ALT: &str = "Produit";

/// Everything a view needs to draw one product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardViewModel {
    /// Position of the product in the catalog. Card interactions target this.
    pub catalog_index: usize,
    pub title: String,
    pub description: String,
    pub price_label: String,
    /// First image of the product, or empty.
    pub image: String,
    pub image_alt: String,
    pub out_of_stock: bool,
    /// Mirrors the select button's pressed state.
    pub selected: bool,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Cards(Vec<CardViewModel>),
    /// Catalog load failed: a single message and no cards.
    Unavailable(&'static str),
}

impl GridView {
    #[must_use]
    pub fn cards(&self) -> &[CardViewModel] {
        match self {
            Self::Cards(cards) => cards,
            Self::Unavailable(_) => &[],
        }
    }
}

#[must_use]
pub fn card_for(catalog_index: usize, product: &Product, selection: &Selection) -> CardViewModel {
    let selected = selection.is_selected(&product.name);
    let image_alt = if product.name.is_empty() {
        DEFAULT_IMAGE_ALT.to_string()
    } else {
        product.name.clone()
    };

    CardViewModel {
        catalog_index,
        title: product.name.clone(),
        description: product.description.clone(),
        price_label: format_euro(product.price),
        image: product.primary_image().unwrap_or_default().to_string(),
        image_alt,
        out_of_stock: product.is_out_of_stock(),
        selected,
        button_label: if selected { SELECTED_LABEL } else { SELECT_LABEL },
    }
}

/// One card per matching product, in catalog order.
#[must_use]
pub fn render_cards(
    products: &[Product],
    query: &QueryState,
    selection: &Selection,
) -> Vec<CardViewModel> {
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| query.matches(product))
        .map(|(idx, product)| card_for(idx, product, selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::query::Filter;

    fn make_product(name: &str, stock: Option<f64>, images: &[&str], category: Option<&str>) -> Product {
        Product {
            name: name.to_string(),
            price: Decimal::from_str("9.9").unwrap(),
            stock,
            images: images.iter().map(|s| (*s).to_string()).collect(),
            category: category.map(str::to_owned),
            is_new: false,
            description: format!("{name} fait main"),
        }
    }

    #[test]
    fn card_projects_product_fields() {
        let product = make_product("Collier", Some(2.0), &["c1.jpg", "c2.jpg"], None);
        let card = card_for(4, &product, &Selection::new());

        assert_eq!(card.catalog_index, 4);
        assert_eq!(card.title, "Collier");
        assert_eq!(card.description, "Collier fait main");
        assert_eq!(card.price_label, "9.90 €");
        assert_eq!(card.image, "c1.jpg");
        assert_eq!(card.image_alt, "Collier");
        assert!(!card.out_of_stock);
        assert!(!card.selected);
        assert_eq!(card.button_label, SELECT_LABEL);
    }

    #[test]
    fn card_image_empty_without_images() {
        let product = make_product("Collier", None, &[], None);
        assert_eq!(card_for(0, &product, &Selection::new()).image, "");
    }

    #[test]
    fn card_marks_out_of_stock_only_when_tracked_and_exhausted() {
        let selection = Selection::new();
        assert!(card_for(0, &make_product("A", Some(0.0), &[], None), &selection).out_of_stock);
        assert!(!card_for(0, &make_product("A", None, &[], None), &selection).out_of_stock);
        assert!(!card_for(0, &make_product("A", Some(1.0), &[], None), &selection).out_of_stock);
    }

    #[test]
    fn card_reflects_selection_membership() {
        let product = make_product("Bague", None, &[], None);
        let mut selection = Selection::new();
        selection.toggle(&product);

        let card = card_for(0, &product, &selection);
        assert!(card.selected);
        assert_eq!(card.button_label, SELECTED_LABEL);
    }

    #[test]
    fn render_keeps_catalog_order_and_indices() {
        let products = vec![
            make_product("A", None, &[], Some("x")),
            make_product("B", None, &[], Some("y")),
            make_product("C", None, &[], Some("x")),
        ];
        let mut query = QueryState::new();
        query.set_filter(Filter::Category("x".to_string()));

        let cards = render_cards(&products, &query, &Selection::new());
        let indices: Vec<usize> = cards.iter().map(|c| c.catalog_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn unavailable_grid_has_no_cards() {
        let grid = GridView::Unavailable(CATALOG_UNAVAILABLE_MESSAGE);
        assert!(grid.cards().is_empty());
    }
}
