//! Search and filter predicate over the catalog.

use std::fmt;

use crate::products::Product;

/// `data-filter` value of the chip that shows every product.
pub const FILTER_ALL: &str = "all";
/// `data-filter` value of the chip that shows products flagged as new.
pub const FILTER_NEW: &str = "nouveautes";

/// The single active catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    New,
    Category(String),
}

impl Filter {
    /// Parses a chip's `data-filter` value. An empty value means [`Filter::All`].
    #[must_use]
    pub fn from_chip_value(value: &str) -> Self {
        match value {
            "" | FILTER_ALL => Self::All,
            FILTER_NEW => Self::New,
            other => Self::Category(other.to_string()),
        }
    }

    #[must_use]
    pub fn chip_value(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::New => FILTER_NEW,
            Self::Category(category) => category,
        }
    }

    /// Products without a category pass every category filter.
    #[must_use]
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::New => product.is_new,
            Self::Category(wanted) => product
                .category
                .as_ref()
                .is_none_or(|category| category == wanted),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chip_value())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    filter: Filter,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the raw search input lowercased and trimmed.
    pub fn set_search(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Case-insensitive substring match on name or description. An empty
    /// term matches everything.
    #[must_use]
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&self.search_term)
            || product
                .description
                .to_lowercase()
                .contains(&self.search_term)
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.filter.accepts(product)
    }

    /// Catalog indices of matching products, in catalog order.
    #[must_use]
    pub fn matching_indices(&self, products: &[Product]) -> Vec<usize> {
        products
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches(product))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// A filter control as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub filter: Filter,
    pub label: String,
    pub pressed: bool,
}

/// Lists the chips for a catalog: everything, new arrivals, then each
/// distinct category in order of first appearance. Exactly the chip of the
/// active filter is pressed.
#[must_use]
pub fn available_filters(products: &[Product], active: &Filter) -> Vec<FilterChip> {
    let mut filters = vec![Filter::All, Filter::New];
    for product in products {
        if let Some(category) = &product.category {
            let filter = Filter::Category(category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
    }

    filters
        .into_iter()
        .map(|filter| {
            let label = match &filter {
                Filter::All => "Tout".to_string(),
                Filter::New => "Nouveautés".to_string(),
                Filter::Category(category) => category.clone(),
            };
            let pressed = &filter == active;
            FilterChip {
                filter,
                label,
                pressed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn make_product(name: &str, description: &str, category: Option<&str>, is_new: bool) -> Product {
        Product {
            name: name.to_string(),
            price: Decimal::ZERO,
            stock: None,
            images: vec![],
            category: category.map(str::to_owned),
            is_new,
            description: description.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            make_product("T-Shirt Néon", "Coton bio", Some("textile"), true),
            make_product("Bougie", "Parfum figue", Some("maison"), false),
            make_product("Carte postale", "Illustration shirt", None, false),
            make_product("Sweat", "Molleton", Some("textile"), false),
        ]
    }

    fn query(search: &str, filter: &str) -> QueryState {
        let mut query = QueryState::new();
        query.set_search(search);
        query.set_filter(Filter::from_chip_value(filter));
        query
    }

    #[test]
    fn identity_query_matches_everything() {
        let query = query("", "all");
        assert!(catalog().iter().all(|p| query.matches(p)));
    }

    #[test]
    fn search_term_is_trimmed_and_lowercased() {
        let query = query("  SHIRT ", "all");
        assert_eq!(query.search_term(), "shirt");
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let query = query("shirt", "all");
        for product in catalog() {
            let expected = product.name.to_lowercase().contains("shirt")
                || product.description.to_lowercase().contains("shirt");
            assert_eq!(query.matches(&product), expected, "{}", product.name);
        }
        let names: Vec<String> = catalog()
            .into_iter()
            .filter(|p| query.matches(p))
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["T-Shirt Néon", "Carte postale"]);
    }

    #[test]
    fn new_filter_keeps_flagged_products_only() {
        let query = query("", "nouveautes");
        assert_eq!(query.matching_indices(&catalog()), vec![0]);
    }

    #[test]
    fn category_filter_includes_categoryless_products() {
        let query = query("", "textile");
        assert_eq!(query.matching_indices(&catalog()), vec![0, 2, 3]);
    }

    #[test]
    fn search_and_filter_combine_with_and() {
        let query = query("molleton", "maison");
        assert!(query.matching_indices(&catalog()).is_empty());
    }

    #[test]
    fn empty_chip_value_means_all() {
        assert_eq!(Filter::from_chip_value(""), Filter::All);
        assert_eq!(Filter::from_chip_value("all"), Filter::All);
        assert_eq!(Filter::from_chip_value("nouveautes"), Filter::New);
        assert_eq!(
            Filter::from_chip_value("bijoux"),
            Filter::Category("bijoux".to_string())
        );
    }

    #[test]
    fn available_filters_lists_distinct_categories_in_order() {
        let chips = available_filters(&catalog(), &Filter::Category("maison".to_string()));
        let values: Vec<&str> = chips.iter().map(|c| c.filter.chip_value()).collect();
        assert_eq!(values, vec!["all", "nouveautes", "textile", "maison"]);

        let pressed: Vec<&str> = chips
            .iter()
            .filter(|c| c.pressed)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(pressed, vec!["maison"]);
    }
}
