use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Name shown for products whose payload carries neither `name` nor `titre`.
pub const PLACEHOLDER_NAME: &str = "Article";

/// Currency marker appended to every displayed amount.
pub const CURRENCY_MARKER: &str = "€";

/// A catalog item, normalized from one entry of the raw stock payload.
///
/// `name` is the identity key everywhere (selection membership, lookups).
/// Two products sharing a name are indistinguishable to the selection set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Never negative; malformed or missing payload prices become zero.
    pub price: Decimal,
    /// `None` means the payload did not track stock (treated as unlimited).
    pub stock: Option<f64>,
    /// Image URLs in display order. May be empty.
    pub images: Vec<String>,
    pub category: Option<String>,
    pub is_new: bool,
    pub description: String,
}

impl Product {
    /// Returns `true` when stock is tracked and exhausted.
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock.is_some_and(|stock| stock <= 0.0)
    }

    /// The image used on the product card, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Snapshot of this product for the selection set.
    #[must_use]
    pub fn to_selection_entry(&self) -> SelectionEntry {
        SelectionEntry {
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// A product's name and price, copied at the moment it was selected.
///
/// Later catalog changes do not update an existing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub name: String,
    pub price: Decimal,
}

/// Adds prices, saturating at [`Decimal::MAX`] instead of overflowing.
///
/// Payload prices are untrusted and each may be close to the `Decimal` range.
#[must_use]
pub fn sum_prices<I>(prices: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    for price in prices {
        match total.checked_add(price) {
            Some(sum) => total = sum,
            None => {
                tracing::warn!("price total overflowed, saturating");
                return Decimal::MAX;
            }
        }
    }
    total
}

/// Formats an amount with two decimals followed by the currency marker,
/// e.g. `12.5` → `"12.50 €"`.
#[must_use]
pub fn format_euro(amount: Decimal) -> String {
    format!("{} {CURRENCY_MARKER}", format_amount(amount))
}

/// Formats an amount with exactly two decimals, rounding halves away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
