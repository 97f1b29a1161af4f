//! Order message composition and the pre-filled email draft built from it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::products::{format_amount, sum_prices, SelectionEntry, CURRENCY_MARKER};

/// Returned instead of an order message when nothing is selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Vous n'avez sélectionné aucun article !";

/// Characters escaped the way `encodeURIComponent` escapes them.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GREETING: &str = "Bonjour,\n\n\
Un grand merci pour ta commande et pour ton soutien à l’association.\n\n\
Voici le récapitulatif de ta commande :";

/// Payment instructions placed between the total and the closing line.
pub const DEFAULT_PAYMENT_TERMS: &str = "Pour régler cette belle commande, tu peux :\n\n\
1. M'envoyer un chèque à l’ordre de l’Association Aidons Agathe \
(promis, il sera encaissé avec un grand sourire).\n\
2. Ou me payer en liquide (mais attention, je n'accepte pas les chocolats \
en guise de monnaie, sauf exception...).";

const CLOSING: &str = "Encore merci et à bientôt,";

/// Builds the order message from a selection.
///
/// Equivalent to [`OrderComposer::default`]`.compose(entries)`.
#[must_use]
pub fn compose(entries: &[SelectionEntry]) -> String {
    OrderComposer::default().compose(entries)
}

/// Formats selections into the order message. The signature is appended
/// verbatim after the closing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderComposer {
    payment_terms: String,
    signature: String,
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self {
            payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
            signature: String::new(),
        }
    }
}

impl OrderComposer {
    #[must_use]
    pub fn with_signature(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            ..Self::default()
        }
    }

    /// Replaces [`DEFAULT_PAYMENT_TERMS`].
    #[must_use]
    pub fn payment_terms(mut self, terms: impl Into<String>) -> Self {
        self.payment_terms = terms.into();
        self
    }

    /// Returns [`EMPTY_SELECTION_MESSAGE`] for an empty selection, otherwise
    /// one `- {name} : {price} €` line per entry in order, then the total.
    #[must_use]
    pub fn compose(&self, entries: &[SelectionEntry]) -> String {
        if entries.is_empty() {
            return EMPTY_SELECTION_MESSAGE.to_string();
        }

        let lines = entries
            .iter()
            .map(|entry| {
                format!(
                    "- {} : {} {CURRENCY_MARKER}",
                    entry.name,
                    format_amount(entry.price)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let total = format_amount(sum_prices(entries.iter().map(|entry| entry.price)));
        let payment_terms = self.payment_terms.trim();

        let mut message = format!(
            "\n{GREETING}\n{lines}\n\n\
             Pour un total de : {total} {CURRENCY_MARKER} (le prix parfait pour une bonne action).\n\n\
             {payment_terms}\n\n{CLOSING}\n"
        );
        let signature = self.signature.trim();
        if !signature.is_empty() {
            message.push_str(signature);
            message.push('\n');
        }
        message
    }
}

/// A pre-filled outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// May be empty; the mail client then asks for a recipient.
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl OrderDraft {
    /// `mailto:` URL with the subject and body escaped as URI components.
    #[must_use]
    pub fn mailto_url(&self) -> String {
        let subject = utf8_percent_encode(&self.subject, URI_COMPONENT);
        let body = utf8_percent_encode(&self.body, URI_COMPONENT);
        format!("mailto:{}?subject={subject}&body={body}", self.recipient)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    fn entry(name: &str, price: &str) -> SelectionEntry {
        SelectionEntry {
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn empty_selection_yields_fixed_message() {
        assert_eq!(compose(&[]), EMPTY_SELECTION_MESSAGE);
    }

    #[test]
    fn message_lists_entries_in_order_with_total() {
        let message = compose(&[entry("A", "10"), entry("B", "5.5")]);

        let items: Vec<&str> = message.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(items, vec!["- A : 10.00 €", "- B : 5.50 €"]);
        assert!(
            message.contains("Pour un total de : 15.50 €"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn message_is_wrapped_in_greeting_and_closing() {
        let message = compose(&[entry("A", "1")]);
        assert!(message.starts_with("\nBonjour,"));
        assert!(message.trim_end().ends_with("Encore merci et à bientôt,"));
    }

    #[test]
    fn signature_follows_closing() {
        let composer = OrderComposer::with_signature("Gaëlle\n");
        let message = composer.compose(&[entry("A", "1")]);
        assert!(message.ends_with("Encore merci et à bientôt,\nGaëlle\n"));
    }

    #[test]
    fn default_payment_terms_name_cheque_payee_and_cash() {
        let message = compose(&[entry("A", "1")]);
        assert!(message.contains("chèque à l’ordre de l’Association Aidons Agathe"));
        assert!(message.contains("Ou me payer en liquide"));
        assert!(message.contains(&format!("{DEFAULT_PAYMENT_TERMS}\n\nEncore merci")));
    }

    #[test]
    fn custom_payment_terms_replace_default() {
        let composer = OrderComposer::with_signature("Gaëlle").payment_terms("Virement uniquement.");
        let message = composer.compose(&[entry("A", "1")]);
        assert!(!message.contains("chèque"));
        assert!(message.ends_with("Virement uniquement.\n\nEncore merci et à bientôt,\nGaëlle\n"));
    }

    #[test]
    fn huge_prices_saturate_the_total_instead_of_panicking() {
        let message = compose(&[
            entry("A", "50000000000000000000000000000"),
            entry("B", "50000000000000000000000000000"),
        ]);
        assert!(message.contains(&format!("Pour un total de : {} €", Decimal::MAX)));
        assert!(message.contains("- A : 50000000000000000000000000000"));
    }

    #[test]
    fn signature_not_added_to_empty_selection_message() {
        let composer = OrderComposer::with_signature("Gaëlle");
        assert_eq!(composer.compose(&[]), EMPTY_SELECTION_MESSAGE);
    }

    #[test]
    fn mailto_url_escapes_like_uri_components() {
        let draft = OrderDraft {
            recipient: "boutique@example.org".to_string(),
            subject: "Demande de réservation".to_string(),
            body: "- A : 1.00 €\n(merci!)".to_string(),
        };
        assert_eq!(
            draft.mailto_url(),
            "mailto:boutique@example.org?subject=Demande%20de%20r%C3%A9servation\
             &body=-%20A%20%3A%201.00%20%E2%82%AC%0A(merci!)"
        );
    }
}
