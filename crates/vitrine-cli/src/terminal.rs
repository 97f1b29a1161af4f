//! Line-oriented terminal rendering of the controller's view.

use std::io::{self, Write};

use vitrine_core::{CardViewModel, FilterChip, GridView, Theme, UiHooks, View};

/// A [`View`] that prints every render to `out`.
///
/// Cards are numbered from 1 in the order they were last printed; the
/// prompt addresses cards by that number.
pub(crate) struct TerminalView<W: Write> {
    out: W,
    visible: Vec<usize>,
}

impl<W: Write> TerminalView<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            visible: Vec::new(),
        }
    }

    /// Catalog index of the 1-based card number from the last printed grid.
    pub(crate) fn catalog_index(&self, card_number: usize) -> Option<usize> {
        card_number
            .checked_sub(1)
            .and_then(|idx| self.visible.get(idx))
            .copied()
    }

    pub(crate) fn notice(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "{message}"));
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(e) = write(&mut self.out).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn hooks(&self) -> UiHooks {
        UiHooks::all()
    }

    fn render_grid(&mut self, grid: &GridView) {
        self.visible = grid.cards().iter().map(|card| card.catalog_index).collect();
        self.emit(|out| write_grid(out, grid));
    }

    fn render_filters(&mut self, chips: &[FilterChip]) {
        let line = chips
            .iter()
            .map(|chip| {
                if chip.pressed {
                    format!("[{}]", chip.label)
                } else {
                    chip.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        self.emit(|out| writeln!(out, "Filtres : {line}"));
    }

    fn render_selection_count(&mut self, count: usize) {
        self.emit(|out| writeln!(out, "Sélection : {count} article(s)"));
    }

    fn render_modal(&mut self, image: Option<&str>) {
        match image {
            Some(url) => self.emit(|out| writeln!(out, "Image : {url}")),
            None => self.emit(|out| writeln!(out, "Visionneuse fermée")),
        }
    }

    fn render_theme(&mut self, theme: Theme) {
        self.emit(|out| writeln!(out, "Thème : {theme}"));
    }

    fn alert(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "! {message}"));
    }

    fn navigate(&mut self, url: &str) {
        self.emit(|out| writeln!(out, "Ouvrir : {url}"));
    }
}

/// Prints a grid: one block per card, or the single fallback message.
pub(crate) fn write_grid<W: Write>(out: &mut W, grid: &GridView) -> io::Result<()> {
    match grid {
        GridView::Unavailable(message) => writeln!(out, "{message}"),
        GridView::Cards(cards) if cards.is_empty() => writeln!(out, "(aucun article)"),
        GridView::Cards(cards) => {
            for (number, card) in cards.iter().enumerate() {
                write_card(out, number + 1, card)?;
            }
            Ok(())
        }
    }
}

fn write_card<W: Write>(out: &mut W, number: usize, card: &CardViewModel) -> io::Result<()> {
    let stock = if card.out_of_stock { "  (rupture)" } else { "" };
    let pressed = if card.selected { "x" } else { " " };
    writeln!(
        out,
        "{number:>3}. [{pressed}] {} | {}{stock}",
        card.title, card.price_label
    )?;
    if !card.description.is_empty() {
        writeln!(out, "       {}", card.description)?;
    }
    if !card.image.is_empty() {
        writeln!(out, "       {} : {}", card.image_alt, card.image)?;
    }
    writeln!(out, "       -> {}", card.button_label)
}
