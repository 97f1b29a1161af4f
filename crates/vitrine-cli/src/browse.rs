//! Command handlers for the CLI.
//!
//! `browse` keeps the prompt responsive while the catalog downloads: the
//! fetch runs as its own task and is installed into the controller whenever
//! it completes. All state changes happen on this task, one input at a time.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use vitrine_catalog::CatalogClient;
use vitrine_core::{
    render_cards, App, AppConfig, Filter, GridView, Key, ModalTarget, OrderComposer,
    OrderSettings, QueryState, Selection, UiEvent, CATALOG_UNAVAILABLE_MESSAGE,
};

use crate::commands::{parse_command, Command, HELP};
use crate::terminal::{write_grid, TerminalView};

fn build_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    CatalogClient::new(config.fetch_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))
}

pub(crate) fn order_settings(config: &AppConfig) -> OrderSettings {
    let mut composer = OrderComposer::with_signature(config.order_signature.clone());
    if let Some(terms) = &config.order_payment_terms {
        composer = composer.payment_terms(terms.clone());
    }
    OrderSettings {
        recipient: config.order_recipient.clone().unwrap_or_default(),
        subject: config.order_subject.clone(),
        composer,
    }
}

/// Fetch once, filter, print the grid, exit.
///
/// A failed fetch prints the fallback message instead of cards and is not
/// treated as a command failure.
///
/// # Errors
///
/// Returns an error if the client cannot be built or stdout is closed.
pub(crate) async fn run_list(
    config: &AppConfig,
    url: &str,
    search: Option<&str>,
    filter: &str,
) -> anyhow::Result<()> {
    let client = build_client(config)?;

    let mut query = QueryState::new();
    query.set_search(search.unwrap_or_default());
    query.set_filter(Filter::from_chip_value(filter));

    let grid = match client.fetch_catalog(url).await {
        Ok(products) => GridView::Cards(render_cards(&products, &query, &Selection::new())),
        Err(e) => {
            tracing::error!(error = %e, url, "failed to load catalog");
            GridView::Unavailable(CATALOG_UNAVAILABLE_MESSAGE)
        }
    };

    let mut stdout = std::io::stdout().lock();
    write_grid(&mut stdout, &grid)?;
    stdout.flush()?;
    Ok(())
}

/// Interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be built or stdin fails.
pub(crate) async fn run_browse(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let fetch_url = url.to_owned();
    let mut fetch = tokio::spawn(async move { client.fetch_catalog(&fetch_url).await });
    let mut fetch_pending = true;

    let mut app = App::new(TerminalView::new(std::io::stdout()), order_settings(config));
    app.view_mut().notice("Chargement du catalogue... (help pour l'aide)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            joined = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                match joined {
                    Ok(Ok(products)) => app.catalog_loaded(products),
                    Ok(Err(e)) => app.catalog_failed(&e),
                    Err(e) => app.catalog_failed(&e),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => apply_command(&mut app, command),
                    Ok(None) => {}
                    Err(e) => app.view_mut().notice(&e.to_string()),
                }
            }
        }
    }

    if fetch_pending {
        fetch.abort();
    }
    Ok(())
}

/// Translates a prompt command into controller input.
pub(crate) fn apply_command<W: Write>(app: &mut App<TerminalView<W>>, command: Command) {
    let event = match command {
        Command::Search(text) => UiEvent::SearchInput(text),
        Command::Filter(value) => UiEvent::FilterChip(value),
        Command::Select(number) => match card_index(app, number) {
            Some(index) => UiEvent::CardSelectClicked(index),
            None => return,
        },
        Command::View(number) => match card_index(app, number) {
            Some(index) => UiEvent::CardImageClicked(index),
            None => return,
        },
        Command::Next => UiEvent::Key(Key::ArrowRight),
        Command::Prev => UiEvent::Key(Key::ArrowLeft),
        Command::Escape => UiEvent::Key(Key::Escape),
        Command::Close => UiEvent::ModalClicked(ModalTarget::CloseButton),
        Command::Send => UiEvent::SendOrder,
        Command::Theme => UiEvent::ToggleTheme,
        Command::Order => {
            let message = app.order_message();
            app.view_mut().notice(&message);
            return;
        }
        Command::Help => {
            app.view_mut().notice(HELP);
            return;
        }
        Command::Quit => return,
    };
    app.dispatch(event);
}

fn card_index<W: Write>(app: &mut App<TerminalView<W>>, number: usize) -> Option<usize> {
    let index = app.view().catalog_index(number);
    if index.is_none() {
        app.view_mut().notice(&format!("aucune carte n°{number}"));
    }
    index
}
