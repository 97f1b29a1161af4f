//! Parsing of the interactive prompt.

use anyhow::{bail, Context};

pub(crate) const HELP: &str = "\
commandes :
  search <texte>   filtrer par nom ou description (vide pour tout afficher)
  filter <valeur>  all, nouveautes ou une catégorie
  select <n>       (dé)sélectionner la carte n
  view <n>         ouvrir les images de la carte n
  next | prev      image suivante / précédente
  close | esc      fermer la visionneuse
  order            afficher le récapitulatif de commande
  send             préparer l'e-mail de commande
  theme            changer de thème
  help             cette aide
  quit             quitter";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Search(String),
    Filter(String),
    /// 1-based card number in the grid as last printed.
    Select(usize),
    View(usize),
    Next,
    Prev,
    Close,
    Escape,
    Order,
    Send,
    Theme,
    Help,
    Quit,
}

/// Parses a prompt line. Blank lines are `None`.
///
/// # Errors
///
/// Returns an error for unknown commands and malformed card numbers.
pub(crate) fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "filter" | "f" => Command::Filter(rest.to_string()),
        "select" => Command::Select(card_number(rest)?),
        "view" | "v" => Command::View(card_number(rest)?),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "close" => Command::Close,
        "esc" => Command::Escape,
        "order" => Command::Order,
        "send" => Command::Send,
        "theme" => Command::Theme,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("commande inconnue : {other} (tapez help)"),
    };
    Ok(Some(command))
}

fn card_number(raw: &str) -> anyhow::Result<usize> {
    let number = raw
        .parse::<usize>()
        .with_context(|| format!("numéro de carte invalide : \"{raw}\""))?;
    if number == 0 {
        bail!("les cartes sont numérotées à partir de 1");
    }
    Ok(number)
}
