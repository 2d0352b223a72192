//! Token-level vocabulary: the abbreviation/acronym expansion table, the
//! single-letter whitelist and digit-run extraction for numeral spelling.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Single letters that are words in Catalan (articles, prepositions and the
/// geminated ela host) or valid sentence starters.
const VALID_SINGLE_LETTERS: [&str; 8] = ["a", "e", "i", "o", "u", "l", "d", "p"];

/// Expansion table keyed on the lowercased token. Entries with a trailing
/// period are abbreviations; bare entries are acronyms and short forms that
/// the spell check would otherwise reject.
static REPLACEMENTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("’", "'"),
        ("%", "per cent"),
        ("€", "euros"),
        ("sr.", "senyor"),
        ("dr.", "doctor"),
        ("sra.", "senyora"),
        ("dra.", "doctora"),
        ("st.", "Sant"),
        ("sta.", "Santa"),
        ("num.", "número "),
        ("núm.", "número"),
        ("vol.", "Volum "),
        ("km.", "quilòmetres"),
        ("c.", " carrer"),
        ("c/", "carrer"),
        ("pl.", "plaça "),
        ("pag.", "pàgina"),
        ("pàg.", "pàgina"),
        ("p.", " pàgina"),
        ("ed.", "editorial"),
        ("h.", "hores"),
        ("av.", "avinguda"),
        ("hable.", "Honorable"),
        ("hble.", "honorable"),
        ("etc.", "etcètera"),
        ("pral.", "principal"),
        ("jr.", "júnior"),
        ("ptes.", " pessetes"),
        ("covid-19", "Covid dinou"),
        ("ha.", "hectàrees"),
        ("veg.", "vegeu"),
        ("sr", "senyor"),
        ("dr", "doctor"),
        ("sra", "senyora"),
        ("dra", "doctora"),
        ("st", "Sant"),
        ("sta", "Santa"),
        ("núm", "número "),
        ("km", "quilòmetres"),
        ("kv", "quilovolts"),
        ("kw", "quilowatts"),
        ("pag", "pàgina"),
        ("pàg", "pàgina"),
        ("av", "avinguda"),
        ("hable", "Honorable"),
        ("hble", "honorable"),
        ("ptes", "pessetes"),
        ("1r", "primer"),
        ("1a", "primera"),
        ("2n", "segon"),
        ("2a", "segona"),
        ("3r", "tercera"),
        ("4t", "quart"),
        ("4a", "quarta"),
        ("5è", "cinquè"),
        ("5ena", "cinquena"),
        ("iban", "Iban"),
        ("ibex", "Ibex"),
        ("eeuu", "Estats Units"),
        ("eua", "Estats Units"),
        ("eu", "Unió Europea"),
        ("ue", "Unió Europea"),
        ("nie", "Nie"),
        ("erc", "Esquerra Republicana de Catalunya"),
        ("ciu", "Convergiència i Unió"),
        ("psoe", "Partit Socialista Espanyol"),
        ("pp", "Partit Popular"),
        ("cup", "Cup"),
        ("psc", "Partit Socialista de Catalunya"),
        ("ccoo", "Comissions Obreres"),
        ("ampa", "associació de mares i pares d'alumnes"),
        ("ampas", "associacions de mares i pares d'alumnes"),
        ("ampes", "associacions de mares i pares d'alumnes"),
        ("afas", "associacions de famílies d'alumnes"),
        ("afes", "associacions de famílies d'alumnes"),
        ("afa", "associació de famílies d'alumnes"),
        ("tc", "Tribunal Constitucional"),
        ("tsjc", "Tribunal Superior de Justícia de Catalunya"),
        ("pimes", "Pime"),
        ("pime", "Pime"),
        ("led", "led"),
        ("unesco", "Unesco"),
        ("unicef", "Unicef"),
        ("sepa", "Sepa"),
        ("erto", "Erto"),
        ("dni", "document nacional d'identitat"),
        ("termcat", "Termcat"),
    ])
});

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

pub fn is_valid_single_letter(token: &str) -> bool {
    VALID_SINGLE_LETTERS.contains(&token.to_lowercase().as_str())
}

/// Expansion for a token, looked up case-insensitively. Returns `None` when
/// the token has no entry.
pub fn expansion_for(token: &str) -> Option<&'static str> {
    REPLACEMENTS.get(token.to_lowercase().as_str()).copied()
}

/// A token written in all-uppercase letters with more than one character is
/// treated as an acronym. Mixed or single-letter tokens are not.
pub fn is_acronym(token: &str) -> bool {
    token.chars().count() > 1
        && token.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Maximal runs of consecutive digits inside a token ("25" in "25km",
/// both "3" and "4" in "3-4").
pub fn digit_runs(token: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(token).map(|m| m.as_str()).collect()
}

/// True when the token is a number with an attached hour marker, "19h" or
/// "19h.". The marker becomes the word "hores" after the number is spelled.
pub fn has_hour_marker(token: &str) -> bool {
    let stripped = token.strip_suffix('.').unwrap_or(token);
    stripped
        .strip_suffix('h')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// The token with its hour marker removed, keeping only the digits.
pub fn without_hour_marker(token: &str) -> &str {
    let stripped = token.strip_suffix('.').unwrap_or(token);
    stripped.strip_suffix('h').unwrap_or(stripped)
}
