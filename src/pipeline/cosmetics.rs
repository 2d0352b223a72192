//! Cosmetic repair applied to sentences that survive the gates: apostrophe
//! shapes, unbalanced quotes, terminal punctuation, duplicate marks and
//! capitalization. `normalize` is idempotent so re-filtering an already
//! filtered corpus leaves it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

use super::gates::{ends_with_terminal_punctuation, QUOTATION_MARKS};

static CURLY_BEFORE_VOWEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([nldNLD])’(h?[aeiouàèéíòóúAEIOUÀÈÉÍÒÓÚ])").unwrap());
static CURLY_AFTER_VOWEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([aeiouàèéíòóúAEIOUÀÈÉÍÒÓÚ])’([nldNLD])").unwrap());
static SPACED_APOSTROPHE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([aeiouàèéíòóúnldAEIOUÀÈÉÍÒÓÚNLD])' (h?[aeiouàèéíòóúnldAEIOUÀÈÉÍÒÓÚNLD])")
        .unwrap()
});
static EXCLAMATION_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([?!])\.").unwrap());
static EXCLAMATION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"!+").unwrap());
static QUESTION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?+").unwrap());
static ELLIPSIS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\.+").unwrap());

/// Rewrite curly apostrophes in elision contexts to the plain form and close
/// up apostrophes followed by a space ("l' home" to "l'home").
pub fn fix_apostrophes(line: &str) -> String {
    let fixed = CURLY_BEFORE_VOWEL.replace_all(line, "${1}'${2}");
    let fixed = CURLY_AFTER_VOWEL.replace_all(&fixed, "${1}'${2}");
    SPACED_APOSTROPHE.replace_all(&fixed, "${1}'${2}").into_owned()
}

/// When the quotation marks in a line do not pair up, strip them all rather
/// than guess which one is stray.
pub fn fix_quotation_marks(line: &str) -> String {
    let count = line.chars().filter(|c| QUOTATION_MARKS.contains(c)).count();
    if count % 2 == 0 {
        line.to_string()
    } else {
        line.chars().filter(|c| !QUOTATION_MARKS.contains(c)).collect()
    }
}

/// Give the sentence a terminal period: a trailing comma is replaced, any
/// other non-terminal ending gets a period appended.
pub fn fix_sentence_end(line: &str) -> String {
    let trimmed = line.trim_end();
    let base = trimmed.strip_suffix(',').unwrap_or(trimmed);
    format!("{base}.")
}

/// Collapse duplicate terminal marks: "?." and "!." lose the period,
/// "!!!" and "???" collapse to a single mark.
pub fn collapse_terminal_marks(line: &str) -> String {
    let collapsed = EXCLAMATION_DOT.replace_all(line, "${1}");
    let collapsed = EXCLAMATION_RUN.replace_all(&collapsed, "!");
    QUESTION_RUN.replace_all(&collapsed, "?").into_owned()
}

/// Collapse any run of two or more periods to a canonical three-dot
/// ellipsis.
pub fn collapse_ellipses(line: &str) -> String {
    ELLIPSIS_RUN.replace_all(line, "...").into_owned()
}

/// Trim leading whitespace and uppercase the first letter.
pub fn fix_beginning(line: &str) -> String {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A period that is not part of the sentence terminator; the last two
/// characters are exempt. Ellipsis-terminated lines must be handled before
/// this check, their first dot counts as interior.
pub fn has_interior_period(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    chars[..chars.len() - 2].contains(&'.')
}

/// Full cosmetic pass in canonical order. Idempotent.
pub fn normalize(line: &str) -> String {
    let fixed = fix_apostrophes(line);
    let fixed = fix_quotation_marks(&fixed);
    let fixed = if ends_with_terminal_punctuation(&fixed) {
        fixed
    } else {
        fix_sentence_end(&fixed)
    };
    let fixed = collapse_terminal_marks(&fixed);
    fix_beginning(&fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_apostrophes() {
        assert_eq!(fix_apostrophes("l’home"), "l'home");
        assert_eq!(fix_apostrophes("l' home"), "l'home");
        assert_eq!(fix_apostrophes("mà d’obra"), "mà d'obra");
    }

    #[test]
    fn test_fix_quotation_marks_on_odd_count() {
        assert_eq!(fix_quotation_marks("Va dir \"prou."), "Va dir prou.");
        assert_eq!(fix_quotation_marks("Va dir \"prou\"."), "Va dir \"prou\".");
        assert_eq!(fix_quotation_marks("«Bon dia»."), "«Bon dia».");
    }

    #[test]
    fn test_fix_sentence_end() {
        assert_eq!(fix_sentence_end("Bon dia,"), "Bon dia.");
        assert_eq!(fix_sentence_end("Bon dia"), "Bon dia.");
    }

    #[test]
    fn test_collapse_terminal_marks() {
        assert_eq!(collapse_terminal_marks("Prou!."), "Prou!");
        assert_eq!(collapse_terminal_marks("Prou!!!"), "Prou!");
        assert_eq!(collapse_terminal_marks("Què???"), "Què?");
    }

    #[test]
    fn test_collapse_ellipses() {
        assert_eq!(collapse_ellipses("I llavors...."), "I llavors...");
        assert_eq!(collapse_ellipses("I llavors.."), "I llavors...");
        assert_eq!(collapse_ellipses("I llavors..."), "I llavors...");
    }

    #[test]
    fn test_fix_beginning() {
        assert_eq!(fix_beginning(" bon dia."), "Bon dia.");
        assert_eq!(fix_beginning("bon dia."), "Bon dia.");
        assert_eq!(fix_beginning("Bon dia."), "Bon dia.");
    }

    #[test]
    fn test_interior_period() {
        assert!(has_interior_period("El Sr.Garcia va venir."));
        assert!(!has_interior_period("Bon dia."));
        assert!(!has_interior_period("Prou!"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "va dir \"prou,",
            "l’home arriba tard!!!",
            " bon dia a tothom",
            "Què fas?.",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
