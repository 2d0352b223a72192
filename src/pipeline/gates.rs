//! Line-level admissibility gates. Each function inspects one candidate
//! sentence and answers a single yes/no question; the driver in the parent
//! module decides what the answer means.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::wordlists::fold_diacritics;

/// Quotation marks handled by the quote-parity fix and the leading-junk
/// stripper.
pub const QUOTATION_MARKS: [char; 7] = ['‘', '’', '“', '"', '”', '«', '»'];

/// Characters a finished sentence may end with.
pub const SENTENCE_END_CHARS: [char; 5] = ['.', '!', '?', '"', '\''];

/// Punctuation that disqualifies a sentence outright.
const FORBIDDEN_PUNCTUATION: [char; 21] = [
    '|', '[', ']', '(', ')', '@', '#', '$', '&', '*', '+', '{', '}', '/', '=', '®', '>', '<',
    '≤', '–', '©',
];

/// Function words that never legitimately end a Catalan sentence; a bare
/// final word from this list marks the sentence as probably truncated.
const BAD_FINAL_WORDS: &[&str] = &[
    "els", "el", "la", "les", "a", "en", "de", "que", "què", "mitjançant", "del", "dels", "al",
    "als", "es", "per", "i", "amb", "hem", "ha", "he", "has", "heu", "qual", "han", "són", "com",
];

static DOT_BEFORE_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[a-zA-Z]").unwrap());
static EMOJI: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{263a}-\u{1f645}]").unwrap());
static HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-2]?[0-9][:.][0-5][0-9]").unwrap());
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \([A-Úa-ú0-9 \-.,]*\)").unwrap());
static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-ü]+ ([Dd]['e](l)?)? ?[A-Z][a-ü]*").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Sentences of four characters or fewer carry no usable speech.
pub fn is_line_long_enough(line: &str) -> bool {
    line.chars().count() > 4
}

/// Drop non-alphabetic leading characters (dashes, digits, stray bullets),
/// unless the line opens with a quotation mark, which is legitimate. The
/// quote exemption applies to the original first character only; a quote
/// uncovered mid-strip goes too. Stops once the line gets short enough that
/// the length gate would reject it.
pub fn strip_leading_junk(line: &str) -> String {
    if line
        .chars()
        .next()
        .is_some_and(|c| QUOTATION_MARKS.contains(&c))
    {
        return line.to_string();
    }
    let mut current = line.to_string();
    loop {
        let mut chars = current.chars();
        let Some(first) = chars.next() else {
            return current;
        };
        if first.is_alphabetic() || current.chars().count() <= 4 {
            return current;
        }
        current = chars.collect();
    }
}

pub fn starts_with_lowercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_lowercase)
}

pub fn ends_with_terminal_punctuation(line: &str) -> bool {
    line.chars()
        .last()
        .is_some_and(|c| SENTENCE_END_CHARS.contains(&c))
}

/// True when the sentence stops dead on a function word that cannot close a
/// sentence, which points at a segmentation break. The raw last whitespace
/// token is compared as-is: attached terminal punctuation means the sentence
/// ended on purpose.
pub fn ends_with_bad_final_word(line: &str) -> bool {
    let Some(last) = line.split_whitespace().last() else {
        return false;
    };
    BAD_FINAL_WORDS.contains(&last)
}

/// Detects immediately repeated words ("la la cançó"), case-insensitively.
pub fn has_adjacent_repeated_word(line: &str) -> bool {
    let lowered = line.to_lowercase();
    let mut prev: Option<(&str, usize)> = None;
    for m in WORD.find_iter(&lowered) {
        if let Some((word, end)) = prev {
            let gap = &lowered[end..m.start()];
            if word == m.as_str() && !gap.is_empty() && gap.chars().all(char::is_whitespace) {
                return true;
            }
        }
        prev = Some((m.as_str(), m.end()));
    }
    false
}

/// True when the first pair of adjacent capitalized words has a listed
/// surname as its second word. Only the first pattern match decides; a
/// surname appearing later in the line does not count. A match at the very
/// start of the line whose first word has at most two characters is ignored;
/// those are almost always sentence-initial clitics, not names.
pub fn is_name(line: &str, surnames: &HashSet<String>) -> bool {
    let Some(m) = NAME.find(line) else {
        return false;
    };
    let matched = m.as_str();
    let Some(space) = matched.find(' ') else {
        return false;
    };
    let first = &matched[..space];
    let surname = matched[space + 1..].trim_start();
    if m.start() == 0 && first.chars().count() <= 2 {
        return false;
    }
    surnames.contains(surname) || surnames.contains(&fold_diacritics(surname))
}

/// Remove stage directions and other parenthesized asides, together with the
/// space before them.
pub fn strip_parentheticals(line: &str) -> String {
    PARENTHETICAL.replace_all(line, "").into_owned()
}

/// Characters and patterns that disqualify a sentence: symbol punctuation,
/// a period glued to a letter (URLs, initials), emoji, a trailing colon and
/// free-standing dashes.
pub fn has_forbidden_characters(line: &str) -> bool {
    if line.chars().any(|c| FORBIDDEN_PUNCTUATION.contains(&c)) {
        return true;
    }
    if DOT_BEFORE_LETTER.is_match(line) || EMOJI.is_match(line) {
        return true;
    }
    line.ends_with(':') || line.contains(" - ")
}

/// Clock-time expressions such as "10:30" or "10.30". A digit right after
/// the minute part means the match is inside a longer number and is ignored.
pub fn has_time_expression(line: &str) -> bool {
    HOURS.find_iter(line).any(|m| {
        !line[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

pub fn contains_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

/// Space-separated token count must sit strictly between 3 and 19.
pub fn has_proper_token_count(line: &str) -> bool {
    let count = line.split(' ').count();
    count > 3 && count < 19
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_gate() {
        assert!(!is_line_long_enough("Sí."));
        assert!(!is_line_long_enough("Prou"));
        assert!(is_line_long_enough("Prou!"));
    }

    #[test]
    fn test_strip_leading_junk() {
        assert_eq!(strip_leading_junk("- Bon dia a tothom."), "Bon dia a tothom.");
        assert_eq!(strip_leading_junk("3. Bon dia a tothom."), "Bon dia a tothom.");
        assert_eq!(strip_leading_junk("«Bon dia»."), "«Bon dia».");
        assert_eq!(strip_leading_junk("Bon dia."), "Bon dia.");
        // the quote exemption covers the first character only
        assert_eq!(strip_leading_junk("- «Bon dia» a tothom."), "Bon dia» a tothom.");
    }

    #[test]
    fn test_terminal_punctuation() {
        assert!(ends_with_terminal_punctuation("Bon dia."));
        assert!(ends_with_terminal_punctuation("Bon dia!"));
        assert!(ends_with_terminal_punctuation("\"Bon dia.\""));
        assert!(!ends_with_terminal_punctuation("Bon dia,"));
        assert!(!ends_with_terminal_punctuation("Bon dia"));
    }

    #[test]
    fn test_bad_final_word() {
        assert!(ends_with_bad_final_word("Vam anar cap a la"));
        assert!(ends_with_bad_final_word("Els nens han"));
        assert!(!ends_with_bad_final_word("Vam anar cap a casa"));
        // attached terminal punctuation means a deliberate ending
        assert!(!ends_with_bad_final_word("Vam anar cap a la."));
        assert!(!ends_with_bad_final_word("Els nens han!"));
    }

    #[test]
    fn test_repeated_words() {
        assert!(has_adjacent_repeated_word("Canta la la cançó."));
        assert!(has_adjacent_repeated_word("Va dir que Que vindria."));
        assert!(!has_adjacent_repeated_word("La lactància és important."));
        assert!(!has_adjacent_repeated_word("Bon dia a tothom."));
    }

    #[test]
    fn test_name_detection() {
        let surnames: HashSet<String> = ["Gines".to_string()].into_iter().collect();
        assert!(is_name("Raul Gines parla bé.", &surnames));
        // short sentence-initial first word is not treated as a given name
        assert!(!is_name("P Gines parla bé.", &surnames));
        assert!(!is_name("Raul Vives parla bé.", &surnames));
        // only the first capitalized pair is examined
        assert!(!is_name("Joan Vives saluda Pere Gines avui.", &surnames));
    }

    #[test]
    fn test_strip_parentheticals() {
        assert_eq!(
            strip_parentheticals("El resultat (vegeu la taula 3) és clar."),
            "El resultat és clar."
        );
        assert_eq!(strip_parentheticals("Sense parèntesis."), "Sense parèntesis.");
    }

    #[test]
    fn test_forbidden_characters() {
        assert!(has_forbidden_characters("Escriu-me a nom@lloc.cat"));
        assert!(has_forbidden_characters("El web www.exemple.cat diu"));
        assert!(has_forbidden_characters("Els punts són:"));
        assert!(has_forbidden_characters("Primer - segon - tercer"));
        assert!(!has_forbidden_characters("Bon dia, Maria."));
    }

    #[test]
    fn test_time_expressions() {
        assert!(has_time_expression("Arribarem a les 10:30 en punt."));
        assert!(has_time_expression("Arribarem a les 10.30 en punt."));
        assert!(!has_time_expression("L'any 1.305 va ser dur."));
        assert!(!has_time_expression("Arribarem aviat."));
    }

    #[test]
    fn test_token_count_bounds() {
        assert!(!has_proper_token_count("Bon dia Maria"));
        assert!(has_proper_token_count("Bon dia a tothom."));
        let long = vec!["paraula"; 19].join(" ");
        assert!(!has_proper_token_count(&long));
        let ok = vec!["paraula"; 18].join(" ");
        assert!(has_proper_token_count(&ok));
    }
}
