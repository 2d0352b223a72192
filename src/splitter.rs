//! Sentence splitting collaborator. Turns one raw corpus line into an
//! ordered list of candidate sentences; the admissibility pipeline never
//! looks back at the raw line.

use std::collections::HashSet;

/// External segmentation interface: raw line in, candidate sentences out.
pub trait Splitter {
    fn split(&self, line: &str) -> Vec<String>;
}

/// Catalan title and reference abbreviations whose trailing period must not
/// end a sentence.
const TITLE_ABBREVIATIONS: &[&str] = &[
    "sr.", "sra.", "dr.", "dra.", "st.", "sta.", "núm.", "num.", "pàg.", "pag.", "p.", "av.",
    "pl.", "vol.", "ed.", "veg.", "etc.", "c.", "jr.", "hble.", "hable.", "pral.",
];

/// Characters that may open a sentence after a boundary.
const OPENERS: &[char] = &['«', '“', '"', '‘', '\'', '—', '-'];

/// Characters absorbed into the finishing sentence when they directly follow
/// the terminator (closing quotes).
const CLOSERS: &[char] = &['"', '\'', '”', '»', '’'];

/// Rule-based splitter: a sentence ends at `. ! ?` (plus an attached closing
/// quote) when followed by whitespace and an uppercase letter or an opening
/// mark, unless the period belongs to a known abbreviation.
pub struct RuleSplitter {
    title_abbreviations: HashSet<&'static str>,
}

impl RuleSplitter {
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    fn ends_with_title_abbreviation(&self, text: &str) -> bool {
        let Some(last_word) = text.split_whitespace().last() else {
            return false;
        };
        let clean = last_word
            .trim_matches(|c: char| CLOSERS.contains(&c) || matches!(c, '‘' | '“' | '«'))
            .to_lowercase();
        self.title_abbreviations.contains(clean.as_str())
    }
}

impl Default for RuleSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for RuleSplitter {
    fn split(&self, line: &str) -> Vec<String> {
        let text = line.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut iter = text.char_indices().peekable();
        while let Some((i, ch)) = iter.next() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }
            let mut end = i + ch.len_utf8();
            if let Some(&(j, quote)) = iter.peek() {
                if CLOSERS.contains(&quote) {
                    iter.next();
                    end = j + quote.len_utf8();
                }
            }
            let rest = &text[end..];
            let after = rest.trim_start();
            if after.is_empty() || after.len() == rest.len() {
                // end of line, or no whitespace after the terminator
                continue;
            }
            let opens_next = after
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase() || OPENERS.contains(&c));
            if !opens_next {
                continue;
            }
            if ch == '.' && self.ends_with_title_abbreviation(&text[start..end]) {
                continue;
            }
            sentences.push(text[start..end].trim().to_string());
            start = end + (rest.len() - after.len());
        }
        if start < text.len() {
            let tail = text[start..].trim();
            if !tail.is_empty() {
                sentences.push(tail.to_string());
            }
        }
        sentences
    }
}

/// Split every raw line and strip speaker/heading prefixes: only the text
/// after the last `:` of each produced phrase becomes a candidate.
pub fn collect_candidates(lines: &[String], splitter: &dyn Splitter) -> Vec<String> {
    let mut candidates = Vec::new();
    for line in lines {
        for phrase in splitter.split(line) {
            let candidate = phrase.rsplit(':').next().unwrap_or(phrase.as_str());
            candidates.push(candidate.to_string());
        }
    }
    candidates
}
