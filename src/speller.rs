//! Spelling lookup collaborator. The real deployments point this at a
//! hunspell-style dictionary; the pipeline only needs the boolean answer.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Dictionary service consumed by the token-level pass.
pub trait SpellChecker {
    /// Returns true when the word is correctly spelled.
    fn spell(&self, word: &str) -> bool;
}

/// Speller used when no dictionary is configured: every word passes, which
/// leaves the spelling gate inert.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl SpellChecker for AcceptAll {
    fn spell(&self, _word: &str) -> bool {
        true
    }
}

/// Word-list speller. Accepts newline-delimited word lists, including
/// hunspell `.dic` files: a leading entry-count line is skipped and affix
/// flags after `/` are stripped.
#[derive(Debug, Default)]
pub struct DictionarySpeller {
    words: HashSet<String>,
}

impl DictionarySpeller {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let mut lines = content.lines().peekable();
        if lines.peek().is_some_and(|first| first.trim().parse::<usize>().is_ok()) {
            lines.next();
        }
        let words: HashSet<String> = lines
            .map(|line| line.split('/').next().unwrap_or(line).trim())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        info!("Loaded {} dictionary words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl SpellChecker for DictionarySpeller {
    fn spell(&self, word: &str) -> bool {
        // sentence-initial capitalization of a known lowercase word is fine
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }
}
