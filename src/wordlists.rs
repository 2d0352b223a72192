//! Word-list resources loaded once per run: the surname list used by the
//! proper-name gate and the optional exclusion word list.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the surname list. Entries shorter than 3 characters are dropped at
/// load time; they produce too many false positives in the name gate.
pub fn load_surnames(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read surname list {}", path.display()))?;
    let surnames: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|surname| surname.chars().count() >= 3)
        .map(str::to_string)
        .collect();
    info!("Loaded {} surnames from {}", surnames.len(), path.display());
    Ok(surnames)
}

/// Load the optional list of words that force-exclude a sentence.
pub fn load_exclusion_words(path: Option<&Path>) -> Result<HashSet<String>> {
    let Some(path) = path else {
        return Ok(HashSet::new());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read exclusion word list {}", path.display()))?;
    let words: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();
    info!("Loaded {} exclusion words from {}", words.len(), path.display());
    Ok(words)
}

/// Strip diacritics from the characters that occur in Catalan and Spanish
/// surnames, so "Pérez" matches a plain-ASCII list entry "Perez".
pub fn fold_diacritics(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ä' => 'a',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ò' | 'ó' | 'ô' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            'À' | 'Á' | 'Â' | 'Ä' => 'A',
            'È' | 'É' | 'Ê' | 'Ë' => 'E',
            'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
            'Ò' | 'Ó' | 'Ô' | 'Ö' => 'O',
            'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
            'Ç' => 'C',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_surnames_drops_short_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Gines\nWu\nDel Pino\nPi").unwrap();
        let surnames = load_surnames(file.path()).unwrap();
        assert!(surnames.contains("Gines"));
        assert!(surnames.contains("Del Pino"));
        assert!(!surnames.contains("Wu"));
        assert!(!surnames.contains("Pi"));
    }

    #[test]
    fn test_load_exclusion_words_without_path() {
        let words = load_exclusion_words(None).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("Pérez"), "Perez");
        assert_eq!(fold_diacritics("Muñoz"), "Munoz");
        assert_eq!(fold_diacritics("Castellà"), "Castella");
        assert_eq!(fold_diacritics("Gines"), "Gines");
    }
}
