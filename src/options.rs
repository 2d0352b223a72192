/// Rule toggles for a filtering run.
///
/// Every toggle defaults to off; the pipeline applies the corresponding gate
/// only when the toggle is set.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Reject sentences containing any decimal digit instead of transcribing.
    pub numbers: bool,
    /// Require at least one VERB/AUX token.
    pub verb: bool,
    /// Require terminal punctuation before normalization.
    pub punctuation: bool,
    /// Require a capitalized first letter.
    pub capitals: bool,
    /// Reject sentences with a detected proper name matching the surname list.
    pub proper_nouns: bool,
}

impl FilterOptions {
    /// Header lines describing the selected options, written at the top of the
    /// statistics file and echoed to the console.
    pub fn selected_lines(&self, file_stem: &str) -> Vec<String> {
        let mut lines = vec![
            format!("* File: {file_stem}\n"),
            "* Opcions seleccionades:".to_string(),
        ];
        if self.punctuation {
            lines.push("- Només frases amb marques de finals".to_string());
        }
        if self.numbers {
            lines.push("- S'eliminen les frases amb xifres".to_string());
        }
        if self.verb {
            lines.push("- Només frases amb verbs".to_string());
        }
        if self.capitals {
            lines.push("- Només frases que comencen amb majúscula".to_string());
        }
        if self.proper_nouns {
            lines.push("- Exclou frases amb possibles noms".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_lines_with_all_options() {
        let options = FilterOptions {
            numbers: true,
            verb: true,
            punctuation: true,
            capitals: true,
            proper_nouns: true,
        };
        let lines = options.selected_lines("test_file");
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("test_file"));
        assert!(lines.contains(&"- Només frases amb verbs".to_string()));
        assert!(lines.contains(&"- Exclou frases amb possibles noms".to_string()));
    }

    #[test]
    fn test_selected_lines_with_some_options() {
        let options = FilterOptions {
            numbers: true,
            verb: true,
            ..Default::default()
        };
        let lines = options.selected_lines("test_file");
        assert_eq!(lines.len(), 4);
        assert!(!lines.contains(&"- Només frases amb marques de finals".to_string()));
        assert!(!lines.contains(&"- Només frases que comencen amb majúscula".to_string()));
    }
}
