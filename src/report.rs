//! Run accounting: rejection buckets, accepted/duplicate lists, case studies
//! and the serializable run summary.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Terminal rejection categories. Each bucket maps to one output list file
/// and one line in the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ImproperLength,
    Characters,
    Acronyms,
    ExcludedWords,
    Spelling,
    Ratios,
    Hours,
    RepeatedWords,
    Names,
    NumeralError,
    PossibleBreak,
    Abbreviations,
    LowercaseStart,
    ContainsDigit,
    Verbs,
}

impl Bucket {
    /// Statistics-report order. Also the order buckets appear in the run
    /// summary JSON.
    pub const ALL: [Bucket; 15] = [
        Bucket::ImproperLength,
        Bucket::Characters,
        Bucket::Acronyms,
        Bucket::ExcludedWords,
        Bucket::Spelling,
        Bucket::Ratios,
        Bucket::Hours,
        Bucket::RepeatedWords,
        Bucket::Names,
        Bucket::NumeralError,
        Bucket::PossibleBreak,
        Bucket::Abbreviations,
        Bucket::LowercaseStart,
        Bucket::ContainsDigit,
        Bucket::Verbs,
    ];

    /// File the bucket's sentences are written to.
    pub fn file_name(self) -> &'static str {
        match self {
            Bucket::ImproperLength => "excloses_mida.txt",
            Bucket::Characters => "excloses_caracter.txt",
            Bucket::Acronyms => "excloses_sigles.txt",
            Bucket::ExcludedWords => "excloses_paraula.txt",
            Bucket::Spelling => "excloses_ortografia.txt",
            Bucket::Ratios => "excloses_proporcio.txt",
            Bucket::Hours => "excloses_hores.txt",
            Bucket::RepeatedWords => "excloses_paraules_repetides.txt",
            Bucket::Names => "excloses_nom.txt",
            Bucket::NumeralError => "error_num.txt",
            Bucket::PossibleBreak => "possibles_trencades.txt",
            Bucket::Abbreviations => "excloses_abreviatura.txt",
            Bucket::LowercaseStart => "excloses_minuscula.txt",
            Bucket::ContainsDigit => "excloses_num.txt",
            Bucket::Verbs => "excloses_verb.txt",
        }
    }

    /// Catalan label used in the statistics report.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::ImproperLength => "excloses mida",
            Bucket::Characters => "excloses caracter",
            Bucket::Acronyms => "excloses sigles",
            Bucket::ExcludedWords => "excloses paraules",
            Bucket::Spelling => "excloses ortografia",
            Bucket::Ratios => "excloses proporció",
            Bucket::Hours => "excloses hores",
            Bucket::RepeatedWords => "excloses paraules repetides",
            Bucket::Names => "excloses noms",
            Bucket::NumeralError => "error num",
            Bucket::PossibleBreak => "possibles trencades",
            Bucket::Abbreviations => "abreviatures",
            Bucket::LowercaseStart => "comença amb min",
            Bucket::ContainsDigit => "conté una xifra",
            Bucket::Verbs => "excloses verb",
        }
    }

    /// Identifier used in the run summary JSON.
    pub fn key(self) -> &'static str {
        match self {
            Bucket::ImproperLength => "improper_length",
            Bucket::Characters => "characters",
            Bucket::Acronyms => "acronyms",
            Bucket::ExcludedWords => "excluded_words",
            Bucket::Spelling => "spelling",
            Bucket::Ratios => "ratios",
            Bucket::Hours => "hours",
            Bucket::RepeatedWords => "repeated_words",
            Bucket::Names => "names",
            Bucket::NumeralError => "numeral_error",
            Bucket::PossibleBreak => "possible_break",
            Bucket::Abbreviations => "abbreviations",
            Bucket::LowercaseStart => "lowercase_start",
            Bucket::ContainsDigit => "contains_digit",
            Bucket::Verbs => "verbs",
        }
    }
}

/// A token that caused a rejection, paired with the sentence it came from.
#[derive(Debug, Clone)]
pub struct CaseStudy {
    pub token: String,
    pub phrase: String,
}

/// Everything one run produces besides the output files themselves.
#[derive(Debug, Default)]
pub struct FilterReport {
    buckets: HashMap<Bucket, Vec<String>>,
    pub accepted: Vec<String>,
    pub accepted_originals: Vec<String>,
    pub duplicates: Vec<String>,
    pub exclusion_case_studies: Vec<CaseStudy>,
    pub spelling_case_studies: Vec<CaseStudy>,
    pub discarded_tokens: Vec<String>,
    pub total_lines: u64,
    pub total_candidates: u64,
    seen: HashSet<String>,
}

impl FilterReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a rejected sentence under its bucket.
    pub fn reject(&mut self, bucket: Bucket, sentence: String) {
        self.buckets.entry(bucket).or_default().push(sentence);
    }

    /// Record an accepted sentence, routing repeats to the duplicate list.
    /// First occurrence wins; `original` is the pre-substitution text.
    pub fn accept(&mut self, sentence: String, original: String) {
        if self.seen.contains(&sentence) {
            self.duplicates.push(sentence);
        } else {
            self.seen.insert(sentence.clone());
            self.accepted.push(sentence);
            self.accepted_originals.push(original);
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bucket_len(&self, bucket: Bucket) -> usize {
        self.buckets.get(&bucket).map_or(0, Vec::len)
    }

    /// Statistics report body, one Catalan label per counter, with each
    /// rejection bucket also expressed as a percentage of the candidates.
    pub fn statistics_lines(&self) -> Vec<String> {
        let total = self.total_candidates;
        let mut lines = vec![
            format!("* línies inici: {}", self.total_lines),
            format!("* frases inici: {}", total),
        ];
        for bucket in [
            Bucket::ImproperLength,
            Bucket::Characters,
            Bucket::Acronyms,
            Bucket::ExcludedWords,
            Bucket::Spelling,
            Bucket::Ratios,
            Bucket::Hours,
            Bucket::RepeatedWords,
            Bucket::Names,
        ] {
            lines.push(counter_line(bucket.label(), self.bucket_len(bucket), total));
        }
        lines.push(counter_line(
            "seleccionades repetides",
            self.duplicates.len(),
            total,
        ));
        lines.push(counter_line("seleccionades", self.accepted.len(), total));
        for bucket in [
            Bucket::Abbreviations,
            Bucket::PossibleBreak,
            Bucket::LowercaseStart,
            Bucket::ContainsDigit,
            Bucket::Verbs,
            Bucket::NumeralError,
        ] {
            lines.push(counter_line(bucket.label(), self.bucket_len(bucket), total));
        }
        lines
    }
}

fn counter_line(label: &str, count: usize, total: u64) -> String {
    format!("* {}: {} {}%", label, count, percent(count, total))
}

/// Percentage with two decimals, rendered without trailing zeros beyond the
/// first ("50.0", "33.33").
fn percent(count: usize, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let raw = count as f64 * 100.0 / total as f64;
    let rounded = (raw * 100.0).round() / 100.0;
    format!("{rounded:?}")
}

#[derive(Debug, Serialize)]
pub struct BucketCount {
    pub bucket: &'static str,
    pub count: usize,
}

/// Machine-readable run summary, written alongside the text reports.
#[derive(Debug, Serialize)]
pub struct RunStats {
    pub file: String,
    pub options: Vec<String>,
    pub lines: u64,
    pub candidates: u64,
    pub accepted: usize,
    pub duplicates: usize,
    pub buckets: Vec<BucketCount>,
    pub elapsed_ms: u64,
}

impl RunStats {
    pub fn from_report(
        report: &FilterReport,
        file: String,
        options: Vec<String>,
        elapsed_ms: u64,
    ) -> Self {
        let buckets = Bucket::ALL
            .iter()
            .map(|&bucket| BucketCount {
                bucket: bucket.key(),
                count: report.bucket_len(bucket),
            })
            .collect();
        Self {
            file,
            options,
            lines: report.total_lines,
            candidates: report.total_candidates,
            accepted: report.accepted.len(),
            duplicates: report.duplicates.len(),
            buckets,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_routes_duplicates() {
        let mut report = FilterReport::new();
        report.accept("Bona tarda.".to_string(), "bona tarda".to_string());
        report.accept("Bona tarda.".to_string(), "bona tarda".to_string());
        report.accept("Bon dia.".to_string(), "bon dia".to_string());
        assert_eq!(report.accepted, vec!["Bona tarda.", "Bon dia."]);
        assert_eq!(report.duplicates, vec!["Bona tarda."]);
        assert_eq!(report.accepted_originals.len(), 2);
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(1, 2), "50.0");
        assert_eq!(percent(1, 3), "33.33");
        assert_eq!(percent(0, 4), "0.0");
        assert_eq!(percent(0, 0), "0.0");
    }

    #[test]
    fn test_statistics_lines_order_and_labels() {
        let mut report = FilterReport::new();
        report.total_lines = 10;
        report.total_candidates = 4;
        report.reject(Bucket::Hours, "Són les 10:30.".to_string());
        report.accept("Bon dia.".to_string(), "bon dia".to_string());
        let lines = report.statistics_lines();
        assert_eq!(lines[0], "* línies inici: 10");
        assert_eq!(lines[1], "* frases inici: 4");
        assert!(lines.iter().any(|l| l == "* excloses hores: 1 25.0%"));
        assert!(lines.iter().any(|l| l == "* seleccionades: 1 25.0%"));
        // every bucket label shows up even when empty
        assert!(lines.iter().any(|l| l.starts_with("* excloses verb: 0")));
    }
}
