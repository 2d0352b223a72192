//! Numeral transcription collaborator: converts an integer to its Catalan
//! cardinal spelling. The pipeline treats this as an external service whose
//! failure is expected and recoverable (the sentence lands in the
//! numeral-error bucket), so errors are values, never panics.

use thiserror::Error;

/// Largest value the built-in transcriber spells out.
const MAX_SUPPORTED: i64 = 999_999_999;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("number out of supported range: {0}")]
    OutOfRange(String),
    #[error("digit run is not a readable number: {0}")]
    Unparseable(String),
}

/// Integer-to-words service consumed by the token-level pass.
pub trait NumeralTranscriber {
    fn transcribe(&self, n: i64) -> Result<String, TranscribeError>;
}

/// Built-in Catalan cardinal speller (0 to 999 999 999).
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalanNumbers;

const UNITS: [&str; 20] = [
    "zero", "un", "dos", "tres", "quatre", "cinc", "sis", "set", "vuit", "nou", "deu", "onze",
    "dotze", "tretze", "catorze", "quinze", "setze", "disset", "divuit", "dinou",
];

const TENS: [&str; 10] = [
    "", "", "vint", "trenta", "quaranta", "cinquanta", "seixanta", "setanta", "vuitanta",
    "noranta",
];

fn under_hundred(n: i64) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }
    let tens = (n / 10) as usize;
    let units = (n % 10) as usize;
    if units == 0 {
        TENS[tens].to_string()
    } else if tens == 2 {
        // the twenties take the historical "vint-i-" joint
        format!("vint-i-{}", UNITS[units])
    } else {
        format!("{}-{}", TENS[tens], UNITS[units])
    }
}

fn under_thousand(n: i64) -> String {
    if n < 100 {
        return under_hundred(n);
    }
    let hundreds = n / 100;
    let rest = n % 100;
    let prefix = if hundreds == 1 {
        "cent".to_string()
    } else {
        format!("{}-cents", UNITS[hundreds as usize])
    };
    if rest == 0 {
        prefix
    } else {
        format!("{prefix} {}", under_hundred(rest))
    }
}

impl NumeralTranscriber for CatalanNumbers {
    fn transcribe(&self, n: i64) -> Result<String, TranscribeError> {
        if !(0..=MAX_SUPPORTED).contains(&n) {
            return Err(TranscribeError::OutOfRange(n.to_string()));
        }
        if n == 0 {
            return Ok("zero".to_string());
        }
        let millions = n / 1_000_000;
        let thousands = (n % 1_000_000) / 1_000;
        let rest = n % 1_000;
        let mut parts = Vec::new();
        if millions == 1 {
            parts.push("un milió".to_string());
        } else if millions > 1 {
            parts.push(format!("{} milions", under_thousand(millions)));
        }
        if thousands == 1 {
            parts.push("mil".to_string());
        } else if thousands > 1 {
            parts.push(format!("{} mil", under_thousand(thousands)));
        }
        if rest > 0 {
            parts.push(under_thousand(rest));
        }
        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(n: i64) -> String {
        CatalanNumbers.transcribe(n).unwrap()
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(spell(0), "zero");
        assert_eq!(spell(1), "un");
        assert_eq!(spell(3), "tres");
        assert_eq!(spell(15), "quinze");
        assert_eq!(spell(18), "divuit");
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(spell(21), "vint-i-un");
        assert_eq!(spell(42), "quaranta-dos");
        assert_eq!(spell(90), "noranta");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell(100), "cent");
        assert_eq!(spell(101), "cent un");
        assert_eq!(spell(345), "tres-cents quaranta-cinc");
    }

    #[test]
    fn test_thousands_and_millions() {
        assert_eq!(spell(1_000), "mil");
        assert_eq!(spell(1_872), "mil vuit-cents setanta-dos");
        assert_eq!(spell(100_000), "cent mil");
        assert_eq!(spell(1_000_000), "un milió");
        assert_eq!(spell(2_500_000), "dos milions cinc-cents mil");
    }

    #[test]
    fn test_out_of_range() {
        assert!(CatalanNumbers.transcribe(-1).is_err());
        assert!(CatalanNumbers.transcribe(1_000_000_000).is_err());
    }
}
