//! Tokenization and coarse part-of-speech tagging collaborator.
//!
//! The pipeline only needs two things from a tagger: the token sequence of a
//! sentence and whether each token is a VERB/AUX or something else. Real
//! deployments can plug a morphological tagger behind the `PosTagger` trait;
//! the built-in `HeuristicTagger` reproduces the reference tokenization
//! (punctuation isolated, clitic apostrophes kept attached) and recognizes
//! verbs from a lexicon of auxiliary and frequent forms plus infinitive
//! endings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Coarse grammatical category; the pipeline only distinguishes VERB/AUX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Verb,
    Aux,
    Other,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: Pos) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(self.pos, Pos::Verb | Pos::Aux)
    }
}

/// External tagger interface: sentence in, ordered token list out.
pub trait PosTagger {
    fn tag(&self, line: &str) -> Vec<Token>;
}

// Tokenizer rules. Ordering matters: punctuation is first spaced out, then
// clitic apostrophes are reattached to their host letter.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^A-Za-zÀ-ÿ0-9.,·\-])").unwrap());
static APOSTROPHE_AFTER_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([sdmtlnSDMTLN]) '").unwrap());
static APOSTROPHE_BEFORE_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"' ([smtlnSMTLN])").unwrap());
static DOT_COMMA_AFTER_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^0-9])([.,])").unwrap());
static DOT_COMMA_AFTER_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9])([.,])([^0-9]|$)").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Split a sentence into surface tokens: words (with attached clitic
/// apostrophes), numbers and punctuation marks.
pub fn tokenize(line: &str) -> Vec<String> {
    let spaced = NON_WORD.replace_all(line, " ${1} ");
    let spaced = APOSTROPHE_AFTER_HOST.replace_all(&spaced, "${1}' ");
    let spaced = APOSTROPHE_BEFORE_HOST.replace_all(&spaced, "'${1}");
    let spaced = DOT_COMMA_AFTER_LETTER.replace_all(&spaced, "${1} ${2} ");
    let spaced = DOT_COMMA_AFTER_DIGIT.replace_all(&spaced, "${1} ${2} ${3} ");
    let collapsed = SPACE_RUN.replace_all(&spaced, " ");
    collapsed
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Forms of ser/estar/haver/anar that the reference tagger labels AUX.
const AUX_FORMS: &[&str] = &[
    "és", "era", "eren", "ets", "sóc", "som", "sou", "són", "serà", "seran", "seria", "sigui",
    "siguin", "estat", "està", "estan", "estava", "estaven", "estic", "estem", "esteu", "ha",
    "han", "he", "hem", "heu", "has", "havia", "havien", "hauria", "haurien", "haurà", "hagi",
    "va", "van", "vaig", "vas", "vam", "vau",
];

/// Frequent finite verb forms; kept small on purpose, this is a stand-in for
/// a real morphological tagger.
const VERB_FORMS: &[&str] = &[
    "fa", "fan", "fem", "feia", "feien", "farà", "té", "tenen", "tenim", "tenia", "tenien",
    "tingui", "pot", "poden", "podem", "podia", "podien", "podrà", "vol", "volen", "volia",
    "diu", "diuen", "deia", "dic", "parla", "parlen", "parlava", "parlo", "canta", "canten",
    "cantava", "agrada", "agraden", "agradava", "sembla", "semblava", "porta", "porten",
    "troba", "troben", "treballa", "treballen", "viu", "viuen", "vivia", "escriu", "escriuen",
    "llegeix", "llegeixen", "menja", "mengen", "beu", "beuen", "corre", "corren", "juga",
    "juguen", "balla", "ballen", "mira", "miren", "mirava", "pensa", "pensen", "creu", "creuen",
    "sap", "saben", "sabia", "ve", "vénen", "venia", "surt", "surten", "entra", "entren",
    "arriba", "arriben", "comença", "comencen", "acaba", "acaben", "dóna", "donen", "deixa",
    "deixen", "queda", "queden", "passa", "passen", "sent", "senten", "obre", "obren", "tanca",
    "tanquen", "puja", "pugen", "baixa", "baixen", "torna", "tornen", "truca", "truquen",
    "espera", "esperen", "coneixem", "coneixen", "coneix",
];

/// Lexicon-and-suffix tagger used when no external tagger is wired in.
pub struct HeuristicTagger {
    aux_forms: HashSet<&'static str>,
    verb_forms: HashSet<&'static str>,
}

impl HeuristicTagger {
    pub fn new() -> Self {
        Self {
            aux_forms: AUX_FORMS.iter().copied().collect(),
            verb_forms: VERB_FORMS.iter().copied().collect(),
        }
    }

    fn classify(&self, token: &str) -> Pos {
        let lower = token.to_lowercase();
        if self.aux_forms.contains(lower.as_str()) {
            return Pos::Aux;
        }
        if self.verb_forms.contains(lower.as_str()) {
            return Pos::Verb;
        }
        // infinitives: parlar, venir, escriure
        let is_word = lower.chars().all(char::is_alphabetic);
        if is_word
            && lower.chars().count() >= 5
            && (lower.ends_with("ar") || lower.ends_with("ir") || lower.ends_with("ure"))
        {
            return Pos::Verb;
        }
        Pos::Other
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, line: &str) -> Vec<Token> {
        tokenize(line)
            .into_iter()
            .map(|text| {
                let pos = self.classify(&text);
                Token { text, pos }
            })
            .collect()
    }
}
