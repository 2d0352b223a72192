//! garbell: a sentence-corpus filter for speech-corpus construction.
//!
//! The library reads a raw Catalan text corpus, splits it into candidate
//! sentences and runs each candidate through an ordered admissibility
//! pipeline (length, casing, punctuation, character set, repeated words,
//! proper names, tokenization, spelling, numeral transcription, verb
//! presence, proper-noun ratio, cosmetic normalization). Accepted sentences
//! come out normalized and deduplicated; every rejection lands in a named
//! bucket with its own output file.
//!
//! External collaborators (sentence splitting, POS tagging, spelling lookup,
//! numeral transcription) are traits with built-in rule-based defaults, so a
//! deployment can swap in heavier linguistic machinery without touching the
//! pipeline.

pub mod numerals;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod speller;
pub mod splitter;
pub mod tagger;
pub mod wordlists;

pub use numerals::{CatalanNumbers, NumeralTranscriber, TranscribeError};
pub use options::FilterOptions;
pub use pipeline::{FilterContext, FilterPipeline};
pub use report::{Bucket, CaseStudy, FilterReport, RunStats};
pub use speller::{AcceptAll, DictionarySpeller, SpellChecker};
pub use splitter::{collect_candidates, RuleSplitter, Splitter};
pub use tagger::{HeuristicTagger, Pos, PosTagger, Token};
