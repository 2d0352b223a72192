//! The sentence admissibility pipeline. One candidate goes in, either an
//! accepted normalized sentence or a bucket rejection comes out; the gate
//! order is fixed and observable through the per-bucket output files.
//!
//! Two kinds of gates exist. Terminal gates stop processing immediately.
//! Soft gates record the sentence in their bucket and set an exclusion flag
//! but let the remaining gates run, so one sentence can appear in several
//! soft buckets.

pub mod cosmetics;
pub mod gates;
pub mod lexical;

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::numerals::{NumeralTranscriber, TranscribeError};
use crate::options::FilterOptions;
use crate::report::{Bucket, CaseStudy, FilterReport};
use crate::speller::SpellChecker;
use crate::tagger::PosTagger;

/// Everything a pipeline run depends on, passed in explicitly.
pub struct FilterContext<'a> {
    pub options: &'a FilterOptions,
    pub tagger: &'a dyn PosTagger,
    pub speller: &'a dyn SpellChecker,
    pub transcriber: &'a dyn NumeralTranscriber,
    pub surnames: &'a HashSet<String>,
    pub exclusion_words: &'a HashSet<String>,
}

pub struct FilterPipeline<'a> {
    ctx: FilterContext<'a>,
    report: FilterReport,
}

impl<'a> FilterPipeline<'a> {
    pub fn new(ctx: FilterContext<'a>) -> Self {
        Self {
            ctx,
            report: FilterReport::new(),
        }
    }

    pub fn report(&self) -> &FilterReport {
        &self.report
    }

    pub fn into_report(self) -> FilterReport {
        self.report
    }

    /// Run one candidate sentence through every gate.
    pub fn process(&mut self, candidate: &str) {
        self.report.total_candidates += 1;
        let original = candidate.to_string();

        if !gates::is_line_long_enough(candidate) {
            self.report.reject(Bucket::ImproperLength, original);
            return;
        }
        let mut line = gates::strip_leading_junk(candidate);
        if !gates::is_line_long_enough(&line) {
            self.report.reject(Bucket::ImproperLength, original);
            return;
        }

        let mut excluded = false;

        if self.ctx.options.capitals && gates::starts_with_lowercase(&line) {
            self.report.reject(Bucket::LowercaseStart, original.clone());
            excluded = true;
        }
        if self.ctx.options.punctuation && !gates::ends_with_terminal_punctuation(&line) {
            self.report.reject(Bucket::PossibleBreak, original.clone());
            excluded = true;
        }
        if gates::has_adjacent_repeated_word(&line) {
            self.report.reject(Bucket::RepeatedWords, original);
            return;
        }
        if self.ctx.options.proper_nouns && gates::is_name(&line, self.ctx.surnames) {
            self.report.reject(Bucket::Names, original.clone());
            excluded = true;
        }

        line = gates::strip_parentheticals(&line);

        if gates::has_forbidden_characters(&line) {
            self.report.reject(Bucket::Characters, original);
            return;
        }
        if gates::has_time_expression(&line) {
            self.report.reject(Bucket::Hours, original);
            return;
        }
        if self.ctx.options.numbers && gates::contains_digit(&line) {
            self.report.reject(Bucket::ContainsDigit, original);
            return;
        }
        if !gates::has_proper_token_count(&line) {
            self.report.reject(Bucket::ImproperLength, original);
            return;
        }
        if gates::ends_with_bad_final_word(&line) {
            self.report.reject(Bucket::PossibleBreak, original);
            return;
        }

        // Token pass: the tag snapshot is taken once; substitutions rewrite
        // the working line but never re-tokenize it.
        let tokens = self.ctx.tagger.tag(&line);
        let tagged_count = tokens.len();
        let mut verb_seen = false;
        let mut proper_nouns = 0usize;

        'tokens: for token in &tokens {
            if token.is_verb() {
                verb_seen = true;
            }
            if let Some(expansion) = lexical::expansion_for(&token.text) {
                line = line.replace(&token.text, expansion);
                continue;
            }
            if token.text.chars().all(char::is_alphabetic) {
                if token.text.chars().count() == 1 {
                    if !lexical::is_valid_single_letter(&token.text) {
                        self.report.spelling_case_studies.push(CaseStudy {
                            token: token.text.clone(),
                            phrase: original.clone(),
                        });
                        self.report.reject(Bucket::Spelling, original.clone());
                        excluded = true;
                        break 'tokens;
                    }
                } else if lexical::is_acronym(&token.text) {
                    self.report.reject(Bucket::Acronyms, original.clone());
                    excluded = true;
                    break 'tokens;
                } else if self.ctx.exclusion_words.contains(&token.text) {
                    self.report.exclusion_case_studies.push(CaseStudy {
                        token: token.text.clone(),
                        phrase: original.clone(),
                    });
                    self.report.reject(Bucket::ExcludedWords, original.clone());
                    excluded = true;
                    break 'tokens;
                } else if !self.ctx.speller.spell(&token.text) {
                    if gates::starts_with_lowercase(&token.text) {
                        if token.text != "ls" {
                            debug!("discarding misspelled token {:?}", token.text);
                            self.report.discarded_tokens.push(token.text.clone());
                            self.report.spelling_case_studies.push(CaseStudy {
                                token: token.text.clone(),
                                phrase: original.clone(),
                            });
                            self.report.reject(Bucket::Spelling, original.clone());
                            excluded = true;
                            break 'tokens;
                        }
                    } else {
                        proper_nouns += 1;
                    }
                }
            } else if token.text.chars().any(|c| c.is_ascii_digit()) {
                let hour = lexical::has_hour_marker(&token.text);
                let target = if hour {
                    let bare = lexical::without_hour_marker(&token.text).to_string();
                    line = line.replace(&token.text, &bare);
                    bare
                } else {
                    token.text.clone()
                };
                let runs: Vec<String> =
                    lexical::digit_runs(&target).into_iter().map(str::to_string).collect();
                for run in runs {
                    let spelled = match run.parse::<i64>() {
                        Ok(n) => self.ctx.transcriber.transcribe(n),
                        Err(_) => Err(TranscribeError::Unparseable(run.clone())),
                    };
                    let words = match spelled {
                        Ok(words) => words,
                        Err(err) => {
                            warn!("numeral transcription failed for {run:?}: {err}");
                            self.report.reject(Bucket::NumeralError, original.clone());
                            excluded = true;
                            break 'tokens;
                        }
                    };
                    let replacement = if hour { format!("{words} hores") } else { words };
                    line = line.replace(&run, &replacement);
                    if !excluded && line.split(' ').count() >= 18 {
                        self.report.reject(Bucket::ImproperLength, original.clone());
                        excluded = true;
                    }
                }
            }
        }

        // The ratio gate runs even when the token loop broke early.
        if 3 * proper_nouns >= tagged_count {
            self.report.reject(Bucket::Ratios, original.clone());
            excluded = true;
        } else if self.ctx.options.verb && !verb_seen && !excluded {
            self.report.reject(Bucket::Verbs, original.clone());
            excluded = true;
        }

        if excluded {
            return;
        }

        if cosmetics::has_interior_period(&line) {
            if line.contains("..") {
                line = cosmetics::collapse_ellipses(&line);
            } else {
                self.report.reject(Bucket::Abbreviations, original);
                return;
            }
        }

        let normalized = cosmetics::normalize(&line);
        self.report.accept(normalized, original);
    }
}
