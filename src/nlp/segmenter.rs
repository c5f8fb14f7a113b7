//! Sentence segmentation
//!
//! English text is split on Unicode (UAX #29) sentence boundaries, then a
//! boundary that follows an abbreviation is re-joined when the next word shows
//! the sentence goes on. Titles (`Dr.`, `Mrs.`) always continue; other
//! abbreviations (`etc.`, `U.S.`) only continue into a lowercase word or a
//! number. Korean text is split on the whitespace that follows `.`, `!` or `?`.
//!
//! Segmentation is lazy: [`SentenceSegmenter::split`] returns an iterator that
//! trims each candidate and skips empty ones. Calling it again on the same text
//! yields the same sentences.

use crate::types::{Language, Sentence};
use once_cell::sync::Lazy;
use regex::Regex;
use std::iter::Peekable;
use unicode_segmentation::UnicodeSegmentation;

/// Whitespace run that follows sentence-final punctuation
static KOREAN_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid boundary pattern"));

/// Lowercased titles (without the final period); a name always follows them
const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "lt", "sgt",
    "capt", "gov", "sen", "rep",
];

/// Lowercased abbreviations (without the final period) that may also end a sentence
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "vs", "etc", "e.g", "i.e", "cf", "inc", "ltd", "co", "corp", "dept", "univ", "fig", "vol",
    "approx", "est", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "u.s", "u.k", "u.n", "a.m", "p.m",
];

/// Splits a document into trimmed, indexed sentences
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    language: Language,
}

impl SentenceSegmenter {
    /// Create a segmenter for a supported language
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The language this segmenter splits
    pub fn language(&self) -> Language {
        self.language
    }

    /// Lazily split `text` into sentences in document order
    pub fn split<'a>(&self, text: &'a str) -> Sentences<'a> {
        let raw: Box<dyn Iterator<Item = (usize, &'a str)> + 'a> = match self.language {
            Language::English => Box::new(AbbreviationJoin {
                text,
                bounds: text.split_sentence_bound_indices().peekable(),
            }),
            Language::Korean => Box::new(PunctuationSplit {
                text,
                cursor: 0,
                matches: KOREAN_BOUNDARY.find_iter(text),
                finished: false,
            }),
        };

        Sentences {
            raw,
            next_index: 0,
        }
    }

    /// Split `text` and collect the sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.split(text).collect()
    }
}

/// Iterator over the sentences of one document
pub struct Sentences<'a> {
    raw: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    next_index: usize,
}

impl Iterator for Sentences<'_> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        loop {
            let (offset, chunk) = self.raw.next()?;
            let trimmed = chunk.trim();
            if trimmed.is_empty() {
                continue;
            }

            let start = offset + (chunk.len() - chunk.trim_start().len());
            let sentence = Sentence::new(trimmed, start, start + trimmed.len(), self.next_index);
            self.next_index += 1;
            return Some(sentence);
        }
    }
}

/// UAX #29 sentence chunks, merged across abbreviation boundaries
struct AbbreviationJoin<'a, I: Iterator> {
    text: &'a str,
    bounds: Peekable<I>,
}

impl<'a, I> Iterator for AbbreviationJoin<'a, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (start, first) = self.bounds.next()?;
        let mut end = start + first.len();

        while let Some(&(offset, chunk)) = self.bounds.peek() {
            if !continues_into(&self.text[start..end], chunk) {
                break;
            }
            end = offset + chunk.len();
            self.bounds.next();
        }

        Some((start, &self.text[start..end]))
    }
}

/// Kind of abbreviation a chunk ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Abbreviation {
    /// `Dr.`, `Mrs.`, ...
    Title,
    /// A single capital letter; `after_lowercase` when the word before it is
    /// lowercase, as in `vitamin C.`
    Initial { after_lowercase: bool },
    /// `etc.`, `U.S.`, `Jan.`, ...
    Other,
}

/// The abbreviation or initial a chunk ends with, if any
fn trailing_abbreviation(chunk: &str) -> Option<Abbreviation> {
    let mut words = chunk.split_whitespace().rev();
    let stem = words.next()?.strip_suffix('.')?;
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_uppercase() {
            return None;
        }
        let after_lowercase = words
            .next()
            .and_then(|word| word.chars().find(|c| c.is_alphabetic()))
            .is_some_and(char::is_lowercase);
        return Some(Abbreviation::Initial { after_lowercase });
    }

    let stem = stem.to_lowercase();
    if TITLE_ABBREVIATIONS.contains(&stem.as_str()) {
        Some(Abbreviation::Title)
    } else if ENGLISH_ABBREVIATIONS.contains(&stem.as_str()) {
        Some(Abbreviation::Other)
    } else {
        None
    }
}

/// Whether the sentence ending in `chunk` carries on into `next`
fn continues_into(chunk: &str, next: &str) -> bool {
    let Some(abbreviation) = trailing_abbreviation(chunk) else {
        return false;
    };
    let Some(first) = next.trim_start().chars().next() else {
        return false;
    };
    let lowercase_or_digit = first.is_lowercase() || first.is_numeric();

    match abbreviation {
        Abbreviation::Title => true,
        Abbreviation::Initial { after_lowercase } => {
            lowercase_or_digit || (!after_lowercase && first.is_uppercase())
        }
        Abbreviation::Other => lowercase_or_digit,
    }
}

/// Chunks ending at each punctuation mark that is followed by whitespace
struct PunctuationSplit<'a> {
    text: &'a str,
    cursor: usize,
    matches: regex::Matches<'static, 'a>,
    finished: bool,
}

impl<'a> Iterator for PunctuationSplit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(m) = self.matches.next() {
            // The punctuation mark is a single ASCII byte and stays on the left.
            let start = self.cursor;
            let end = m.start() + 1;
            self.cursor = m.end();
            return Some((start, &self.text[start..end]));
        }

        if self.finished {
            return None;
        }
        self.finished = true;
        Some((self.cursor, &self.text[self.cursor..]))
    }
}
