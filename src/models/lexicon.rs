//! Word lists driving the rule-based scorer.
//!
//! A [`Lexicon`] holds three sets of lowercase words: positive, negative and
//! negation. It is built once and never mutated afterwards; share it through an
//! `Arc` rather than cloning the sets.

use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "awesome", "amazing", "love", "happy", "joy", "fantastic",
    "wonderful", "beautiful", "brilliant", "enjoy", "glad", "positive", "nice", "perfect",
    "better", "best", "win", "success", "successful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry", "poor", "disappointing",
    "negative", "ugly", "worst", "worse", "fail", "failure", "problem", "issue", "difficult",
    "unhappy", "annoying",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "cannot", "can't", "won't", "wouldn't",
    "shouldn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't", "nor",
    "neither",
];

/// Polarity tag of a single lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Positive,
    Negative,
    Negation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negation: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary word lists. Entries are lowercased.
    ///
    /// The three lists are expected to be disjoint; when a word appears in more
    /// than one, lookups resolve it as negation first, then positive.
    pub fn new<I, S>(positive: I, negative: I, negation: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fn collect<I, S>(words: I) -> HashSet<String>
        where
            I: IntoIterator<Item = S>,
            S: AsRef<str>,
        {
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }

        Self {
            positive: collect(positive),
            negative: collect(negative),
            negation: collect(negation),
        }
    }

    /// The built-in English word lists.
    pub fn english() -> Self {
        Self::new(
            POSITIVE_WORDS.iter().copied(),
            NEGATIVE_WORDS.iter().copied(),
            NEGATION_WORDS.iter().copied(),
        )
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negation.contains(word)
    }

    /// Classify an already-normalized token.
    pub fn classify(&self, word: &str) -> Option<WordClass> {
        if self.is_negation(word) {
            Some(WordClass::Negation)
        } else if self.is_positive(word) {
            Some(WordClass::Positive)
        } else if self.is_negative(word) {
            Some(WordClass::Negative)
        } else {
            None
        }
    }

    /// Total number of entries across the three sets.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.negation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
