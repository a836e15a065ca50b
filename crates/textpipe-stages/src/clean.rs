//! Cleanup transformations: punctuation, compound words, negations,
//! stop words.

use std::collections::BTreeSet;

use anyhow::Result;
use textpipe_core::{Stage, StageArgs, Value};

use crate::convert::{expect_sentences, expect_word_lists};
use crate::stopwords::{ENGLISH_STOPWORDS, NEGATION_STOPWORDS, NEGATIVE_AUXILIARIES};

/// Remove ASCII punctuation from each sentence, except characters
/// listed in `keep`.
pub fn strip_punctuation(sentences: &[String], keep: &str) -> Vec<String> {
    sentences
        .iter()
        .map(|sentence| {
            sentence
                .chars()
                .filter(|ch| !ch.is_ascii_punctuation() || keep.contains(*ch))
                .collect()
        })
        .collect()
}

/// Break words of the form `word1<symbol>word2` into their parts,
/// dropping empty fragments.
pub fn break_compound_words(word_lists: &[Vec<String>], symbol: &str) -> Vec<Vec<String>> {
    word_lists
        .iter()
        .map(|words| {
            let mut broken = Vec::with_capacity(words.len());
            for word in words {
                if word.contains(symbol) {
                    broken.extend(
                        word.split(symbol)
                            .filter(|part| !part.is_empty())
                            .map(String::from),
                    );
                } else {
                    broken.push(word.clone());
                }
            }
            broken
        })
        .collect()
}

/// Replace contracted negative auxiliary forms with a bare "not".
pub fn normalize_negations(word_lists: &[Vec<String>]) -> Vec<Vec<String>> {
    word_lists
        .iter()
        .map(|words| {
            words
                .iter()
                .map(|word| {
                    if NEGATIVE_AUXILIARIES.contains(&word.as_str()) {
                        "not".to_string()
                    } else {
                        word.clone()
                    }
                })
                .collect()
        })
        .collect()
}

/// Remove English stop words from each word list.
///
/// With `keep_negations`, the negation-bearing subset
/// ([`NEGATION_STOPWORDS`]) stays in the text, so a later
/// sentiment-sensitive consumer still sees "not", "no", "against", ...
pub fn remove_stopwords(word_lists: &[Vec<String>], keep_negations: bool) -> Vec<Vec<String>> {
    let mut stopwords: BTreeSet<&str> = ENGLISH_STOPWORDS.iter().copied().collect();
    if keep_negations {
        for word in NEGATION_STOPWORDS {
            stopwords.remove(word);
        }
    }
    word_lists
        .iter()
        .map(|words| {
            words
                .iter()
                .filter(|word| !stopwords.contains(word.as_str()))
                .cloned()
                .collect()
        })
        .collect()
}

/// Stage: list of sentences -> list of sentences without punctuation.
///
/// Reads the string arg `keep` (punctuation to preserve, default none).
pub fn strip_punctuation_stage() -> Stage {
    Stage::new(
        "strip_punctuation",
        |value, args: &StageArgs| -> Result<Value> {
            let sentences = expect_sentences(&value)?;
            let keep = args.str_opt("keep")?.unwrap_or("");
            Ok(Value::from(strip_punctuation(&sentences, keep)))
        },
    )
}

/// Stage: list of word lists -> list of word lists with compounds split.
///
/// Reads the string arg `compound_symbol` (default `-`).
pub fn break_compound_words_stage() -> Stage {
    Stage::new(
        "break_compound_words",
        |value, args: &StageArgs| -> Result<Value> {
            let word_lists = expect_word_lists(&value)?;
            let symbol = args.str_opt("compound_symbol")?.unwrap_or("-");
            Ok(Value::from(break_compound_words(&word_lists, symbol)))
        },
    )
}

/// Stage: list of word lists -> list of word lists with negations
/// normalized to "not".
pub fn normalize_negations_stage() -> Stage {
    Stage::from_fn("normalize_negations", |value| {
        let word_lists = expect_word_lists(&value)?;
        Ok(Value::from(normalize_negations(&word_lists)))
    })
}

/// Stage: list of word lists -> list of word lists without stop words.
///
/// Reads the boolean arg `keep_negations` (default true).
pub fn remove_stopwords_stage() -> Stage {
    Stage::new(
        "remove_stopwords",
        |value, args: &StageArgs| -> Result<Value> {
            let word_lists = expect_word_lists(&value)?;
            let keep_negations = args.bool_opt("keep_negations")?.unwrap_or(true);
            Ok(Value::from(remove_stopwords(&word_lists, keep_negations)))
        },
    )
}
