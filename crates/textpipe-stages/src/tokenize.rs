//! Sentence and word tokenization, and their inverses.

use anyhow::Result;
use textpipe_core::{Stage, StageArgs, Value};

use crate::convert::{expect_sentences, expect_text, expect_word_lists};

/// Split text into trimmed, non-empty sentences on `.`, `!` and `?`.
pub fn sentence_tokens(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(String::from)
        .collect()
}

/// Split each sentence into whitespace-delimited words, optionally
/// lowercased.
pub fn word_tokens(sentences: &[String], lowercase: bool) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|sentence| {
            sentence
                .split_whitespace()
                .map(|word| {
                    if lowercase {
                        word.to_lowercase()
                    } else {
                        word.to_string()
                    }
                })
                .collect()
        })
        .collect()
}

/// Rejoin each word list into a single sentence string.
pub fn detokenize_sentences(word_lists: &[Vec<String>]) -> Vec<String> {
    word_lists.iter().map(|words| words.join(" ")).collect()
}

/// Join a list of strings into one space-separated string.
pub fn join_strings(strings: &[String]) -> String {
    strings.join(" ")
}

/// Stage: text -> list of sentences.
pub fn sentence_tokens_stage() -> Stage {
    Stage::from_fn("sentence_tokens", |value| {
        let text = expect_text(&value)?;
        Ok(Value::from(sentence_tokens(text)))
    })
}

/// Stage: list of sentences -> list of word lists.
///
/// Reads the boolean arg `lowercase` (default true).
pub fn word_tokens_stage() -> Stage {
    Stage::new("word_tokens", |value, args: &StageArgs| -> Result<Value> {
        let sentences = expect_sentences(&value)?;
        let lowercase = args.bool_opt("lowercase")?.unwrap_or(true);
        Ok(Value::from(word_tokens(&sentences, lowercase)))
    })
}

/// Stage: list of word lists -> list of sentence strings.
pub fn detokenize_sentences_stage() -> Stage {
    Stage::from_fn("detokenize_sentences", |value| {
        let word_lists = expect_word_lists(&value)?;
        Ok(Value::from(detokenize_sentences(&word_lists)))
    })
}

/// Stage: list of strings -> single string.
pub fn join_strings_stage() -> Stage {
    Stage::from_fn("join_strings", |value| {
        let strings = expect_sentences(&value)?;
        Ok(Value::from(join_strings(&strings)))
    })
}
