//! String-level text-processing stages for row-wise pipelines.
//!
//! Every transformation here exists in two forms: a plain typed function
//! working on strings and string lists, and a named [`Stage`] wrapper
//! over pipeline [`Value`]s suitable for composition. The stage wrappers
//! read their knobs (compound symbol, punctuation to keep, ...) from the
//! [`StageArgs`] threaded through a pipeline run.
//!
//! The usual preprocessing chain reads left to right:
//!
//! `sentence_tokens -> strip_punctuation -> word_tokens ->
//! break_compound_words -> normalize_negations -> remove_stopwords ->
//! detokenize_sentences -> join_strings`
//!
//! [`Stage`]: textpipe_core::Stage
//! [`Value`]: textpipe_core::Value
//! [`StageArgs`]: textpipe_core::StageArgs

pub mod clean;
mod convert;
pub mod registry;
pub mod stopwords;
pub mod tokenize;

pub use clean::{
    break_compound_words, break_compound_words_stage, normalize_negations,
    normalize_negations_stage, remove_stopwords, remove_stopwords_stage, strip_punctuation,
    strip_punctuation_stage,
};
pub use registry::{StageInfo, StageRegistry};
pub use stopwords::{ENGLISH_STOPWORDS, NEGATION_STOPWORDS, NEGATIVE_AUXILIARIES};
pub use tokenize::{
    detokenize_sentences, detokenize_sentences_stage, join_strings, join_strings_stage,
    sentence_tokens, sentence_tokens_stage, word_tokens, word_tokens_stage,
};
