//! Name-based stage lookup for building pipelines from configuration.

use anyhow::{Result, bail};
use textpipe_core::{Pipeline, Stage};

use crate::clean;
use crate::tokenize;

/// One registered stage: its name, a short description, and a builder.
#[derive(Clone, Copy)]
pub struct StageInfo {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Stage,
}

impl StageInfo {
    pub fn build(&self) -> Stage {
        (self.build)()
    }
}

/// Ordered registry of the standard text stages.
pub struct StageRegistry {
    entries: Vec<StageInfo>,
}

impl StageRegistry {
    /// Registry holding every stage this crate ships, listed in the
    /// order a typical preprocessing chain applies them.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                StageInfo {
                    name: "sentence_tokens",
                    description: "Split text into sentences on ., ! and ?",
                    build: tokenize::sentence_tokens_stage,
                },
                StageInfo {
                    name: "strip_punctuation",
                    description: "Remove ASCII punctuation from sentences (arg: keep)",
                    build: clean::strip_punctuation_stage,
                },
                StageInfo {
                    name: "word_tokens",
                    description: "Split sentences into words (arg: lowercase)",
                    build: tokenize::word_tokens_stage,
                },
                StageInfo {
                    name: "break_compound_words",
                    description: "Split compound words (arg: compound_symbol)",
                    build: clean::break_compound_words_stage,
                },
                StageInfo {
                    name: "normalize_negations",
                    description: "Rewrite contracted negative auxiliaries to `not`",
                    build: clean::normalize_negations_stage,
                },
                StageInfo {
                    name: "remove_stopwords",
                    description: "Drop English stop words (arg: keep_negations)",
                    build: clean::remove_stopwords_stage,
                },
                StageInfo {
                    name: "detokenize_sentences",
                    description: "Rejoin word lists into sentence strings",
                    build: tokenize::detokenize_sentences_stage,
                },
                StageInfo {
                    name: "join_strings",
                    description: "Join a list of strings into one string",
                    build: tokenize::join_strings_stage,
                },
            ],
        }
    }

    pub fn entries(&self) -> &[StageInfo] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Build a single stage by name.
    pub fn build(&self, name: &str) -> Option<Stage> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(StageInfo::build)
    }

    /// Compose a pipeline from stage names, left to right.
    pub fn build_pipeline<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new();
        for name in names {
            let Some(stage) = self.build(name) else {
                bail!(
                    "unknown stage `{name}`; available stages: {}",
                    self.names().join(", ")
                );
            };
            pipeline = pipeline.then(stage);
        }
        Ok(pipeline)
    }
}

impl Default for StageRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
