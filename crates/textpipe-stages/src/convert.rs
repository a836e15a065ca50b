//! Shape checks at the stage boundary.
//!
//! Stages declare the value shape they expect and error on anything
//! else; null threads through as the empty shape, so an empty input row
//! flows through a whole chain without tripping it.

use anyhow::{Result, bail};
use textpipe_core::Value;

/// Expect raw text. Null reads as the empty string.
pub(crate) fn expect_text(value: &Value) -> Result<&str> {
    match value {
        Value::Str(text) => Ok(text),
        Value::Null => Ok(""),
        other => bail!("expected text, found {}", other.kind()),
    }
}

/// Expect a flat list of strings. Null reads as an empty list.
pub(crate) fn expect_sentences(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::List(items) => {
            let mut sentences = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Str(text) => sentences.push(text.clone()),
                    other => bail!("expected a list of strings, found {}", other.kind()),
                }
            }
            Ok(sentences)
        }
        other => bail!("expected a list of strings, found {}", other.kind()),
    }
}

/// Expect a list of word lists. Null reads as an empty list.
pub(crate) fn expect_word_lists(value: &Value) -> Result<Vec<Vec<String>>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::List(items) => {
            let mut lists = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::List(_) => lists.push(expect_sentences(item)?),
                    other => bail!("expected a list of word lists, found {}", other.kind()),
                }
            }
            Ok(lists)
        }
        other => bail!("expected a list of word lists, found {}", other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reads_as_empty_shapes() {
        assert_eq!(expect_text(&Value::Null).unwrap(), "");
        assert!(expect_sentences(&Value::Null).unwrap().is_empty());
        assert!(expect_word_lists(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert!(expect_text(&Value::Int(3)).is_err());
        assert!(expect_sentences(&Value::from("not a list")).is_err());
        assert!(expect_word_lists(&Value::from(vec!["flat"])).is_err());
    }
}
