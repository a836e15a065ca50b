//! Word lists for stop-word removal and negation handling.

/// English stop words, in the customary tokenizer casing (lowercase).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now",
];

/// Stop words that carry negation or intensity and are worth keeping
/// when the downstream consumer is sentiment-sensitive.
pub const NEGATION_STOPWORDS: &[&str] = &[
    "no", "nor", "not", "only", "up", "down", "further", "too", "against",
];

/// Contracted negative auxiliary forms rewritten to a bare "not".
pub const NEGATIVE_AUXILIARIES: &[&str] = &[
    "don't", "didn", "didn't", "doesn", "doesn't", "hadn", "n't", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't", "aren", "aren't", "couldn", "couldn't",
];
