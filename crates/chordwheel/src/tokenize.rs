//! Token extraction from raw input text.
//!
//! Tokenization is a replaceable boundary: the wheel pipeline only needs an
//! ordered list of tokens, and anything implementing [`Tokenizer`] can
//! provide one. [`SplitTokenizer`] is the reference policy, matching the
//! intuitive "words of the text" reading of free-form input.

/// Splits raw input into an ordered list of tokens.
///
/// Implementations borrow from the input; token order is the order items are
/// added to the graph, so it determines slot order around the wheel.
pub trait Tokenizer {
    /// Returns the tokens of `raw` in reading order.
    fn tokenize<'a>(&self, raw: &'a str) -> Vec<&'a str>;
}

/// The reference tokenizer: splits on every non-alphanumeric character.
///
/// Underscore is not alphanumeric and therefore splits, as does any
/// punctuation or whitespace. Unicode letters and digits count as token
/// characters.
///
/// Consecutive separators produce empty pieces between them; by default
/// those are filtered out, so splitting effectively happens on separator
/// runs. With [`keep_empty`](Self::keep_empty) the empty pieces pass
/// through, and `""` behaves as one more distinct value downstream.
///
/// # Examples
///
/// ```
/// use chordwheel::tokenize::{SplitTokenizer, Tokenizer};
///
/// let tokenizer = SplitTokenizer::new();
/// assert_eq!(
///     tokenizer.tokenize("cat, dog_cat"),
///     vec!["cat", "dog", "cat"],
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitTokenizer {
    keep_empty: bool,
}

impl SplitTokenizer {
    /// Creates the default tokenizer, which filters empty tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty pieces between consecutive separators are kept.
    pub fn keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }
}

impl Tokenizer for SplitTokenizer {
    fn tokenize<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let pieces = raw.split(|c: char| !c.is_alphanumeric());
        if self.keep_empty {
            pieces.collect()
        } else {
            pieces.filter(|piece| !piece.is_empty()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        let tokens = SplitTokenizer::new().tokenize("cat dog cat");
        assert_eq!(tokens, vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_splits_on_punctuation_and_underscore() {
        let tokens = SplitTokenizer::new().tokenize("snake_case, kebab-case!");
        assert_eq!(tokens, vec!["snake", "case", "kebab", "case"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        let tokens = SplitTokenizer::new().tokenize("a,,   b...c");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let tokens = SplitTokenizer::new().tokenize("  cat. ");
        assert_eq!(tokens, vec!["cat"]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = SplitTokenizer::new().tokenize("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_separator_only_input() {
        let tokens = SplitTokenizer::new().tokenize(" ,._- ");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_digits_are_token_characters() {
        let tokens = SplitTokenizer::new().tokenize("abc123 42 x9");
        assert_eq!(tokens, vec!["abc123", "42", "x9"]);
    }

    #[test]
    fn test_unicode_letters_are_token_characters() {
        let tokens = SplitTokenizer::new().tokenize("héllo wörld");
        assert_eq!(tokens, vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_keep_empty_passes_empty_pieces() {
        let tokenizer = SplitTokenizer::new().keep_empty(true);
        assert_eq!(tokenizer.tokenize("a,,b"), vec!["a", "", "b"]);
        assert_eq!(tokenizer.tokenize(",a"), vec!["", "a"]);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let tokenizer: Box<dyn Tokenizer> = Box::new(SplitTokenizer::new());
        assert_eq!(tokenizer.tokenize("one two"), vec!["one", "two"]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn raw_text_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9 ,._!-]{0,64}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Default tokenization should never yield an empty token.
    fn check_no_empty_tokens(raw: String) -> Result<(), TestCaseError> {
        for token in SplitTokenizer::new().tokenize(&raw) {
            prop_assert!(!token.is_empty());
        }
        Ok(())
    }

    /// Every character of every token should be alphanumeric.
    fn check_tokens_are_alphanumeric(raw: String) -> Result<(), TestCaseError> {
        for token in SplitTokenizer::new().tokenize(&raw) {
            prop_assert!(token.chars().all(char::is_alphanumeric), "token {token:?}");
        }
        Ok(())
    }

    /// Keeping empties and then filtering them should match the default.
    fn check_keep_empty_superset(raw: String) -> Result<(), TestCaseError> {
        let default_tokens = SplitTokenizer::new().tokenize(&raw);
        let kept: Vec<&str> = SplitTokenizer::new()
            .keep_empty(true)
            .tokenize(&raw)
            .into_iter()
            .filter(|token| !token.is_empty())
            .collect();

        prop_assert_eq!(default_tokens, kept);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn no_empty_tokens(raw in raw_text_strategy()) {
            check_no_empty_tokens(raw)?;
        }

        #[test]
        fn tokens_are_alphanumeric(raw in raw_text_strategy()) {
            check_tokens_are_alphanumeric(raw)?;
        }

        #[test]
        fn keep_empty_superset(raw in raw_text_strategy()) {
            check_keep_empty_superset(raw)?;
        }
    }
}
