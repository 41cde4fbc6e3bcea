//! Tokenizer module - Splits text into maximal word/separator runs
//!
//! A token is a maximal contiguous slice of the input that is either entirely
//! separator characters or entirely non-separator characters. Tokens are
//! produced left-to-right; concatenated, they reconstruct the input exactly.
//!
//! Usage:
//! ```rust
//! use wordtally::core::tokenizer::{words, SeparatorSet};
//!
//! let seps = SeparatorSet::standard();
//! let found: Vec<&str> = words("the cat sat.", seps).collect();
//! assert_eq!(found, vec!["the", "cat", "sat"]);
//! ```

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Characters treated as word delimiters.
pub const STANDARD_SEPARATORS: [char; 5] = [' ', ',', '.', '-', '!'];

// Lazy-initialized default separator set (built once on first use)
static STANDARD_SET: Lazy<SeparatorSet> = Lazy::new(|| SeparatorSet::new(STANDARD_SEPARATORS));

/// A fixed set of delimiter characters, immutable for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a separator set from any character collection
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// The built-in separator set: space, comma, period, hyphen, exclamation mark
    pub fn standard() -> &'static SeparatorSet {
        &STANDARD_SET
    }

    /// Check whether a character is a separator
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// The classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-separator characters; the unit being counted
    Word,
    /// A run of separator characters; discarded downstream
    Separator,
}

/// A maximal homogeneous run of characters, borrowed from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Byte length of the token; always > 0
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Return the maximal word or separator run starting at `offset`.
///
/// The character at `offset` decides the class: a separator first character
/// extends the run while subsequent characters are separators; a non-separator
/// first character extends while they are not. The run stops at the end of the
/// text or at the first character of the other class, so a length-1 token is
/// valid when the run cannot extend.
///
/// `offset` is a byte offset and must lie on a `char` boundary. Returns `None`
/// when `offset` is at or past the end of the text.
pub fn next_token<'a>(
    text: &'a str,
    offset: usize,
    separators: &SeparatorSet,
) -> Option<Token<'a>> {
    let rest = text.get(offset..)?;
    let first = rest.chars().next()?;
    let starts_separator = separators.contains(first);

    let end = rest
        .char_indices()
        .find(|(_, c)| separators.contains(*c) != starts_separator)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    let kind = if starts_separator {
        TokenKind::Separator
    } else {
        TokenKind::Word
    };

    Some(Token {
        text: &rest[..end],
        kind,
    })
}

/// Lazy iterator over all tokens of a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    offset: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = next_token(self.text, self.offset, self.separators)?;
        self.offset += token.len();
        Some(token)
    }
}

/// Tokenize the full text, starting at offset 0
pub fn tokenize<'a>(text: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens {
        text,
        offset: 0,
        separators,
    }
}

/// Iterate only the word tokens of a text, in order
pub fn words<'a>(
    text: &'a str,
    separators: &'a SeparatorSet,
) -> impl Iterator<Item = &'a str> + 'a {
    tokenize(text, separators)
        .filter(Token::is_word)
        .map(|t| t.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token_word_run() {
        let seps = SeparatorSet::standard();
        let token = next_token("hello world", 0, seps).unwrap();
        assert_eq!(token.text, "hello");
        assert_eq!(token.kind, TokenKind::Word);
    }

    #[test]
    fn test_next_token_separator_run() {
        let seps = SeparatorSet::standard();
        let token = next_token(", -- !world", 0, seps).unwrap();
        assert_eq!(token.text, ", -- !");
        assert_eq!(token.kind, TokenKind::Separator);
    }

    #[test]
    fn test_next_token_at_offset() {
        let seps = SeparatorSet::standard();
        let token = next_token("hello world", 6, seps).unwrap();
        assert_eq!(token.text, "world");
        assert_eq!(token.kind, TokenKind::Word);
    }

    #[test]
    fn test_next_token_length_one() {
        let seps = SeparatorSet::standard();
        // Run cannot extend: next character is of the other class
        let token = next_token("a b", 0, seps).unwrap();
        assert_eq!(token.text, "a");

        // Run cannot extend: end of text
        let token = next_token("ab x", 3, seps).unwrap();
        assert_eq!(token.text, "x");
    }

    #[test]
    fn test_next_token_past_end() {
        let seps = SeparatorSet::standard();
        assert!(next_token("abc", 3, seps).is_none());
        assert!(next_token("abc", 100, seps).is_none());
        assert!(next_token("", 0, seps).is_none());
    }

    #[test]
    fn test_tokenize_round_trip() {
        let seps = SeparatorSet::standard();
        let inputs = [
            "the cat sat on the mat.",
            "Hi! Hi!",
            "--!!,, . ",
            "a",
            " leading and trailing ",
            "héllo, wörld!",
            "no separators here?not_ours",
        ];

        for input in inputs {
            let joined: String = tokenize(input, seps).map(|t| t.text).collect();
            assert_eq!(joined, input, "round trip failed for {:?}", input);
        }
    }

    #[test]
    fn test_tokens_are_homogeneous_and_maximal() {
        let seps = SeparatorSet::standard();
        let tokens: Vec<Token> = tokenize("one, two!! three-four", seps).collect();

        for token in &tokens {
            assert!(!token.text.is_empty());
            let all_separators = token.text.chars().all(|c| seps.contains(c));
            let no_separators = token.text.chars().all(|c| !seps.contains(c));
            match token.kind {
                TokenKind::Separator => assert!(all_separators),
                TokenKind::Word => assert!(no_separators),
            }
        }

        // Maximality: adjacent tokens always alternate class
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn test_words_filter() {
        let seps = SeparatorSet::standard();
        let found: Vec<&str> = words("the cat sat on the mat.", seps).collect();
        assert_eq!(found, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_words_empty_text() {
        let seps = SeparatorSet::standard();
        assert_eq!(words("", seps).count(), 0);
    }

    #[test]
    fn test_words_all_separators() {
        let seps = SeparatorSet::standard();
        assert_eq!(words(" ,.-! !-., ", seps).count(), 0);
    }

    #[test]
    fn test_words_multibyte_characters() {
        let seps = SeparatorSet::standard();
        let found: Vec<&str> = words("héllo, wörld!", seps).collect();
        assert_eq!(found, vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_standard_separator_set() {
        let seps = SeparatorSet::standard();
        assert!(seps.contains(' '));
        assert!(seps.contains(','));
        assert!(seps.contains('.'));
        assert!(seps.contains('-'));
        assert!(seps.contains('!'));
        assert!(!seps.contains('?'));
        assert!(!seps.contains('a'));
    }

    #[test]
    fn test_custom_separator_set() {
        let seps = SeparatorSet::new([' ', '.']);
        let found: Vec<&str> = words("the cat-sat, on. the mat", &seps).collect();
        assert_eq!(found, vec!["the", "cat-sat,", "on", "the", "mat"]);
    }

    #[test]
    fn test_tokenizer_is_lazy() {
        let seps = SeparatorSet::standard();
        let mut tokens = tokenize("one two", seps);
        assert_eq!(tokens.next().map(|t| t.text), Some("one"));
        assert_eq!(tokens.next().map(|t| t.text), Some(" "));
        assert_eq!(tokens.next().map(|t| t.text), Some("two"));
        assert_eq!(tokens.next(), None);
        // Exhausted iterator stays exhausted
        assert_eq!(tokens.next(), None);
    }
}
