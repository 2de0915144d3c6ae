//! Token occurrence counting.

use ahash::AHashMap;

use crate::analysis::token::TokenStream;

/// Tally the occurrences of each distinct token in a single linear pass.
///
/// Only presence and count matter; first-occurrence order is not retained.
pub fn count_occurrences(tokens: TokenStream) -> AHashMap<String, u64> {
    let mut counts = AHashMap::new();
    for token in tokens {
        *counts.entry(token.text).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(texts: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(*t, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_count_occurrences() {
        let counts = count_occurrences(stream(&["cat", "cat", "dog"]));
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
        assert_eq!(counts.get("bird"), None);
    }

    #[test]
    fn test_empty_stream() {
        let counts = count_occurrences(stream(&[]));
        assert!(counts.is_empty());
    }
}
