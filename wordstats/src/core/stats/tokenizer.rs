// src/core/stats/tokenizer.rs
use std::str::SplitWhitespace;

/// Raw tokens of a document, in document order.
///
/// Any run of whitespace separates two tokens, so no token is ever empty.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        inner: text.split_whitespace(),
    }
}

/// Removes one trailing `.` or `,` from a token.
///
/// Leading and internal punctuation is left alone, as is any other trailing
/// character. Only a single character is removed, so `".."` becomes `"."`.
#[inline]
#[must_use]
pub fn strip_trailing_punctuation(token: &str) -> &str {
    token
        .strip_suffix('.')
        .or_else(|| token.strip_suffix(','))
        .unwrap_or(token)
}

/// Tokens with trailing punctuation removed.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    tokenize(text).map(strip_trailing_punctuation)
}
