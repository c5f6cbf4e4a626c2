//! Word tokenizer shared by training and inference of [`TextClassifier`](crate::TextClassifier).

use std::collections::BTreeMap;

/// Frequency table from tokens to their number of occurrences.
///
/// Sorted by token so that scores accumulated over it do not depend on hashing.
pub type BagOfWords = BTreeMap<String, usize>;

/// Checks whether a character belongs to a word.
///
/// Only ASCII letters and digits are word characters; everything else separates words.
#[inline(always)]
pub const fn is_word_char(c: char) -> bool {
    matches!(c as u32, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A)
}

/// Iterator over the lowercased words of a text.
///
/// Created by [`tokenize`]. The iterator borrows the text, so it can be cloned or recreated to
/// scan the same input again.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = match rest.find(is_word_char) {
            Some(start) => start,
            None => {
                self.pos = self.text.len();
                return None;
            }
        };
        let tail = &rest[start..];
        let len = tail
            .find(|c: char| !is_word_char(c))
            .unwrap_or_else(|| tail.len());
        self.pos += start + len;
        Some(tail[..len].to_ascii_lowercase())
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Splits a text into lowercased words.
///
/// Consecutive ASCII letters and digits form a word. Any other character ends the current word
/// and is dropped.
///
/// # Arguments
///
/// * `text` - A raw string.
///
/// # Returns
///
/// A lazy iterator over the words.
///
/// # Examples
///
/// ```
/// use minilearn::tokenizer::tokenize;
///
/// let words: Vec<_> = tokenize("Claim your PRIZE, now!").collect();
/// assert_eq!(vec!["claim", "your", "prize", "now"], words);
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Counts the words of a text.
///
/// # Arguments
///
/// * `text` - A raw string.
///
/// # Returns
///
/// A table from each distinct word to its number of occurrences. Empty if `text` contains no
/// word characters.
pub fn count_tokens(text: &str) -> BagOfWords {
    let mut bag = BagOfWords::new();
    for token in tokenize(text) {
        *bag.entry(token).or_insert(0) += 1;
    }
    bag
}
