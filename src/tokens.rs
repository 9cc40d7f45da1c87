//! Word extraction and first-occurrence de-duplication.
//!
//! Every function here is pure: it allocates its own working state and keeps
//! tokens in the order they first appear in the input.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::ordered_set::OrderedSet;

/// Delimiters used by [`count_unique_words`].
pub const WORD_DELIMITERS: [char; 5] = [' ', '.', ',', '!', '?'];

/// Returns each distinct token once, in order of first occurrence.
pub fn extract_unique_tokens<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens.into_iter().collect::<OrderedSet>().into_vec()
}

/// Counts distinct words in `text`, ignoring case.
///
/// Words are separated by [`WORD_DELIMITERS`]; empty pieces are skipped.
/// Case is folded one character at a time, with no context-sensitive rules
/// such as Greek final sigma.
pub fn count_unique_words(text: &str) -> usize {
    text.split(WORD_DELIMITERS)
        .filter(|word| !word.is_empty())
        .map(|word| word.chars().flat_map(char::to_lowercase).collect::<String>())
        .collect::<OrderedSet>()
        .len()
}

/// Lazily yields the words of `lines` that have not been seen in any earlier
/// position. Lines are split on single spaces, so runs of spaces produce
/// empty words.
pub fn extract_unique_tokens_lazy<I>(lines: I) -> UniqueWordStream<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    UniqueWordStream::new(lines.into_iter())
}

/// Splits every line on `separator` and keeps the trimmed tokens that no
/// previous line produced. Each returned row holds the survivors of one line.
pub fn extract_unique_tokens_per_line<I>(lines: I, separator: char) -> Vec<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut previous = OrderedSet::new();
    let mut rows = Vec::new();

    for line in lines {
        let mut row = OrderedSet::new();
        for piece in line.as_ref().split(separator) {
            if piece.is_empty() {
                continue;
            }
            let word = piece.trim();
            if !previous.contains(word) {
                row.insert(word);
            }
        }

        let row = row.into_vec();
        previous.extend(&row);
        rows.push(row);
    }

    rows
}

/// Splits `text` on `separator` and returns the distinct trimmed segments.
///
/// CRLF pairs are folded into a single space and the text is trimmed before
/// scanning. Empty segments between two separators are kept; a separator at
/// the very end does not open a new segment.
pub fn extract_unique_tokens_from_text(text: &str, separator: char) -> Vec<String> {
    let normalized = text.replace("\r\n", " ");
    let text = normalized.trim();

    let mut segments = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match text[start..].find(separator) {
            Some(offset) => {
                segments.push(text[start..start + offset].trim());
                start += offset + separator.len_utf8();
            }
            None => {
                segments.push(text[start..].trim());
                break;
            }
        }
    }

    extract_unique_tokens(segments)
}

/// Collects the distinct non-blank words in a character stream delimited by
/// `separator`.
pub fn extract_unique_tokens_from_chars<I>(characters: I, separator: char) -> Vec<String>
where
    I: IntoIterator<Item = char>,
{
    let mut words = OrderedSet::new();
    let mut buffer = String::new();

    for character in characters {
        if character == separator {
            push_word(&mut words, &buffer);
            buffer.clear();
        } else {
            buffer.push(character);
        }
    }
    push_word(&mut words, &buffer);

    words.into_vec()
}

fn push_word(words: &mut OrderedSet, buffer: &str) {
    let word = buffer.trim();
    if !word.is_empty() {
        words.insert(word);
    }
}

/// Pull-driven iterator behind [`extract_unique_tokens_lazy`].
///
/// A new line is read from the source only once every word of the current
/// line has been inspected. After the source runs dry the stream stays
/// exhausted.
#[derive(Debug)]
pub struct UniqueWordStream<I> {
    lines: I,
    line: Option<String>,
    cursor: usize,
    seen: HashSet<String>,
    lines_consumed: usize,
    exhausted: bool,
}

impl<I> UniqueWordStream<I> {
    fn new(lines: I) -> Self {
        Self {
            lines,
            line: None,
            cursor: 0,
            seen: HashSet::new(),
            lines_consumed: 0,
            exhausted: false,
        }
    }

    /// Number of lines pulled from the source so far.
    pub fn lines_consumed(&self) -> usize {
        self.lines_consumed
    }

    /// `true` once the source has run dry; no more words will be produced.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I> Iterator for UniqueWordStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.exhausted {
            let line = match self.line.as_deref() {
                Some(line) => line,
                None => {
                    match self.lines.next() {
                        Some(next) => {
                            self.line = Some(next.as_ref().to_string());
                            self.cursor = 0;
                            self.lines_consumed += 1;
                        }
                        None => self.exhausted = true,
                    }
                    continue;
                }
            };

            // cursor == len is still valid: it addresses the trailing empty word
            if self.cursor > line.len() {
                self.line = None;
                continue;
            }

            let rest = &line[self.cursor..];
            let end = rest.find(' ').unwrap_or(rest.len());
            let word = &rest[..end];
            self.cursor += end + 1;

            if !self.seen.contains(word) {
                let word = word.to_string();
                self.seen.insert(word.clone());
                return Some(word);
            }
        }
        None
    }
}

impl<I> FusedIterator for UniqueWordStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
