//! Rich-text message wrapping
//!
//! Splits messages containing `<b>`, `<color=...>` style markup so that every
//! chunk is valid markup on its own. Tags still open at a split are closed at
//! the end of the chunk and opened again at the start of the next one.
//!
//! Tokens:
//! - `\x` is an escape: both characters are literal text and never split apart.
//!   A `\` with nothing after it is dropped.
//! - `<...>` is a tag when a `>` comes before the next `<`. A `/` right after
//!   the `<` makes it a closing tag.
//! - Anything else is literal text.

use crate::error::WrapError;
use crate::rich_tag::{TagPair, TagStack};
use std::convert::Infallible;
use std::ops::Range;
use tracing::{debug, trace};

/// Literal characters allowed in one chunk
pub const MAX_CLEAR_LENGTH: usize = 90;

/// Share of [`RATIO_BUDGET`] one chunk may use, markup included
pub const MAX_RATIO: f32 = 0.75;

/// Size of a chat line in characters
pub const RATIO_BUDGET: f32 = 255.0;

#[derive(Debug)]
enum Token {
    Text(Range<usize>),
    Open(TagPair),
    Close(TagPair),
    /// A `<` that does not start a tag, kept as literal text
    Stray(WrapError),
    /// A trailing `\` with nothing to escape, dropped
    Dangling(WrapError),
}

struct Tokenizer<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    /// Index of the `>` closing a tag that starts at `start`, if any
    fn tag_end(&self, start: usize) -> Option<usize> {
        self.chars[start + 1..]
            .iter()
            .position(|&c| c == '<' || c == '>')
            .map(|offset| start + 1 + offset)
            .filter(|&end| self.chars[end] == '>')
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let ch = *self.chars.get(start)?;

        let token = match ch {
            '\\' if start + 1 == self.chars.len() => {
                self.pos = start + 1;
                Token::Dangling(WrapError::DanglingEscape { position: start })
            }
            '\\' => {
                self.pos = start + 2;
                Token::Text(start..self.pos)
            }
            '<' => match self.tag_end(start) {
                Some(end) => {
                    let raw: String = self.chars[start..=end].iter().collect();
                    match TagPair::from_token(&raw) {
                        Some(tag) => {
                            self.pos = end + 1;
                            if self.chars[start + 1] == '/' {
                                Token::Close(tag)
                            } else {
                                Token::Open(tag)
                            }
                        }
                        None => {
                            self.pos = start + 1;
                            Token::Stray(WrapError::EmptyTag { position: start })
                        }
                    }
                }
                None => {
                    self.pos = start + 1;
                    Token::Stray(WrapError::UnterminatedTag { position: start })
                }
            },
            _ => {
                self.pos = start + 1;
                Token::Text(start..self.pos)
            }
        };

        Some((start, token))
    }
}

/// Accumulates chunks while tracking open tags
#[derive(Default)]
struct Chunker {
    chunks: Vec<String>,
    buffer: String,
    /// Characters in `buffer`
    buffer_len: usize,
    /// Literal characters in `buffer`
    clear_len: usize,
    tags: TagStack,
}

impl Chunker {
    fn is_full(&self) -> bool {
        let ratio = (self.buffer_len + self.tags.closing_len()) as f32 / RATIO_BUDGET;
        self.clear_len >= MAX_CLEAR_LENGTH || ratio >= MAX_RATIO
    }

    /// Start a new chunk if the current one is over either limit, or would
    /// go over the literal limit after `incoming` more literal characters.
    ///
    /// A chunk without literal text is never emitted.
    fn split_if_full(&mut self, incoming: usize) {
        if self.clear_len > 0 && (self.is_full() || self.clear_len + incoming > MAX_CLEAR_LENGTH) {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let mut chunk = std::mem::take(&mut self.buffer);
        chunk.push_str(&self.tags.closing_tags());
        trace!(
            "Rich chunk {} ready ({} literal chars, {} open tags)",
            self.chunks.len(),
            self.clear_len,
            self.tags.len()
        );
        self.chunks.push(chunk);

        self.buffer = self.tags.opening_tags();
        self.buffer_len = self.buffer.chars().count();
        self.clear_len = 0;
    }

    fn push_text(&mut self, text: &[char]) {
        self.split_if_full(text.len());
        self.buffer.extend(text);
        self.buffer_len += text.len();
        self.clear_len += text.len();
    }

    fn open(&mut self, tag: TagPair) {
        self.split_if_full(0);
        self.push_markup(tag.open());
        self.tags.push(tag);
    }

    /// Close the newest open tag matching `tag`.
    ///
    /// No split happens before a closing tag; its length is already part of
    /// the ratio while the tag is open.
    fn close(&mut self, tag: &TagPair) -> bool {
        if !self.tags.remove_last(tag) {
            return false;
        }
        self.push_markup(tag.close());
        true
    }

    fn push_markup(&mut self, markup: &str) {
        self.buffer.push_str(markup);
        self.buffer_len += markup.chars().count();
    }

    fn finish(mut self) -> Vec<String> {
        if !self.buffer.is_empty() {
            self.buffer.push_str(&self.tags.closing_tags());
            self.chunks.push(self.buffer);
        }
        self.chunks
    }
}

/// Run the wrapper, handing every markup problem to `on_malformed`.
///
/// When `on_malformed` returns `Ok`, the problem is degraded: stray `<` become
/// text, unmatched closing tags and a trailing lone `\` are dropped, and tags
/// left open are closed.
fn scan<E>(
    text: &str,
    mut on_malformed: impl FnMut(WrapError) -> Result<(), E>,
) -> Result<Vec<String>, E> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunker = Chunker::default();

    for (position, token) in Tokenizer::new(&chars) {
        match token {
            Token::Text(range) => chunker.push_text(&chars[range]),
            Token::Open(tag) => chunker.open(tag),
            Token::Close(tag) => {
                if !chunker.close(&tag) {
                    on_malformed(WrapError::UnmatchedClose {
                        tag: tag.close().to_string(),
                        position,
                    })?;
                }
            }
            Token::Stray(err) => {
                on_malformed(err)?;
                chunker.push_text(&chars[position..=position]);
            }
            Token::Dangling(err) => on_malformed(err)?,
        }
    }

    if let Some(tag) = chunker.tags.last() {
        on_malformed(WrapError::UnclosedTag {
            tag: tag.close().to_string(),
        })?;
    }

    Ok(chunker.finish())
}

/// Split a rich-text message into chunks that each hold balanced markup.
///
/// A chunk ends once it holds [`MAX_CLEAR_LENGTH`] literal characters, or once
/// its length plus the closing text of every open tag reaches [`MAX_RATIO`] of
/// [`RATIO_BUDGET`]. Malformed markup never fails: a `<` that starts no tag is
/// kept as text, a closing tag with no open match or a trailing lone `\` is
/// dropped, and tags still open at the end are closed in the last chunk.
pub fn rich_wrap_message(text: &str) -> Vec<String> {
    let lenient = scan(text, |err| -> Result<(), Infallible> {
        debug!("Degrading malformed rich text: {}", err);
        Ok(())
    });

    match lenient {
        Ok(chunks) => chunks,
        Err(never) => match never {},
    }
}

/// Like [`rich_wrap_message`], but fails on the first markup problem.
pub fn try_rich_wrap_message(text: &str) -> Result<Vec<String>, WrapError> {
    scan(text, Err)
}

/// Literal text of a rich message, as counted by the wrapper.
///
/// Escapes are kept verbatim. Tags and a trailing lone `\` are removed.
pub fn strip_rich_text(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (position, token) in Tokenizer::new(&chars) {
        match token {
            Token::Text(range) => result.extend(&chars[range]),
            Token::Stray(_) => result.push(chars[position]),
            Token::Open(_) | Token::Close(_) | Token::Dangling(_) => {}
        }
    }

    result
}
