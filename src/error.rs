use thiserror::Error;

/// Malformed rich text, reported by the strict wrapper.
///
/// Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// A `<` with no `>` anywhere after it.
    #[error("unterminated tag at position {position}")]
    UnterminatedTag { position: usize },

    /// `<>` or a tag whose name is empty.
    #[error("empty tag at position {position}")]
    EmptyTag { position: usize },

    /// A closing tag with no matching open tag.
    #[error("unmatched closing tag {tag} at position {position}")]
    UnmatchedClose { tag: String, position: usize },

    /// A `\\` as the last character, with nothing to escape.
    #[error("dangling escape at position {position}")]
    DanglingEscape { position: usize },

    /// Input ended with this tag still open.
    #[error("tag left open at end of input, expected {tag}")]
    UnclosedTag { tag: String },
}
