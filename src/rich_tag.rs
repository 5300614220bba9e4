//! Rich-text tag model
//!
//! A tag like `<color=red>` is kept as its literal opening text plus the
//! closing text derived from it (`</color>`). Tags are compared by closing
//! text only, so `<color=red>` and `<color=blue>` are closed by the same
//! `</color>`.

/// One tag occurrence: the opening text and its derived closing text
#[derive(Debug, Clone, Eq)]
pub struct TagPair {
    open: String,
    close: String,
}

impl TagPair {
    /// Build a pair from a full tag token such as `<b>` or `<size=20>`.
    ///
    /// Returns `None` when the token has no name (`<>`, `</>`).
    pub fn from_token(token: &str) -> Option<Self> {
        let name = strip_delimiters(token);
        let close_name = close_name(name);
        if close_name.is_empty() {
            return None;
        }

        Some(Self {
            open: format!("<{}>", name.replace('/', "")),
            close: format!("</{}>", close_name),
        })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

impl PartialEq for TagPair {
    fn eq(&self, other: &Self) -> bool {
        self.close == other.close
    }
}

/// Remove `<` and `>` from both ends of a tag token
fn strip_delimiters(token: &str) -> &str {
    token.trim_matches(|c: char| c == '<' || c == '>')
}

/// Tag name without its `=value` part or any `/`
fn close_name(name: &str) -> String {
    let base = name.split_once('=').map_or(name, |(base, _)| base);
    base.replace('/', "")
}

/// Stack of currently open tags, outermost first
#[derive(Debug, Clone, Default)]
pub struct TagStack {
    tags: Vec<TagPair>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: TagPair) {
        self.tags.push(tag);
    }

    /// Remove the most recently pushed tag with the same closing text.
    ///
    /// Returns false when no open tag matches.
    pub fn remove_last(&mut self, tag: &TagPair) -> bool {
        match self.tags.iter().rposition(|open| open == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Most recently opened tag
    pub fn last(&self) -> Option<&TagPair> {
        self.tags.last()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Opening text of every open tag, outermost first
    pub fn opening_tags(&self) -> String {
        self.tags.iter().map(TagPair::open).collect()
    }

    /// Closing text of every open tag, innermost first
    pub fn closing_tags(&self) -> String {
        self.tags.iter().rev().map(TagPair::close).collect()
    }

    /// Total character length of all closing texts
    pub fn closing_len(&self) -> usize {
        self.tags.iter().map(|tag| tag.close.chars().count()).sum()
    }
}
