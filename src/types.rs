use std::fmt;

/// Steam-style numeric player id. Id 0 stands for the server console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub const CONSOLE: PlayerId = PlayerId(0);

    pub fn is_console(&self) -> bool {
        *self == Self::CONSOLE
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a message is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// Every connected player
    Broadcast,
    /// One player
    Player(PlayerId),
    /// Server console, only logged
    Console,
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Broadcast => write!(f, "everyone"),
            Recipient::Player(id) => write!(f, "player {}", id),
            Recipient::Console => write!(f, "console"),
        }
    }
}

/// Chat channel a chunk is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    Global,
    Say,
}

/// One chunk ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub recipient: Recipient,
    pub mode: ChatMode,
    /// Colour name or hex string, passed through untouched
    pub color: String,
    /// Whether the client should render markup in `text`
    pub rich: bool,
}
