// Library interface for integration tests

pub mod config;
pub mod dispatch;
pub mod error;
pub mod plain_wrap;
pub mod rich_tag;
pub mod rich_wrap;
pub mod types;

pub use error::WrapError;
pub use plain_wrap::wrap_message;
pub use rich_wrap::{rich_wrap_message, strip_rich_text, try_rich_wrap_message};
