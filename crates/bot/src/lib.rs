//! Chat front-end: command parsing, reply formatting, and the Telegram
//! long-polling loop that feeds incoming messages to the catalogue.

pub mod command;
pub mod dispatcher;
pub mod reply;
pub mod runner;
pub mod signals;
pub mod transport;

pub use command::Command;
pub use dispatcher::Dispatcher;
pub use reply::{InlineButton, Reply};
pub use runner::Runner;
pub use transport::{ChatTransport, IncomingMessage, TransportError};
