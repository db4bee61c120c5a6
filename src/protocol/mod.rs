//! Line-oriented JSON protocol over a shared session.
//!
//! Each input line is one [`Command`]; each output line is an [`Outbound`]
//! event tagged with who should receive it. A real transport fans `All`
//! events out to every connection and sends `Requester` events back to the
//! sender only.

mod command;
mod server;

pub use command::{Audience, Command, Event, Outbound};
pub use server::SessionServer;

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Command processed, with events to deliver
    Ok(Vec<Outbound>),
    /// Stop reading input
    Quit,
    /// Line was not a recognised command
    Unknown(String),
}

/// Trait for session protocols
pub trait Protocol {
    /// Process a single command line and return the result
    fn process_command(&mut self, line: &str) -> CommandResult;

    /// Get the protocol name (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Run the protocol's main loop (blocking)
    fn run(&mut self);
}
