//! Application core for the Lumina book library.
//!
//! The [`modules::library`] module owns all client-side state; the binary in
//! `crates/cli` wires it to the remote service and a terminal front-end.

pub mod modules;
pub mod utils;

pub use modules::library::{LibraryController, Notifier, RemovalGate};
