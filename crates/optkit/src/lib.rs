//! Imperative shell for optkit
//!
//! Re-exports everything from [`optkit_core`] and adds the helpers that need a
//! runtime or the network:
//!
//! - [`resolve`]: [`resolve_to_option`], awaiting a fallible future
//! - [`fetch`]: [`fetch_with_option`], an HTTP request whose every failure is `None`
//! - [`transport`]: the [`Transport`] seam, implemented for `reqwest::Client`

pub mod fetch;
pub mod resolve;
pub mod transport;

pub use optkit_core::*;

pub use fetch::{fetch_with_option, fetch_with_option_default};
pub use resolve::resolve_to_option;
pub use transport::Transport;
