//! Core library for optkit
//!
//! This crate implements the **Functional Core** of optkit, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`optkit_core`** (this crate): the containers and every helper that
//!   needs no I/O
//! - **`optkit`**: the async helpers, the HTTP transport and the CLI (the
//!   Imperative Shell)
//!
//! # Module Organization
//!
//! - [`maybe`]: the optional-value container, construction, mapping, unwrapping
//! - [`outcome`]: the success/failure container
//! - [`guard`]: wrappers that turn panics and `Err` returns into `None`
//! - [`truthy`]: the loose boolean coercion behind [`to_optional`]
//! - [`http`]: request header/method shaping and response interpretation
//!
//! # Error policies
//!
//! Two policies coexist. The [`guard`] helpers (and the shell's
//! `resolve_to_option` / `fetch_with_option`) swallow every failure into
//! [`Maybe::None`]. [`unwrap`] and [`unwrap_expect`] instead fail loudly with
//! an [`Error`].
//!
//! # Example Usage
//!
//! ```rust
//! use optkit_core::{make_some, map_option, none, unwrap_or, Maybe};
//!
//! let doubled = map_option(make_some(21), |v| v * 2);
//! assert_eq!(unwrap_or(doubled, 0), 42);
//!
//! let absent: Maybe<i32> = none();
//! assert_eq!(unwrap_or(absent, 7), 7);
//! ```

pub mod error;
pub mod guard;
pub mod http;
pub mod maybe;
pub mod outcome;
pub mod truthy;

pub use error::Error;
pub use guard::{
    catch_to_option, optional_defined, to_optional, try_catch_to_option, try_to_optional,
};
pub use http::{HttpRequest, RawResponse};
pub use maybe::{make_some, map_option, none, unwrap, unwrap_expect, unwrap_or, Maybe};
pub use outcome::{make_err, make_ok, Outcome};
pub use truthy::Truthy;
