//! Revlens is a terminal-first client for checking product reviews against a
//! remote authenticity-analysis API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the view state (URL input, request phase, last report,
//!   selected category), the verdict step function, and the typewriter
//!   reveal used for decorative text.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input, request settlement, and display updates.
//! - [`api`] defines the wire payloads and the single outbound POST to the
//!   analysis endpoint.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which initializes and dispatches into
//! [`core::app`] and [`ui::app_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
