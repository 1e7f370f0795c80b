//! Core types and logic for the Roastery coffee list.
//!
//! This crate is deliberately free of terminal dependencies. The store,
//! filtering and rendering are all pure Rust; the `roastery-cli` crate draws
//! the resulting [`view::ListView`] and feeds input events back into the
//! [`controller::ViewController`].

pub mod coffee;
pub mod controller;
pub mod error;
pub mod seed;
pub mod store;
pub mod view;

pub use error::{AddError, Error, Result};

#[cfg(test)]
mod tests;
