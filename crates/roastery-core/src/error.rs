//! Error types for `roastery-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown roast filter: {0:?} (expected all, light, medium or dark)")]
  UnknownRoastFilter(String),
}

/// The single user-correctable failure of the add form.
///
/// The display text is what the host surface shows in its alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
  #[error("Please enter a coffee name.")]
  EmptyName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
