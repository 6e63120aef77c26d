//! Core functionality shared by every layer: the error type and the RNG.

pub mod error;
pub mod random;

pub use error::GameError;
