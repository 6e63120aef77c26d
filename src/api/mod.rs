//! Public API surface for the JS host.

pub mod wasm;
