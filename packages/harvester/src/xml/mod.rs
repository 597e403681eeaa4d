//! Namespace-aware XML helpers for XZuFi messages.

mod utils;

pub use utils::*;
