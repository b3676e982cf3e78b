//! Mobile distribution crate for the Recommend SDK.
//!
//! Re-exports `recommend-core` and builds the static and dynamic libraries
//! the platform bindings link against.

pub use recommend_core::*;
