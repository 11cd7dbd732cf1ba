//! Workspace facade: re-exports `spotfinder-core` so the demos and
//! downstream tooling can depend on a single crate.
pub use spotfinder_core::*;
