//! Falling block shapes (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `fallblocks::{core, input, shapes, types}`.

pub use fallblocks_core as core;
pub use fallblocks_input as input;
pub use fallblocks_shapes as shapes;
pub use fallblocks_types as types;
