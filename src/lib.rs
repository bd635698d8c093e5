//! vnlocale-rs
//! ===========
//!
//! Umbrella crate for the workspace. Re-exports [`vnlocale_core`] so the demos
//! under `demos/` can be run with `cargo run --example <name>`.

pub use vnlocale_core::*;
