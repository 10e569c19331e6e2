//! Ten-pin bowling scorer (workspace facade crate).
//!
//! This package exposes `tenpin::{core,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_types as types;
