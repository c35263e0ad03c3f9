//! Console rendering.

pub mod table;
