// Columnar storage
pub mod column_store;

// Re-exports
pub use column_store::{ColumnStore, FrameOptions};
