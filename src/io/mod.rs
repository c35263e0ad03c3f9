//! Text serialization of a built store.

pub mod csv;
pub mod json;

pub use self::csv::{read_csv, write_csv};
pub use self::json::{read_json, write_json};
