//! Sheet persistence: sparse `row col escaped-text` records.

pub mod parser;
pub mod writer;

pub use parser::{parse_sheet_content, read_sheet};
pub use writer::{write_sheet, write_sheet_content};
