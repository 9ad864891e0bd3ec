//! tinysheet-core - UI-agnostic spreadsheet document + storage.

pub mod error;
pub mod sheet;
pub mod storage;

pub use error::{Result, SheetError};
pub use sheet::Spreadsheet;

pub use tinysheet_engine::engine::{CellRef, ErrorKind};
