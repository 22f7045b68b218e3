//! Suffix tables and their `.sfx` file format.
//!
//! Each table maps lowercase name endings to a value and is queried by
//! longest matching suffix. The bundled tables are compiled into the crate;
//! replacements can be loaded from a directory or from strings.

mod parser;
mod suffix_table;
mod tables;

pub use parser::{RawEntry, parse_table};
pub use suffix_table::{SuffixMatch, SuffixTable, TableValue};
pub use tables::{GENDER_TABLE, MALE_ENDINGS_TABLE, NAME_FORM_TABLE, SuffixTables};
