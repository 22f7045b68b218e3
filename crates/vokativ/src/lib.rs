//! Vocative forms and gender detection for Czech personal names.
//!
//! Names are matched against three suffix tables by longest ending: one
//! decides gender, one tells feminine given names from surnames, and one holds
//! the masculine vocative endings.
//!
//! ```
//! use vokativ::Salutation;
//!
//! let salutation = Salutation::new();
//! assert_eq!(salutation.vocative("Marek"), "marku");
//! assert_eq!(salutation.vocative("Nováková"), "nováková");
//! ```

mod casing;
pub mod error;
#[cfg(feature = "global-engine")]
pub mod global;
mod salutation;
pub mod table;
pub mod types;

pub use error::{LoadError, TableError};
pub use salutation::Salutation;
pub use table::{SuffixMatch, SuffixTable, SuffixTables, TableValue};
pub use types::{Gender, Hints, NameForm};
