use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::table::TableValue;

/// Grammatical gender of a personal name.
///
/// Decoded from the `"m"` / `"w"` tags of the gender table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The tag used for this gender in `.sfx` data files.
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "w",
        }
    }

    pub fn is_male(self) -> bool {
        self == Gender::Male
    }
}

impl TableValue for Gender {
    fn decode(tag: &str) -> Option<Self> {
        match tag {
            "m" => Some(Gender::Male),
            "w" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}
