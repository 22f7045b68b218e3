use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::table::TableValue;

/// Whether a name is used as a given name or as a surname.
///
/// Only feminine names distinguish the two when forming the vocative:
/// surnames stay unchanged while given names ending in `-a` take `-o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameForm {
    Given,
    Surname,
}

impl NameForm {
    /// The tag used for this form in `.sfx` data files.
    pub fn tag(self) -> &'static str {
        match self {
            NameForm::Given => "f",
            NameForm::Surname => "l",
        }
    }
}

impl TableValue for NameForm {
    fn decode(tag: &str) -> Option<Self> {
        match tag {
            "f" => Some(NameForm::Given),
            "l" => Some(NameForm::Surname),
            _ => None,
        }
    }
}

impl Display for NameForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NameForm::Given => write!(f, "given name"),
            NameForm::Surname => write!(f, "surname"),
        }
    }
}
