//! The vocative engine.
//!
//! `Salutation` owns a shared set of suffix tables and answers two questions
//! about a Czech personal name: which gender its ending suggests, and how it
//! reads in the vocative case.

use std::path::Path;
use std::sync::Arc;

use crate::casing::{lowercase, normalize};
use crate::error::LoadError;
use crate::table::SuffixTables;
use crate::types::{Gender, Hints, NameForm};

/// Forms the vocative of Czech personal names.
///
/// Cloning is cheap; clones share the same tables. All state is immutable, so
/// one engine can serve any number of threads.
///
/// # Example
///
/// ```
/// use vokativ::Salutation;
///
/// let salutation = Salutation::new();
///
/// assert_eq!(salutation.vocative("Petr"), "petře");
/// assert_eq!(salutation.vocative("Jana"), "jano");
/// assert!(!salutation.is_male("Nováková"));
/// ```
#[derive(Debug, Clone)]
pub struct Salutation {
    tables: Arc<SuffixTables>,
}

impl Default for Salutation {
    fn default() -> Self {
        Self::with_tables(SuffixTables::bundled())
    }
}

impl Salutation {
    /// Create an engine over the bundled tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over caller-provided tables.
    pub fn with_tables(tables: impl Into<Arc<SuffixTables>>) -> Self {
        Self {
            tables: tables.into(),
        }
    }

    /// Create an engine over the three table files in `dir`.
    ///
    /// All tables are read here, so a missing or malformed file is reported
    /// before any name is processed.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::with_tables(SuffixTables::from_dir(dir)?))
    }

    pub fn tables(&self) -> &SuffixTables {
        &self.tables
    }

    /// Returns true unless the name's ending marks it as feminine.
    pub fn is_male(&self, name: &str) -> bool {
        self.gender(name).is_male()
    }

    /// Infer gender from the longest matching ending of `name`.
    pub fn gender(&self, name: &str) -> Gender {
        self.gender_of_lowercase(&lowercase(name))
    }

    /// Infer whether a feminine name is a given name or a surname.
    pub fn name_form(&self, name: &str) -> NameForm {
        self.name_form_of_lowercase(&lowercase(name))
    }

    /// The vocative of `name`, inferring gender and name form.
    ///
    /// The result is trimmed and lowercase; callers restore capitalization
    /// themselves.
    pub fn vocative(&self, name: &str) -> String {
        self.vocative_with(name, Hints::infer())
    }

    /// The vocative of `name`, using `hints` where given and inferring the
    /// rest.
    pub fn vocative_with(&self, name: &str, hints: Hints) -> String {
        let name = normalize(name);
        let gender = hints
            .gender
            .unwrap_or_else(|| self.gender_of_lowercase(&name));

        match gender {
            Gender::Male => self.male_vocative(&name),
            Gender::Female => {
                let form = hints
                    .name_form
                    .unwrap_or_else(|| self.name_form_of_lowercase(&name));
                match form {
                    NameForm::Given => female_given_vocative(name),
                    NameForm::Surname => name,
                }
            }
        }
    }

    fn gender_of_lowercase(&self, name: &str) -> Gender {
        *self.tables.gender().longest_match(name).value
    }

    fn name_form_of_lowercase(&self, name: &str) -> NameForm {
        *self.tables.name_form().longest_match(name).value
    }

    /// Replace the longest known ending with its vocative form.
    fn male_vocative(&self, name: &str) -> String {
        let matched = self.tables.male_endings().longest_match(name);
        let stem = &name[..name.len() - matched.suffix.len()];
        format!("{stem}{}", matched.value)
    }
}

/// A final `-a` becomes `-o`; other endings are left alone.
fn female_given_vocative(mut name: String) -> String {
    if name.ends_with('a') {
        name.pop();
        name.push('o');
    }
    name
}
