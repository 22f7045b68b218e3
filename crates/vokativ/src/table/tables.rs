use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use crate::error::LoadError;
use crate::table::{SuffixTable, TableValue};
use crate::types::{Gender, NameForm};

/// File name of the gender table.
pub const GENDER_TABLE: &str = "man_vs_woman.sfx";

/// File name of the feminine given name vs. surname table.
pub const NAME_FORM_TABLE: &str = "woman_first_vs_last.sfx";

/// File name of the masculine vocative endings table.
pub const MALE_ENDINGS_TABLE: &str = "man_suffixes.sfx";

static BUNDLED: LazyLock<Arc<SuffixTables>> = LazyLock::new(|| {
    let tables = SuffixTables::from_sources(
        include_str!("../../data/man_vs_woman.sfx"),
        include_str!("../../data/woman_first_vs_last.sfx"),
        include_str!("../../data/man_suffixes.sfx"),
    )
    .unwrap_or_else(|e| panic!("bundled suffix tables are invalid: {e}"));
    Arc::new(tables)
});

/// The three lookup tables used to form vocatives.
///
/// Tables are immutable once built. Share them between engines with `Arc`.
#[derive(Debug, Clone)]
pub struct SuffixTables {
    gender: SuffixTable<Gender>,
    name_form: SuffixTable<NameForm>,
    male_endings: SuffixTable<String>,
}

impl SuffixTables {
    pub fn new(
        gender: SuffixTable<Gender>,
        name_form: SuffixTable<NameForm>,
        male_endings: SuffixTable<String>,
    ) -> Self {
        Self {
            gender,
            name_form,
            male_endings,
        }
    }

    /// The tables compiled into the crate.
    ///
    /// Parsed on first access and shared by every caller for the rest of the
    /// process.
    pub fn bundled() -> Arc<SuffixTables> {
        Arc::clone(&BUNDLED)
    }

    /// Parse the three tables from `.sfx` source text.
    ///
    /// Errors carry a `<file name>` placeholder path naming the failing table.
    pub fn from_sources(
        gender: &str,
        name_form: &str,
        male_endings: &str,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            gender: parse_source(GENDER_TABLE, gender)?,
            name_form: parse_source(NAME_FORM_TABLE, name_form)?,
            male_endings: parse_source(MALE_ENDINGS_TABLE, male_endings)?,
        })
    }

    /// Load the three table files from `dir`.
    ///
    /// A missing file is an error; there is no fallback to the bundled data.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let tables = SuffixTables::from_dir("assets/vokativ")?;
    /// ```
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        Ok(Self {
            gender: load_file(&dir.join(GENDER_TABLE))?,
            name_form: load_file(&dir.join(NAME_FORM_TABLE))?,
            male_endings: load_file(&dir.join(MALE_ENDINGS_TABLE))?,
        })
    }

    /// Name ending to gender.
    pub fn gender(&self) -> &SuffixTable<Gender> {
        &self.gender
    }

    /// Feminine name ending to given name or surname.
    pub fn name_form(&self) -> &SuffixTable<NameForm> {
        &self.name_form
    }

    /// Masculine name ending to its vocative replacement.
    pub fn male_endings(&self) -> &SuffixTable<String> {
        &self.male_endings
    }
}

fn parse_source<T: TableValue>(file_name: &str, source: &str) -> Result<SuffixTable<T>, LoadError> {
    SuffixTable::parse(source).map_err(|source| LoadError::Table {
        path: PathBuf::from(format!("<{file_name}>")),
        source,
    })
}

fn load_file<T: TableValue>(path: &Path) -> Result<SuffixTable<T>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SuffixTable::parse(&content).map_err(|source| LoadError::Table {
        path: path.to_path_buf(),
        source,
    })
}
