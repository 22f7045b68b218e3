use bon::Builder;

use super::{Gender, NameForm};

/// Caller-supplied facts about a name, passed to
/// [`Salutation::vocative_with`](crate::Salutation::vocative_with).
///
/// Each field left as `None` is inferred from the name's ending.
///
/// # Example
///
/// ```
/// use vokativ::{Gender, Hints, NameForm, Salutation};
///
/// let salutation = Salutation::new();
/// let hints = Hints::builder()
///     .gender(Gender::Female)
///     .name_form(NameForm::Surname)
///     .build();
///
/// assert_eq!(salutation.vocative_with("Nováková", hints), "nováková");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Builder)]
pub struct Hints {
    pub gender: Option<Gender>,

    /// Ignored for masculine names.
    pub name_form: Option<NameForm>,
}

impl Hints {
    /// Hints that infer everything.
    pub fn infer() -> Self {
        Self::default()
    }
}
