mod gender;
mod hints;
mod name_form;

pub use gender::Gender;
pub use hints::Hints;
pub use name_form::NameForm;
