//! Process-wide engine for the `global-engine` feature.
//!
//! Provides free functions over a shared [`Salutation`] built from the
//! bundled tables, removing the need to construct and pass an engine around.

use std::sync::LazyLock;

use crate::{Hints, Salutation};

static GLOBAL_SALUTATION: LazyLock<Salutation> = LazyLock::new(Salutation::new);

/// Provides access to the global engine.
pub fn with_salutation<T>(f: impl FnOnce(&Salutation) -> T) -> T {
    f(&GLOBAL_SALUTATION)
}

/// The vocative of `name` using the global engine.
pub fn vocative(name: &str) -> String {
    with_salutation(|salutation| salutation.vocative(name))
}

/// The vocative of `name` with hints, using the global engine.
pub fn vocative_with(name: &str, hints: Hints) -> String {
    with_salutation(|salutation| salutation.vocative_with(name, hints))
}

/// Gender check using the global engine.
pub fn is_male(name: &str) -> bool {
    with_salutation(|salutation| salutation.is_male(name))
}
