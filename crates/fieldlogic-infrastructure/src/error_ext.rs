//! Error extension utilities
//!
//! Maps errors from third-party crates (figment, toml, I/O) into the domain
//! [`Error`] with a short description of what was being attempted.

use fieldlogic_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// ```ignore
/// let text = std::fs::read_to_string(&path)
///     .with_context(|| format!("Failed to read {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, converting the error into a configuration error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Add lazily built context
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{}: {err}", f()), err))
    }
}
