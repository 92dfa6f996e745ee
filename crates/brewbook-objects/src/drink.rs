//! Guarded construction.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ConstructionError;

/// How a constructor was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invocation {
    /// Invoked to initialize a new instance.
    Construct,
    /// Invoked as an ordinary function call.
    Call,
}

/// A drink that can only be created inside a construction context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Drink {
    pub name: String,
}

impl Drink {
    /// Creates a drink. Always succeeds: calling `new` is itself the
    /// construction context.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Runs the constructor under an explicit [`Invocation`].
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingConstructionContext`] for
    /// [`Invocation::Call`]. No partially-built drink is ever returned.
    ///
    /// ```
    /// # use brewbook_objects::{Drink, Invocation};
    /// let tea = Drink::invoke(Invocation::Construct, "tea").unwrap();
    /// assert_eq!(tea.name, "tea");
    ///
    /// let err = Drink::invoke(Invocation::Call, "coffee").unwrap_err();
    /// assert_eq!(err.to_string(), "Drink must be called with new keyword");
    /// ```
    pub fn invoke(invocation: Invocation, name: impl Into<String>) -> Result<Self, ConstructionError> {
        match invocation {
            Invocation::Construct => Ok(Self::new(name)),
            Invocation::Call => {
                let name = name.into();
                tracing::debug!(%name, "Drink invoked without construction context");
                Err(ConstructionError::MissingConstructionContext { type_name: "Drink" })
            }
        }
    }
}

impl Display for Drink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
