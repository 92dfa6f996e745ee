//! Per-instance behavior.
//!
//! A [`Tea`] owns its own boxed `describe` closure. Two teas built by
//! [`Tea::new`] carry two separate closures that happen to do the same thing;
//! [`Tea::with_describe`] shows why that can be useful: any single instance
//! may carry different behavior.

use std::fmt::Debug;

type Describe = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A cup of tea that carries its own `describe` behavior.
pub struct Tea {
    kind: String,
    describe: Describe,
}

impl Tea {
    /// Creates a tea whose description reads `this is a cup of {kind}`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_describe(kind, |kind| format!("this is a cup of {kind}"))
    }

    /// Creates a tea with a custom per-instance `describe` behavior.
    ///
    /// ```
    /// # use brewbook_objects::Tea;
    /// let loud = Tea::with_describe("Assam", |kind| format!("{} !!", kind.to_uppercase()));
    /// assert_eq!(loud.describe(), "ASSAM !!");
    /// assert_eq!(Tea::new("Assam").describe(), "this is a cup of Assam");
    /// ```
    pub fn with_describe<F>(kind: impl Into<String>, describe: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            describe: Box::new(describe),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn describe(&self) -> String {
        (self.describe)(&self.kind)
    }
}

impl Debug for Tea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tea")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
