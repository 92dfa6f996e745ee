//! Shared behavior.
//!
//! [`Sound::sound`] is written once, as a default trait method. Instances only
//! hold data; the output differs per instance because the shared method reads
//! each instance's [`Sound::species`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Behavior shared by everything that makes a sound.
pub trait Sound {
    fn species(&self) -> &str;

    fn sound(&self) -> String {
        format!("{} makes a sound", self.species())
    }
}

/// An animal of some species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    species: String,
}

impl Animal {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }
}

impl Sound for Animal {
    fn species(&self) -> &str {
        &self.species
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.species)
    }
}
