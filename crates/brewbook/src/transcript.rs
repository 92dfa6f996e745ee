//! Ordered record of what a lesson produced.

use std::fmt::Display;

use serde::Serialize;

use crate::Lesson;

/// One step of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Entry {
    /// A line the lesson prints.
    Output { line: String },
    /// A value the lesson computes and keeps without printing.
    Value { name: String, value: String },
    /// A guarded path that refused to run.
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    lesson: Lesson,
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            entries: Vec::new(),
        }
    }

    pub fn lesson(&self) -> Lesson {
        self.lesson
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn output(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(lesson = %self.lesson, %line, "output");
        self.entries.push(Entry::Output { line });
    }

    pub(crate) fn value(&mut self, name: &str, value: impl Display) {
        self.entries.push(Entry::Value {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub(crate) fn failure(&mut self, error: &dyn std::error::Error) {
        self.entries.push(Entry::Failure {
            message: error.to_string(),
        });
    }

    /// Lines the lesson prints, in order.
    pub fn printed_lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Output { line } => Some(line.as_str()),
            _ => None,
        })
    }

    /// Looks up a recorded value by name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Value { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Failure { message } => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
