//! # brewbook
//!
//! Runnable lessons on functions, closures, and constructors. Each lesson
//! runs its examples once, in order, and records the result as a
//! [`Transcript`].
//!
//! # Example
//!
//! ```
//! use brewbook::{Lesson, LessonOptions};
//!
//! let transcript = Lesson::Functions.run(&LessonOptions::default());
//! let lines: Vec<&str> = transcript.printed_lines().collect();
//!
//! assert_eq!(
//!     lines,
//!     [
//!         "making green tea",
//!         "Order confirmed for chai ",
//!         "makeTea : earl grey",
//!         "Making green tea",
//!     ]
//! );
//! assert_eq!(transcript.value_of("totalCost"), Some("4990"));
//! ```

mod error;
mod lesson;
mod transcript;

pub use brewbook_config as config;
pub use brewbook_functions as functions;
pub use brewbook_objects as objects;

pub use error::LessonError;
pub use lesson::{Lesson, LessonOptions};
pub use transcript::{Entry, Transcript};

/// Resolves lesson names, keeping first occurrences in the given order.
///
/// # Errors
///
/// [`LessonError::UnknownLesson`] for any name that is not a lesson, and
/// [`LessonError::NoLessons`] when `names` is empty.
pub fn resolve_lessons<S: AsRef<str>>(names: &[S]) -> Result<Vec<Lesson>, LessonError> {
    if names.is_empty() {
        return Err(LessonError::NoLessons);
    }

    let mut lessons = Vec::with_capacity(names.len());
    for name in names {
        let lesson: Lesson = name.as_ref().parse()?;
        if !lessons.contains(&lesson) {
            lessons.push(lesson);
        }
    }
    Ok(lessons)
}

/// Runs `lessons` in order.
pub fn run_lessons(lessons: &[Lesson], options: &LessonOptions) -> Vec<Transcript> {
    lessons.iter().map(|lesson| lesson.run(options)).collect()
}
