//! Lesson selection errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LessonError {
    #[error("unknown lesson '{0}' (expected functions or objects)")]
    UnknownLesson(String),

    #[error("no lessons selected")]
    NoLessons,
}
