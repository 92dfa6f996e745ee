//! List command implementation.

use brewbook::Lesson;

use crate::style::colors::SemanticStyle;

pub fn run() {
    println!("{}", "Lessons".header());
    for lesson in Lesson::ALL {
        let name = format!("{:<10}", lesson.name());
        println!("  {} {}", name.code(), lesson.description().muted());
    }
}
