//! Semantic color palette for terminal output.
//!
//! Colors are applied only when the target stream supports them, so piped
//! output stays plain. Error and warning styles target stderr; the rest
//! target stdout.

use owo_colors::{OwoColorize, Stream, Style};

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Green bold.
    fn success(&self) -> String;
    /// Red bold, for stderr.
    fn error(&self) -> String;
    /// Yellow, for stderr.
    fn warning(&self) -> String;
    /// Dimmed.
    fn muted(&self) -> String;
    /// Bold.
    fn header(&self) -> String;
    /// Blue.
    fn code(&self) -> String;
}

fn styled<T: std::fmt::Display>(value: &T, style: Style, stream: Stream) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value
            .if_supports_color(stream, |text| text.style(style))
            .to_string()
    }
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        styled(self, Style::new().green().bold(), Stream::Stdout)
    }

    fn error(&self) -> String {
        styled(self, Style::new().red().bold(), Stream::Stderr)
    }

    fn warning(&self) -> String {
        styled(self, Style::new().yellow(), Stream::Stderr)
    }

    fn muted(&self) -> String {
        styled(self, Style::new().dimmed(), Stream::Stdout)
    }

    fn header(&self) -> String {
        styled(self, Style::new().bold(), Stream::Stdout)
    }

    fn code(&self) -> String {
        styled(self, Style::new().blue(), Stream::Stdout)
    }
}
