//! Tones and styling for terminal output.

use owo_colors::{OwoColorize, Style};

/// Semantic tone of a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Titles and listing headers
    Heading,
    /// Completed mutation
    Success,
    /// Expected miss (not found, bad choice, bad input)
    Warning,
    /// Failure the user must know about
    Error,
}

impl Tone {
    pub fn style(&self) -> Style {
        match self {
            Self::Heading => Style::new().bold(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red().bold(),
        }
    }
}

/// Apply the tone's style when color is enabled; text is unchanged otherwise.
pub fn styled(text: &str, tone: Tone, color: bool) -> String {
    if color {
        text.style(tone.style()).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_without_color_is_verbatim() {
        assert_eq!(styled("Book not found.", Tone::Warning, false), "Book not found.");
    }

    #[test]
    fn test_styled_with_color_wraps_text() {
        let out = styled("Book added successfully!", Tone::Success, true);
        assert!(out.contains("Book added successfully!"));
        assert!(out.starts_with("\x1b["));
        assert_ne!(out, "Book added successfully!");
    }
}
