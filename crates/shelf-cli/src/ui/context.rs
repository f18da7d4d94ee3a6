//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
}

impl UiContext {
    /// Detect from the process environment.
    ///
    /// Color is enabled only when stdout is a TTY, `NO_COLOR` is unset and
    /// `TERM` is not `dumb`.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        Self::resolve(is_tty, no_color_env, term_is_dumb)
    }

    /// Plain context with no styling.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn resolve(is_tty: bool, no_color_env: bool, term_is_dumb: bool) -> Self {
        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
        }
    }
}
